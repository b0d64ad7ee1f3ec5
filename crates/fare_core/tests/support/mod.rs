#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use fare_core::config::PricingConfig;
use fare_core::trip::{ServiceType, TripDescriptor, VehicleType};

/// Build a UTC timestamp from calendar parts.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

/// Default config with the clamp opened wide so tests can observe raw totals.
pub fn unclamped_config() -> PricingConfig {
    PricingConfig::default().with_fare_bounds(0.0, 1_000_000.0)
}

/// Trip with explicit geometry, ride-now.
pub fn trip(
    service: ServiceType,
    vehicle: VehicleType,
    distance_km: f64,
    duration_minutes: f64,
) -> TripDescriptor {
    TripDescriptor::new(service, vehicle).with_geometry(distance_km, duration_minutes)
}
