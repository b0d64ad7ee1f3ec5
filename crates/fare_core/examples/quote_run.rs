//! Quote a handful of trips against a sample pricing config and print the
//! itemized breakdowns.
//!
//! Run with: cargo run -p fare_core --example quote_run

use chrono::{Duration, TimeZone, Utc};
use fare_core::config::PricingConfig;
use fare_core::geometry::{GeoPoint, StraightLineGeometryProvider, TripGeometryProvider};
use fare_core::quote::quote_fare;
use fare_core::rates::RateCard;
use fare_core::trip::{ServiceType, TripDescriptor, VehicleType};

fn main() {
    let config = PricingConfig::default()
        .with_rate_card(
            ServiceType::City,
            RateCard {
                base_fare: 50.0,
                per_km_rate: 12.0,
                per_minute_rate: 2.0,
            },
        )
        .with_rate_card(
            ServiceType::Airport,
            RateCard {
                base_fare: 80.0,
                per_km_rate: 14.0,
                per_minute_rate: 2.0,
            },
        );

    // Friday 2025-06-06 18:30 UTC: inside the weekday evening peak.
    let reference = Utc.with_ymd_and_hms(2025, 6, 6, 18, 30, 0).unwrap();

    // Route one trip through the straight-line estimator; the rest carry
    // pre-routed geometry.
    let provider = StraightLineGeometryProvider::default();
    let mitte = GeoPoint {
        lat: 52.5200,
        lng: 13.4050,
    };
    let ber = GeoPoint {
        lat: 52.3667,
        lng: 13.5033,
    };
    let routed = provider.estimate(mitte, ber).expect("estimate");

    let trips = vec![
        (
            "airport premium, routed",
            TripDescriptor::new(ServiceType::Airport, VehicleType::Premium)
                .with_geometry(routed.distance_km, routed.duration_minutes),
        ),
        (
            "city sedan, short hop",
            TripDescriptor::new(ServiceType::City, VehicleType::Sedan).with_geometry(1.5, 10.0),
        ),
        (
            "outstation suv, +30h",
            TripDescriptor::new(ServiceType::Outstation, VehicleType::Suv)
                .with_geometry(60.0, 90.0)
                .with_scheduled_at(reference + Duration::hours(30)),
        ),
        (
            "city sedan, no route",
            TripDescriptor::new(ServiceType::City, VehicleType::Sedan),
        ),
    ];

    println!("--- Fare quotes at {} ---", reference);
    for (label, trip) in &trips {
        match quote_fare(trip, &config, reference) {
            Some(fare) => {
                let reason = fare
                    .surge_reason
                    .as_deref()
                    .map(|r| format!("  ({})", r))
                    .unwrap_or_default();
                println!(
                    "  {:26} base={:>4} distance={:>5} time={:>4} surge={:.2} total={:>6}{}",
                    label,
                    fare.base_fare,
                    fare.distance_fare,
                    fare.time_fare,
                    fare.surge_multiplier,
                    fare.total_fare,
                    reason,
                );
            }
            None => println!("  {:26} fare unavailable (no geometry)", label),
        }
    }
}
