//! Test helpers for common fixtures across test files.

use chrono::{DateTime, TimeZone, Utc};

use crate::trip::{ServiceType, TripDescriptor, VehicleType};

/// Monday 2025-06-02 08:00 UTC, inside the weekday morning peak.
pub fn monday_morning_peak() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap()
}

/// Tuesday 2025-06-03 11:00 UTC, a plain off-peak weekday hour.
pub fn tuesday_off_peak() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 3, 11, 0, 0).unwrap()
}

/// Saturday 2025-06-07 15:00 UTC.
pub fn saturday_afternoon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 7, 15, 0, 0).unwrap()
}

/// A 10 km / 20 min city trip in a sedan. Fires no distance rules.
pub fn city_sedan_trip() -> TripDescriptor {
    TripDescriptor::new(ServiceType::City, VehicleType::Sedan).with_geometry(10.0, 20.0)
}
