use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trip category. Selects the rate-table entry and gates service-specific
/// surge rules.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    City,
    Outstation,
    Airport,
    Hourly,
}

/// Vehicle class requested for the trip.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Sedan,
    Suv,
    Premium,
}

/// A single fare request: what the rider selected plus the routed geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripDescriptor {
    pub service_type: ServiceType,
    pub vehicle_type: VehicleType,
    /// Estimated trip distance in kilometres.
    pub distance_km: f64,
    /// Estimated trip duration in minutes.
    pub duration_minutes: f64,
    /// Requested pickup time for scheduled bookings. `None` = ride now.
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl TripDescriptor {
    pub fn new(service_type: ServiceType, vehicle_type: VehicleType) -> Self {
        Self {
            service_type,
            vehicle_type,
            distance_km: 0.0,
            duration_minutes: 0.0,
            scheduled_at: None,
        }
    }

    /// Set the routed distance (km) and duration (minutes).
    pub fn with_geometry(mut self, distance_km: f64, duration_minutes: f64) -> Self {
        self.distance_km = distance_km;
        self.duration_minutes = duration_minutes;
        self
    }

    /// Set the requested pickup time for a scheduled booking.
    pub fn with_scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(scheduled_at);
        self
    }

    /// Whether the trip carries usable geometry. Zero, negative, and NaN
    /// distance or duration all count as unusable.
    pub fn has_geometry(&self) -> bool {
        self.distance_km > 0.0 && self.duration_minutes > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn builder_sets_geometry_and_schedule() {
        let pickup = Utc.with_ymd_and_hms(2025, 6, 4, 17, 0, 0).unwrap();
        let trip = TripDescriptor::new(ServiceType::Airport, VehicleType::Suv)
            .with_geometry(22.5, 35.0)
            .with_scheduled_at(pickup);

        assert_eq!(trip.distance_km, 22.5);
        assert_eq!(trip.duration_minutes, 35.0);
        assert_eq!(trip.scheduled_at, Some(pickup));
    }

    #[test]
    fn geometry_check_rejects_zero_negative_and_nan() {
        let base = TripDescriptor::new(ServiceType::City, VehicleType::Sedan);

        assert!(base.clone().with_geometry(10.0, 20.0).has_geometry());
        assert!(!base.clone().with_geometry(0.0, 20.0).has_geometry());
        assert!(!base.clone().with_geometry(10.0, 0.0).has_geometry());
        assert!(!base.clone().with_geometry(-1.0, 20.0).has_geometry());
        assert!(!base.clone().with_geometry(f64::NAN, 20.0).has_geometry());
        assert!(!base.has_geometry());
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ServiceType::Outstation).unwrap(),
            "\"outstation\""
        );
        assert_eq!(serde_json::to_string(&VehicleType::Suv).unwrap(), "\"suv\"");
    }
}
