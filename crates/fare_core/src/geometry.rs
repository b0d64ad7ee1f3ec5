//! Trip geometry providers: pluggable distance/duration estimation.
//!
//! The engine never computes geometry itself; callers obtain an estimate
//! from a provider (or a real routing service) and attach it to the trip.
//! The providers here cover the straight-line estimate and fixed values for
//! tests and demos.

use serde::{Deserialize, Serialize};

/// Mean earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed average city speed for duration estimates (km/h).
const DEFAULT_AVG_SPEED_KMH: f64 = 40.0;

/// A WGS84 coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Haversine great-circle distance between two points, in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance and duration estimate for a trip.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripGeometry {
    pub distance_km: f64,
    pub duration_minutes: f64,
}

/// Trait for geometry backends. Returns `None` when no estimate is possible.
pub trait TripGeometryProvider: Send + Sync {
    fn estimate(&self, pickup: GeoPoint, dropoff: GeoPoint) -> Option<TripGeometry>;
}

/// Straight-line estimate: haversine distance plus a constant-speed duration.
pub struct StraightLineGeometryProvider {
    pub avg_speed_kmh: f64,
}

impl Default for StraightLineGeometryProvider {
    fn default() -> Self {
        Self {
            avg_speed_kmh: DEFAULT_AVG_SPEED_KMH,
        }
    }
}

impl TripGeometryProvider for StraightLineGeometryProvider {
    fn estimate(&self, pickup: GeoPoint, dropoff: GeoPoint) -> Option<TripGeometry> {
        if self.avg_speed_kmh <= 0.0 {
            return None;
        }
        let distance_km = haversine_km(pickup, dropoff);
        let duration_minutes = distance_km / self.avg_speed_kmh * 60.0;
        Some(TripGeometry {
            distance_km,
            duration_minutes,
        })
    }
}

/// Fixed estimate regardless of endpoints. Useful for tests and demos.
pub struct FixedGeometryProvider(pub TripGeometry);

impl TripGeometryProvider for FixedGeometryProvider {
    fn estimate(&self, _pickup: GeoPoint, _dropoff: GeoPoint) -> Option<TripGeometry> {
        Some(self.0)
    }
}
