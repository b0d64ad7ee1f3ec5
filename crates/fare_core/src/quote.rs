//! Quote entry point: compose rate resolution, surge evaluation, and fare
//! aggregation for one trip.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::config::PricingConfig;
use crate::fare::{aggregate_fare, FareBreakdown};
use crate::surge::{evaluate_surge, SurgeContext};
use crate::trip::TripDescriptor;

/// Compute the itemized fare for a trip at the given reference time.
///
/// Returns `None` when the trip has no usable geometry: a missing estimate
/// means "fare unavailable", never a zero fare.
pub fn quote_fare(
    trip: &TripDescriptor,
    config: &PricingConfig,
    reference_time: DateTime<Utc>,
) -> Option<FareBreakdown> {
    if !trip.has_geometry() {
        return None;
    }

    let rates = config.resolve(trip.service_type, trip.vehicle_type);
    let time = SurgeContext::derive(reference_time, trip.scheduled_at);
    let surge = evaluate_surge(trip.service_type, trip.distance_km, &time);

    Some(aggregate_fare(
        &rates,
        trip.distance_km,
        trip.duration_minutes,
        &surge,
        config.minimum_fare,
        config.maximum_fare,
    ))
}

/// Compute a fare using the supplied clock, reading it exactly once.
pub fn quote_fare_now(
    trip: &TripDescriptor,
    config: &PricingConfig,
    clock: &dyn Clock,
) -> Option<FareBreakdown> {
    quote_fare(trip, config, clock.now())
}
