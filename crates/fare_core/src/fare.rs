//! Fare aggregation: combine resolved rates, trip geometry, and surge into
//! the final itemized breakdown.

use serde::{Deserialize, Serialize};

use crate::rates::ResolvedRates;
use crate::surge::SurgeOutcome;

/// Itemized fare for one trip.
///
/// Component fares are vehicle-adjusted and rounded to integer currency
/// units; the total is clamped to the configured floor/ceiling before
/// rounding. Rounding happens only here, at the presentation boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareBreakdown {
    pub base_fare: i64,
    pub distance_fare: i64,
    pub time_fare: i64,
    /// Surge multiplier rounded to 2 decimal places for display.
    pub surge_multiplier: f64,
    pub total_fare: i64,
    pub estimated_distance_km: f64,
    pub estimated_duration_minutes: f64,
    /// " + "-joined labels of the surge rules that fired.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub surge_reason: Option<String>,
}

/// Round to the nearest integer currency unit, halves up.
fn round_currency(amount: f64) -> i64 {
    amount.round() as i64
}

fn round_multiplier(multiplier: f64) -> f64 {
    (multiplier * 100.0).round() / 100.0
}

/// Combine rates, geometry, and surge into a breakdown.
///
/// The unrounded surge multiplier feeds the total; the clamp applies the
/// floor first, then the ceiling.
pub fn aggregate_fare(
    rates: &ResolvedRates,
    distance_km: f64,
    duration_minutes: f64,
    surge: &SurgeOutcome,
    minimum_fare: f64,
    maximum_fare: f64,
) -> FareBreakdown {
    let distance_fare = distance_km * rates.per_km_rate;
    let time_fare = duration_minutes * rates.per_minute_rate;
    let subtotal = (rates.base_fare + distance_fare + time_fare) * rates.vehicle_multiplier;
    let surged = subtotal * surge.multiplier;
    let clamped = surged.max(minimum_fare).min(maximum_fare);

    FareBreakdown {
        base_fare: round_currency(rates.base_fare * rates.vehicle_multiplier),
        distance_fare: round_currency(distance_fare * rates.vehicle_multiplier),
        time_fare: round_currency(time_fare * rates.vehicle_multiplier),
        surge_multiplier: round_multiplier(surge.multiplier),
        total_fare: round_currency(clamped),
        estimated_distance_km: distance_km,
        estimated_duration_minutes: duration_minutes,
        surge_reason: surge.reason_trail(),
    }
}
