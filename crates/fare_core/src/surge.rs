//! Surge rule engine: an ordered table of pricing rules folded over a
//! running multiplier.
//!
//! Each rule is a `{label, effect, predicate}` descriptor. The effects are
//! deliberately heterogeneous and part of the pricing policy: the peak and
//! weekend rules assign the multiplier outright, the airport rule raises it
//! to a floor, and the distance and booking-lead rules scale it. Evaluation
//! order is fixed; reordering a rule or changing its operator changes prices.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

use crate::trip::ServiceType;

// ---------------------------------------------------------------------------
// Surge context
// ---------------------------------------------------------------------------

/// Time-derived inputs for surge evaluation, captured once per quote.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurgeContext {
    /// Hour of day, 0-23.
    pub hour: u32,
    pub weekday: Weekday,
    /// Lead time to the scheduled pickup, in hours. `None` for ride-now.
    pub hours_until_scheduled: Option<f64>,
}

impl SurgeContext {
    /// Derive hour, day, and booking lead time from a single reference
    /// timestamp.
    ///
    /// Derivation is in UTC. Callers pricing a specific market supply a
    /// reference time already shifted to that market's wall clock.
    pub fn derive(reference: DateTime<Utc>, scheduled_at: Option<DateTime<Utc>>) -> Self {
        Self {
            hour: reference.hour(),
            weekday: reference.weekday(),
            hours_until_scheduled: scheduled_at
                .map(|pickup| (pickup - reference).num_seconds() as f64 / 3600.0),
        }
    }

    /// Day of week encoded as 0 = Sunday .. 6 = Saturday.
    pub fn day_of_week(&self) -> u32 {
        self.weekday.num_days_from_sunday()
    }

    fn is_weekday(&self) -> bool {
        !matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// What a fired rule does to the running multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
enum RuleEffect {
    /// Overwrite the multiplier.
    Assign(f64),
    /// Raise the multiplier to at least this value.
    AtLeast(f64),
    /// Scale the multiplier.
    Scale(f64),
}

/// Everything a rule predicate may inspect.
#[derive(Clone, Copy, Debug)]
pub struct RuleInput<'a> {
    pub service: ServiceType,
    pub distance_km: f64,
    pub time: &'a SurgeContext,
}

/// One pricing rule: a predicate plus its effect and display label.
pub struct SurgeRule {
    pub label: &'static str,
    effect: RuleEffect,
    applies: fn(&RuleInput<'_>) -> bool,
}

fn weekday_peak(input: &RuleInput<'_>) -> bool {
    let t = input.time;
    t.is_weekday() && (matches!(t.hour, 7..=9) || matches!(t.hour, 17..=19))
}

fn weekend_start(input: &RuleInput<'_>) -> bool {
    input.time.weekday == Weekday::Fri && input.time.hour >= 20
}

fn weekend(input: &RuleInput<'_>) -> bool {
    // Disjoint from `weekend_start` (Fri vs Sat/Sun), which preserves the
    // else-if pairing of the two rules.
    match input.time.weekday {
        Weekday::Sat => true,
        Weekday::Sun => input.time.hour <= 22,
        _ => false,
    }
}

fn airport_peak(input: &RuleInput<'_>) -> bool {
    input.service == ServiceType::Airport
        && (matches!(input.time.hour, 4..=7) || matches!(input.time.hour, 18..=21))
}

fn short_trip(input: &RuleInput<'_>) -> bool {
    input.distance_km < 2.0
}

fn long_distance(input: &RuleInput<'_>) -> bool {
    input.distance_km > 50.0
}

fn advance_booking(input: &RuleInput<'_>) -> bool {
    matches!(input.time.hours_until_scheduled, Some(lead) if lead > 24.0)
}

fn early_booking(input: &RuleInput<'_>) -> bool {
    // Disjoint from `advance_booking` (4 < lead <= 24 vs lead > 24).
    matches!(input.time.hours_until_scheduled, Some(lead) if lead > 4.0 && lead <= 24.0)
}

/// The pricing policy, in evaluation order. Order and operators are part of
/// the policy contract.
const STANDARD_RULES: [SurgeRule; 8] = [
    SurgeRule {
        label: "Peak hours",
        effect: RuleEffect::Assign(1.5),
        applies: weekday_peak,
    },
    SurgeRule {
        label: "Weekend start",
        effect: RuleEffect::Assign(1.3),
        applies: weekend_start,
    },
    SurgeRule {
        label: "Weekend",
        effect: RuleEffect::Assign(1.4),
        applies: weekend,
    },
    SurgeRule {
        label: "Airport peak",
        effect: RuleEffect::AtLeast(1.2),
        applies: airport_peak,
    },
    SurgeRule {
        label: "Short trip",
        effect: RuleEffect::Scale(1.1),
        applies: short_trip,
    },
    SurgeRule {
        label: "Long distance",
        effect: RuleEffect::Scale(1.2),
        applies: long_distance,
    },
    SurgeRule {
        label: "Advance booking discount",
        effect: RuleEffect::Scale(0.9),
        applies: advance_booking,
    },
    SurgeRule {
        label: "Early booking discount",
        effect: RuleEffect::Scale(0.95),
        applies: early_booking,
    },
];

/// The standard rule table, in evaluation order.
pub fn standard_rules() -> &'static [SurgeRule] {
    &STANDARD_RULES
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Result of surge evaluation: the combined multiplier (unrounded) and the
/// labels of every rule that fired, in evaluation order.
#[derive(Clone, Debug, PartialEq)]
pub struct SurgeOutcome {
    pub multiplier: f64,
    pub reasons: Vec<&'static str>,
}

impl SurgeOutcome {
    /// Human-readable trail of applied rules, `None` when nothing fired.
    pub fn reason_trail(&self) -> Option<String> {
        if self.reasons.is_empty() {
            None
        } else {
            Some(self.reasons.join(" + "))
        }
    }
}

/// Fold the rule table over a trip. The multiplier starts at 1.0 and leaves
/// this stage unrounded; display rounding happens in the aggregator.
pub fn evaluate_surge(service: ServiceType, distance_km: f64, time: &SurgeContext) -> SurgeOutcome {
    let input = RuleInput {
        service,
        distance_km,
        time,
    };
    let mut multiplier = 1.0;
    let mut reasons = Vec::new();

    for rule in &STANDARD_RULES {
        if !(rule.applies)(&input) {
            continue;
        }
        match rule.effect {
            RuleEffect::Assign(value) => multiplier = value,
            RuleEffect::AtLeast(floor) => multiplier = multiplier.max(floor),
            RuleEffect::Scale(factor) => multiplier *= factor,
        }
        // A fired rule is always recorded, even when a later assignment
        // overwrites its numeric effect or a floor is already met.
        reasons.push(rule.label);
    }

    SurgeOutcome {
        multiplier,
        reasons,
    }
}
