//! Rate resolution: per-service rate cards and vehicle-class multipliers.
//!
//! Lookups never fail. Unknown or missing entries fall back to documented
//! defaults so pricing degrades gracefully instead of erroring.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::trip::{ServiceType, VehicleType};

/// Default base fare in currency units, used when a service has no rate card.
pub const DEFAULT_BASE_FARE: f64 = 50.0;

/// Default per-kilometre rate in currency units.
pub const DEFAULT_PER_KM_RATE: f64 = 12.0;

/// Default per-minute rate in currency units.
pub const DEFAULT_PER_MINUTE_RATE: f64 = 2.0;

/// Rates for a single service type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub per_minute_rate: f64,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            base_fare: DEFAULT_BASE_FARE,
            per_km_rate: DEFAULT_PER_KM_RATE,
            per_minute_rate: DEFAULT_PER_MINUTE_RATE,
        }
    }
}

/// Per-service rate cards. Services without an entry use the default card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    cards: HashMap<ServiceType, RateCard>,
}

impl RateTable {
    /// Set the card for a service type.
    pub fn with_card(mut self, service: ServiceType, card: RateCard) -> Self {
        self.cards.insert(service, card);
        self
    }

    /// Look up the card for a service. Missing entries use the default card.
    pub fn card_for(&self, service: ServiceType) -> RateCard {
        self.cards.get(&service).copied().unwrap_or_default()
    }
}

/// Vehicle-class fare multipliers. Classes without an entry use 1.0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleMultipliers {
    multipliers: HashMap<VehicleType, f64>,
}

impl Default for VehicleMultipliers {
    fn default() -> Self {
        let mut multipliers = HashMap::new();
        multipliers.insert(VehicleType::Sedan, 1.0);
        multipliers.insert(VehicleType::Suv, 1.3);
        multipliers.insert(VehicleType::Premium, 1.8);
        Self { multipliers }
    }
}

impl VehicleMultipliers {
    /// Set the multiplier for a vehicle class.
    pub fn with_multiplier(mut self, vehicle: VehicleType, multiplier: f64) -> Self {
        self.multipliers.insert(vehicle, multiplier);
        self
    }

    /// Look up the multiplier for a vehicle class. Missing entries use 1.0.
    pub fn multiplier_for(&self, vehicle: VehicleType) -> f64 {
        self.multipliers.get(&vehicle).copied().unwrap_or(1.0)
    }
}

/// Fully resolved rates for one fare computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedRates {
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub per_minute_rate: f64,
    pub vehicle_multiplier: f64,
}

/// Resolve the rate card and vehicle multiplier for a trip. Pure lookup.
pub fn resolve_rates(
    rates: &RateTable,
    multipliers: &VehicleMultipliers,
    service: ServiceType,
    vehicle: VehicleType,
) -> ResolvedRates {
    let card = rates.card_for(service);
    ResolvedRates {
        base_fare: card.base_fare,
        per_km_rate: card.per_km_rate,
        per_minute_rate: card.per_minute_rate,
        vehicle_multiplier: multipliers.multiplier_for(vehicle),
    }
}
