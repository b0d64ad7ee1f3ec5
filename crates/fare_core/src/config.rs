//! Pricing configuration: rate cards, vehicle multipliers, and fare bounds.
//!
//! Loaded once at process start and treated as immutable for the lifetime of
//! each request. Every field has a default so partial configs degrade
//! gracefully instead of failing.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rates::{resolve_rates, RateCard, RateTable, ResolvedRates, VehicleMultipliers};
use crate::trip::{ServiceType, VehicleType};

/// Default fare floor in currency units.
pub const DEFAULT_MINIMUM_FARE: f64 = 100.0;

/// Default fare ceiling in currency units.
pub const DEFAULT_MAXIMUM_FARE: f64 = 50_000.0;

/// Read-only pricing inputs for the fare engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub rates: RateTable,
    pub vehicle_multipliers: VehicleMultipliers,
    pub minimum_fare: f64,
    pub maximum_fare: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rates: RateTable::default(),
            vehicle_multipliers: VehicleMultipliers::default(),
            minimum_fare: DEFAULT_MINIMUM_FARE,
            maximum_fare: DEFAULT_MAXIMUM_FARE,
        }
    }
}

impl PricingConfig {
    /// Set the rate card for a service type.
    pub fn with_rate_card(mut self, service: ServiceType, card: RateCard) -> Self {
        self.rates = self.rates.with_card(service, card);
        self
    }

    /// Set the fare multiplier for a vehicle class.
    pub fn with_vehicle_multiplier(mut self, vehicle: VehicleType, multiplier: f64) -> Self {
        self.vehicle_multipliers = self.vehicle_multipliers.with_multiplier(vehicle, multiplier);
        self
    }

    /// Set the fare floor and ceiling.
    pub fn with_fare_bounds(mut self, minimum_fare: f64, maximum_fare: f64) -> Self {
        self.minimum_fare = minimum_fare;
        self.maximum_fare = maximum_fare;
        self
    }

    /// Resolve the rate card and vehicle multiplier for a trip.
    pub fn resolve(&self, service: ServiceType, vehicle: VehicleType) -> ResolvedRates {
        resolve_rates(&self.rates, &self.vehicle_multipliers, service, vehicle)
    }

    /// Parse a config from a JSON string. Missing fields use defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Load a config from a JSON file, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "WARNING: Failed to load pricing config from '{}': {}. Falling back to defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

/// Errors from loading a pricing config.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "io error: {}", err),
            ConfigError::Json(err) => write!(f, "invalid JSON: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}
