use std::io::Write;

use fare_core::config::{ConfigError, PricingConfig, DEFAULT_MAXIMUM_FARE};
use fare_core::rates::{RateCard, DEFAULT_BASE_FARE};
use fare_core::trip::{ServiceType, VehicleType};

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = PricingConfig::from_json_str(r#"{"minimum_fare": 60.0}"#).expect("config");

    assert_eq!(config.minimum_fare, 60.0);
    assert_eq!(config.maximum_fare, DEFAULT_MAXIMUM_FARE);

    let resolved = config.resolve(ServiceType::City, VehicleType::Sedan);
    assert_eq!(resolved.base_fare, DEFAULT_BASE_FARE);
    assert_eq!(resolved.vehicle_multiplier, 1.0);
}

#[test]
fn rate_table_json_uses_service_names_as_keys() {
    let config = PricingConfig::from_json_str(
        r#"{"rates": {"airport": {"base_fare": 80.0, "per_km_rate": 14.0, "per_minute_rate": 2.5}}}"#,
    )
    .expect("config");

    let airport = config.resolve(ServiceType::Airport, VehicleType::Sedan);
    assert_eq!(airport.base_fare, 80.0);
    assert_eq!(airport.per_km_rate, 14.0);

    // Unlisted services still fall back to the default card.
    let city = config.resolve(ServiceType::City, VehicleType::Sedan);
    assert_eq!(city.base_fare, DEFAULT_BASE_FARE);
}

#[test]
fn full_config_round_trips_through_json() {
    let config = PricingConfig::default()
        .with_rate_card(
            ServiceType::Outstation,
            RateCard {
                base_fare: 120.0,
                per_km_rate: 15.0,
                per_minute_rate: 1.5,
            },
        )
        .with_vehicle_multiplier(VehicleType::Suv, 1.35)
        .with_fare_bounds(90.0, 9_000.0);

    let json = serde_json::to_string(&config).expect("serialize");
    let parsed = PricingConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn malformed_json_is_a_typed_error() {
    match PricingConfig::from_json_str("{not json") {
        Err(ConfigError::Json(_)) => {}
        other => panic!("expected json error, got {:?}", other),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    match PricingConfig::from_json_file("/nonexistent/pricing.json") {
        Err(ConfigError::Io(_)) => {}
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn load_or_default_falls_back_on_missing_file() {
    let config = PricingConfig::load_or_default("/nonexistent/pricing.json");
    assert_eq!(config, PricingConfig::default());
}

#[test]
fn load_from_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"minimum_fare": 75.0, "vehicle_multipliers": {{"premium": 2.1}}}}"#
    )
    .expect("write config");

    let config = PricingConfig::from_json_file(file.path()).expect("load");
    assert_eq!(config.minimum_fare, 75.0);
    assert_eq!(
        config
            .resolve(ServiceType::City, VehicleType::Premium)
            .vehicle_multiplier,
        2.1
    );
}
