//! Performance benchmarks for fare_core using Criterion.rs.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fare_core::config::PricingConfig;
use fare_core::quote::quote_fare;
use fare_core::trip::{ServiceType, TripDescriptor, VehicleType};

fn bench_quote_fare(c: &mut Criterion) {
    let config = PricingConfig::default();
    let reference = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();

    let trips = vec![
        (
            "city_peak",
            TripDescriptor::new(ServiceType::City, VehicleType::Sedan).with_geometry(10.0, 20.0),
        ),
        (
            "airport_short",
            TripDescriptor::new(ServiceType::Airport, VehicleType::Premium)
                .with_geometry(1.5, 10.0),
        ),
        (
            "outstation_scheduled",
            TripDescriptor::new(ServiceType::Outstation, VehicleType::Suv)
                .with_geometry(60.0, 90.0)
                .with_scheduled_at(reference + Duration::hours(30)),
        ),
    ];

    let mut group = c.benchmark_group("quote_fare");
    for (name, trip) in &trips {
        group.bench_with_input(BenchmarkId::from_parameter(name), trip, |b, trip| {
            b.iter(|| black_box(quote_fare(trip, &config, reference)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quote_fare);
criterion_main!(benches);
