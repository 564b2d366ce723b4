//! Criterion benchmarks for full experiment runs.

use criterion::{criterion_group, criterion_main, Criterion};
use ricochet_bench::{dipole_profile, reference_profile};
use ricochet_engine::ExperimentConfig;
use std::hint::black_box;

/// Benchmark: reference profile (160-cell reflector + 3 dipoles), degree 3.
fn bench_reference_degree3(c: &mut Criterion) {
    let (mut container, antenna) = reference_profile(3, 42);
    let cfg = ExperimentConfig {
        max_degree: 3,
        record: false,
        route_cap: None,
    };

    c.bench_function("experiment_reference_degree3", |b| {
        b.iter(|| {
            container.clear();
            let report = container.run_experiment(antenna, &cfg).unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: 6 dipoles, degree 4 (point couplings only).
fn bench_dipoles_degree4(c: &mut Criterion) {
    let (mut container, antenna) = dipole_profile(6);
    let cfg = ExperimentConfig {
        max_degree: 4,
        record: false,
        route_cap: None,
    };

    c.bench_function("experiment_dipoles6_degree4", |b| {
        b.iter(|| {
            container.clear();
            let report = container.run_experiment(antenna, &cfg).unwrap();
            black_box(report);
        });
    });
}

criterion_group!(benches, bench_reference_degree3, bench_dipoles_degree4);
criterion_main!(benches);
