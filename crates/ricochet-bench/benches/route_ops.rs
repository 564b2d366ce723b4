//! Criterion micro-benchmarks for lazy route enumeration.

use criterion::{criterion_group, criterion_main, Criterion};
use ricochet_core::EntityId;
use ricochet_engine::RouteEnumerator;
use std::hint::black_box;

/// Benchmark: walk every degree-4 route over a pool of 8 (2744 routes).
fn bench_routes_pool8_degree4(c: &mut Criterion) {
    let e = RouteEnumerator::new((0..8).map(EntityId).collect());

    c.bench_function("routes_pool8_degree4", |b| {
        b.iter(|| {
            for route in e.routes(4) {
                black_box(&route);
            }
        });
    });
}

/// Benchmark: walk every degree-6 route over a pool of 6 (18750 routes).
///
/// Degree 6 spills the inline route storage onto the heap.
fn bench_routes_pool6_degree6(c: &mut Criterion) {
    let e = RouteEnumerator::new((0..6).map(EntityId).collect());

    c.bench_function("routes_pool6_degree6", |b| {
        b.iter(|| {
            for route in e.routes(6) {
                black_box(&route);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_routes_pool8_degree4,
    bench_routes_pool6_degree6
);
criterion_main!(benches);
