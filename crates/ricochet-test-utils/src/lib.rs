//! Test fixtures and reference values for Ricochet development.
//!
//! Provides canonical scenes ([`fixtures`]), an independently written
//! closed-form Green's function for golden values, tolerance assertions
//! for complex quantities, and a one-shot tracing subscriber for tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use num_complex::Complex64;
use ricochet_core::FieldVector;
use std::f64::consts::PI;
use tracing_subscriber::EnvFilter;

/// Wavenumber at 2.7 GHz.
pub const K0_2_7_GHZ: f64 = 2.0 * PI * 2.7e9 / 3e8;

/// `i/(4π) · e^{i k r} / r`, written out without the engine's kernel code.
pub fn reference_green(k0: f64, r: f64) -> Complex64 {
    let (s, c) = (k0 * r).sin_cos();
    Complex64::new(-s, c) / (4.0 * PI * r)
}

/// Vector form of [`reference_green`] along `d` (emitter to receiver).
pub fn reference_green_vector(k0: f64, d: [f64; 3]) -> FieldVector {
    let r = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
    let g = reference_green(k0, r);
    d.map(|c| g * (c / r))
}

/// Euclidean distance.
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let d = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
}

/// Panics unless `|a − b| ≤ tol · max(1, |b|)`.
#[track_caller]
pub fn assert_complex_close(a: Complex64, b: Complex64, tol: f64) {
    let scale = b.norm().max(1.0);
    assert!(
        (a - b).norm() <= tol * scale,
        "expected {b}, got {a} (|diff| = {})",
        (a - b).norm()
    );
}

/// Component-wise [`assert_complex_close`].
#[track_caller]
pub fn assert_field_close(a: &FieldVector, b: &FieldVector, tol: f64) {
    for (x, y) in a.iter().zip(b) {
        assert_complex_close(*x, *y, tol);
    }
}

/// Install a `fmt` subscriber honouring `RUST_LOG` (default `warn`).
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
