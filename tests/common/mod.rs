//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use cropcast::series::SeriesPoint;

/// Absolute tolerance for floating-point comparisons.
pub const TOL: f64 = 1e-9;

/// Dates a sequence of values as consecutive days in January 2024.
pub fn dated(values: &[f64]) -> Vec<SeriesPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| SeriesPoint::new(format!("2024-01-{:02}", i + 1), *v))
        .collect()
}

/// Arithmetic progression `1, 2, ..., n`.
pub fn ramp(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

/// Asserts two sequences have equal length and agree element-wise within [`TOL`].
pub fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {actual:?} vs {expected:?}"
    );
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < TOL, "got {actual:?}, expected {expected:?}");
    }
}
