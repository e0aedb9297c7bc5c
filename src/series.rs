//! Observation types shared by the CLI and HTTP boundaries.

use serde::{Deserialize, Serialize};

/// One dated observation.
///
/// The date is carried as an opaque label; ordering is the order of arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Observation date label (e.g. `"2024-03-01"`).
    pub date: String,
    /// Observed value.
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// Extracts the ordered values from a dated series.
pub fn values(points: &[SeriesPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}
