//! API request, response, and error types.
//!
//! Field names follow the wire contract of the original service so existing
//! clients keep working.

use serde::{Deserialize, Serialize};

use super::RequestLimits;
use crate::crop::CropFeatures;
use crate::series::SeriesPoint;

/// Body of `POST /forecast/ts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Observations in chronological order.
    pub series: Vec<SeriesPoint>,
    /// Number of future steps; the configured default applies when absent.
    #[serde(default)]
    pub horizon: Option<i64>,
}

impl ForecastRequest {
    /// Checks the request against `limits` and returns the horizon to use.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending field.
    pub fn validate(&self, limits: &RequestLimits) -> Result<usize, String> {
        if self.series.len() > limits.max_series_len {
            return Err(format!(
                "`series` has {} points, at most {} allowed",
                self.series.len(),
                limits.max_series_len
            ));
        }

        let Some(requested) = self.horizon else {
            return Ok(limits.default_horizon);
        };
        match usize::try_from(requested) {
            Ok(h) if (1..=limits.max_horizon).contains(&h) => Ok(h),
            _ => Err(format!(
                "`horizon` must be in [1, {}], got {requested}",
                limits.max_horizon
            )),
        }
    }
}

/// Body returned by `POST /forecast/ts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// One value per future step, in order.
    pub forecast: Vec<f64>,
    /// Echo of the horizon used.
    pub horizon: usize,
}

/// Body returned by `POST /predict/crop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropYieldResponse {
    pub predicted_yield: f64,
}

/// Checks crop features before they reach the model.
///
/// # Errors
///
/// Returns a message naming the first offending field.
pub fn validate_crop(features: &CropFeatures) -> Result<(), String> {
    if features.crop_type.trim().is_empty() {
        return Err("`Crop_Type` must not be empty".to_string());
    }
    if features.soil_type.trim().is_empty() {
        return Err("`Soil_Type` must not be empty".to_string());
    }
    if let Some((name, _)) = features.numeric().iter().find(|(_, v)| !v.is_finite()) {
        return Err(format!("`{name}` must be a finite number"));
    }
    Ok(())
}

/// Greeting returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Liveness body returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether a crop-yield model artifact is loaded.
    pub crop_model_loaded: bool,
}

/// Error response body for non-2xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
