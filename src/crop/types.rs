//! Feature record and model contract for crop-yield prediction.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Agronomic features describing one field and season.
///
/// Serialized field names match the trained pipeline's column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropFeatures {
    #[serde(rename = "Crop_Type")]
    pub crop_type: String,
    #[serde(rename = "Soil_Type")]
    pub soil_type: String,
    #[serde(rename = "Soil_pH")]
    pub soil_ph: f64,
    /// Mean temperature (°C).
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    /// Relative humidity (%).
    #[serde(rename = "Humidity")]
    pub humidity: f64,
    #[serde(rename = "Wind_Speed")]
    pub wind_speed: f64,
    /// Nitrogen content.
    #[serde(rename = "N")]
    pub n: f64,
    /// Phosphorus content.
    #[serde(rename = "P")]
    pub p: f64,
    /// Potassium content.
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "Soil_Quality")]
    pub soil_quality: f64,
}

impl CropFeatures {
    /// Numeric features paired with their column names, in column order.
    pub fn numeric(&self) -> [(&'static str, f64); 8] {
        [
            ("Soil_pH", self.soil_ph),
            ("Temperature", self.temperature),
            ("Humidity", self.humidity),
            ("Wind_Speed", self.wind_speed),
            ("N", self.n),
            ("P", self.p),
            ("K", self.k),
            ("Soil_Quality", self.soil_quality),
        ]
    }
}

/// Failure while loading or evaluating a yield model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read model artifact \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model produced a non-finite prediction ({0})")]
    InvalidPrediction(f64),
}

/// A trained crop-yield regressor.
///
/// Implementations are loaded once and shared read-only across requests.
pub trait YieldModel: Send + Sync {
    /// Predicts yield for one feature record.
    fn predict(&self, features: &CropFeatures) -> Result<f64, ModelError>;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}
