//! Linear yield model loaded from a JSON artifact.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::types::{CropFeatures, ModelError, YieldModel};

/// Per-column weights for the numeric features. Missing columns weigh 0.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumericWeights {
    #[serde(rename = "Soil_pH")]
    pub soil_ph: f64,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Humidity")]
    pub humidity: f64,
    #[serde(rename = "Wind_Speed")]
    pub wind_speed: f64,
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "Soil_Quality")]
    pub soil_quality: f64,
}

impl NumericWeights {
    fn as_array(&self) -> [f64; 8] {
        [
            self.soil_ph,
            self.temperature,
            self.humidity,
            self.wind_speed,
            self.n,
            self.p,
            self.k,
            self.soil_quality,
        ]
    }
}

/// One-hot linear regressor over [`CropFeatures`].
///
/// ```text
/// yield = intercept + Σ weight_i · x_i + crop_type[Crop_Type] + soil_type[Soil_Type]
/// ```
///
/// Categories absent from the artifact contribute nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearYieldModel {
    pub intercept: f64,
    #[serde(default)]
    pub weights: NumericWeights,
    #[serde(default)]
    pub crop_type: BTreeMap<String, f64>,
    #[serde(default)]
    pub soil_type: BTreeMap<String, f64>,
}

impl LinearYieldModel {
    /// Loads a model artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Io` if the file cannot be read and
    /// `ModelError::Parse` if the JSON does not describe a model.
    pub fn from_json_file(path: &Path) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parses a model artifact from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Parse` on malformed JSON or unknown keys.
    pub fn from_json_str(s: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(s)?)
    }
}

impl YieldModel for LinearYieldModel {
    fn predict(&self, features: &CropFeatures) -> Result<f64, ModelError> {
        let numeric: f64 = features
            .numeric()
            .iter()
            .zip(self.weights.as_array())
            .map(|((_, x), w)| x * w)
            .sum();
        let crop = self.crop_type.get(&features.crop_type).copied().unwrap_or(0.0);
        let soil = self.soil_type.get(&features.soil_type).copied().unwrap_or(0.0);

        let prediction = self.intercept + numeric + crop + soil;
        if prediction.is_finite() {
            Ok(prediction)
        } else {
            Err(ModelError::InvalidPrediction(prediction))
        }
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
