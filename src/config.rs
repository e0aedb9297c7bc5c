//! TOML-based service configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::forecast::{
    AutoregressiveForecast, DEFAULT_AR_THRESHOLD, DEFAULT_LAGS, ForecastError, ForecastSelector,
};

/// Top-level service configuration parsed from TOML.
///
/// All sections have defaults. Load from TOML with
/// [`ServiceConfig::from_toml_file`] or start from [`ServiceConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Forecasting parameters and request limits.
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Trained model artifacts.
    #[serde(default)]
    pub model: ModelConfig,
    /// Log filter and format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Forecasting parameters and request limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    /// Autoregressive window size (must be > 0).
    pub lags: usize,
    /// Series longer than this use the autoregressive strategy.
    pub ar_threshold: usize,
    /// Horizon used when a request omits one.
    pub default_horizon: usize,
    /// Largest horizon a request may ask for.
    pub max_horizon: usize,
    /// Longest series a request may submit.
    pub max_series_len: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            lags: DEFAULT_LAGS,
            ar_threshold: DEFAULT_AR_THRESHOLD,
            default_horizon: 7,
            max_horizon: 365,
            max_series_len: 10_000,
        }
    }
}

impl ForecastConfig {
    /// Builds the selector described by this section.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::ZeroLags` if `lags` is zero.
    pub fn selector(&self) -> Result<ForecastSelector, ForecastError> {
        let autoregressive = AutoregressiveForecast::new(self.lags)?;
        Ok(ForecastSelector::new(self.ar_threshold, autoregressive))
    }
}

/// Trained model artifacts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// JSON artifact for the crop-yield regressor. The crop endpoint answers
    /// 503 when unset.
    pub crop_model_path: Option<PathBuf>,
}

/// Log filter and format.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Emit JSON lines instead of compact text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "cropcast=info,tower_http=info".to_string(),
            json: false,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"forecast.lags"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ServiceConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let srv = &self.server;
        if srv.host.trim().is_empty() {
            errors.push(ConfigError {
                field: "server.host".into(),
                message: "must not be empty".into(),
            });
        }
        if srv.port == 0 {
            errors.push(ConfigError {
                field: "server.port".into(),
                message: "must be > 0".into(),
            });
        }

        let f = &self.forecast;
        if f.lags == 0 {
            errors.push(ConfigError {
                field: "forecast.lags".into(),
                message: "must be > 0".into(),
            });
        }
        if f.max_horizon == 0 {
            errors.push(ConfigError {
                field: "forecast.max_horizon".into(),
                message: "must be > 0".into(),
            });
        }
        if f.default_horizon == 0 || f.default_horizon > f.max_horizon {
            errors.push(ConfigError {
                field: "forecast.default_horizon".into(),
                message: "must be in [1, forecast.max_horizon]".into(),
            });
        }
        if f.max_series_len == 0 {
            errors.push(ConfigError {
                field: "forecast.max_series_len".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }
}
