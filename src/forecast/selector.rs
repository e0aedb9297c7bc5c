//! Strategy selection by series length.

use std::fmt;

use serde::Serialize;

use super::autoregressive::AutoregressiveForecast;
use super::error::{ForecastError, Result};
use super::last_value::LastValueForecast;

/// Series longer than this use the autoregressive strategy.
///
/// Independent of the autoregressive window size.
pub const DEFAULT_AR_THRESHOLD: usize = 5;

/// Forecasting strategy chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    LastValue,
    Autoregressive,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::LastValue => write!(f, "last_value"),
            Strategy::Autoregressive => write!(f, "autoregressive"),
        }
    }
}

/// Single entry point the serving layer calls to forecast a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastSelector {
    ar_threshold: usize,
    autoregressive: AutoregressiveForecast,
}

impl Default for ForecastSelector {
    fn default() -> Self {
        Self::new(DEFAULT_AR_THRESHOLD, AutoregressiveForecast::default())
    }
}

impl ForecastSelector {
    /// Creates a selector.
    ///
    /// # Arguments
    ///
    /// * `ar_threshold` - Series strictly longer than this use autoregression
    /// * `autoregressive` - Autoregressive forecaster to use for long series
    pub fn new(ar_threshold: usize, autoregressive: AutoregressiveForecast) -> Self {
        Self {
            ar_threshold,
            autoregressive,
        }
    }

    pub fn ar_threshold(&self) -> usize {
        self.ar_threshold
    }

    pub fn autoregressive(&self) -> &AutoregressiveForecast {
        &self.autoregressive
    }

    /// Strategy used for a series of `len` observations.
    pub fn select(&self, len: usize) -> Strategy {
        if len > self.ar_threshold {
            Strategy::Autoregressive
        } else {
            Strategy::LastValue
        }
    }

    /// Forecast `horizon` steps using the strategy chosen for `series`.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::InvalidHorizon` if `horizon` is zero and
    /// `ForecastError::Computation` if the autoregressive fit fails.
    pub fn select_and_forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon(horizon));
        }

        let strategy = self.select(series.len());
        tracing::debug!(
            %strategy,
            series_len = series.len(),
            horizon,
            "selected forecast strategy"
        );

        match strategy {
            Strategy::LastValue => Ok(LastValueForecast.forecast(series, horizon)),
            Strategy::Autoregressive => self.autoregressive.forecast(series, horizon),
        }
    }
}
