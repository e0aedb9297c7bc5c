//! Error type for the forecasting core.

use thiserror::Error;

/// Failure raised by a forecasting strategy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    /// The regression fit or rollout could not produce finite values.
    #[error("forecast computation failed: {0}")]
    Computation(String),

    /// The caller asked for zero future steps.
    #[error("horizon must be >= 1, got {0}")]
    InvalidHorizon(usize),

    /// An autoregressive window of zero observations was requested.
    #[error("autoregressive window must hold at least one observation")]
    ZeroLags,
}

pub type Result<T> = std::result::Result<T, ForecastError>;
