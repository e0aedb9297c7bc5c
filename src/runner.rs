//! Offline forecasting pipeline behind the `forecast` subcommand.

use serde::Serialize;

use crate::forecast::{ForecastError, ForecastSelector, Strategy};
use crate::series::{self, SeriesPoint};

/// Result of forecasting one series, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    /// One value per future step, in order.
    pub forecast: Vec<f64>,
    /// Number of steps forecast.
    pub horizon: usize,
    /// Strategy the selector chose.
    pub strategy: Strategy,
    /// Number of observations the forecast was built from.
    pub observations: usize,
}

/// Forecasts `horizon` steps past the end of `points`.
///
/// # Errors
///
/// Propagates any `ForecastError` from the selector.
pub fn run_forecast(
    points: &[SeriesPoint],
    horizon: usize,
    selector: &ForecastSelector,
) -> Result<ForecastReport, ForecastError> {
    let values = series::values(points);
    let strategy = selector.select(values.len());
    let forecast = selector.select_and_forecast(&values, horizon)?;

    tracing::info!(%strategy, observations = values.len(), horizon, "forecast complete");
    Ok(ForecastReport {
        forecast,
        horizon,
        strategy,
        observations: values.len(),
    })
}
