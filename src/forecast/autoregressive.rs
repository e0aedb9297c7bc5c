//! Windowed linear autoregression fit on demand.

use std::collections::VecDeque;

use super::error::{ForecastError, Result};
use super::last_value::LastValueForecast;
use super::ols::LinearFit;

/// Default number of trailing observations used as regressors.
pub const DEFAULT_LAGS: usize = 3;

/// Autoregressive forecaster with a fixed-size trailing window.
///
/// Fits an ordinary least-squares model mapping each window of `lags`
/// consecutive observations to the value that follows it, then rolls the
/// window forward over its own predictions to produce a multi-step forecast.
/// Later steps build on earlier forecasts, so error compounds with horizon.
///
/// # Examples
///
/// ```
/// use cropcast::forecast::AutoregressiveForecast;
///
/// let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let forecast = AutoregressiveForecast::default().forecast(&series, 3).unwrap();
/// assert!((forecast[0] - 9.0).abs() < 1e-9);
/// assert!((forecast[2] - 11.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoregressiveForecast {
    lags: usize,
}

impl Default for AutoregressiveForecast {
    fn default() -> Self {
        Self { lags: DEFAULT_LAGS }
    }
}

impl AutoregressiveForecast {
    /// Creates a forecaster with the given window size.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::ZeroLags` if `lags` is zero.
    pub fn new(lags: usize) -> Result<Self> {
        if lags == 0 {
            return Err(ForecastError::ZeroLags);
        }
        Ok(Self { lags })
    }

    /// Window size used for fitting and rollout.
    pub fn lags(&self) -> usize {
        self.lags
    }

    /// Produce an autoregressive forecast for the given horizon.
    ///
    /// Series with `lags` or fewer observations fall back to
    /// [`LastValueForecast`].
    ///
    /// # Arguments
    ///
    /// * `series` - Historical observations in chronological order
    /// * `horizon` - Number of steps to forecast
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::Computation` if the regression cannot be fit
    /// or the rollout produces a non-finite value.
    pub fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        if series.len() <= self.lags {
            return Ok(LastValueForecast.forecast(series, horizon));
        }

        let examples = series.len() - self.lags;
        let windows: Vec<&[f64]> = series.windows(self.lags).take(examples).collect();
        let model = LinearFit::fit(&windows, &series[self.lags..])?;

        let mut window: VecDeque<f64> = series[examples..].iter().copied().collect();
        let mut forecast = Vec::with_capacity(horizon);
        for step in 0..horizon {
            let next = model.predict(window.make_contiguous());
            if !next.is_finite() {
                return Err(ForecastError::Computation(format!(
                    "rollout diverged at step {step}"
                )));
            }
            forecast.push(next);
            window.pop_front();
            window.push_back(next);
        }

        Ok(forecast)
    }
}
