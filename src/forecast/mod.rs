//! Forecasting core: last-value and autoregressive strategies plus the
//! length-based selector the serving layer calls.
//!
//! All forecasts are pure functions of their inputs. No state is shared
//! between calls, so a single selector can serve concurrent requests.

pub mod autoregressive;
pub mod error;
pub mod last_value;
pub mod ols;
pub mod selector;

pub use autoregressive::{AutoregressiveForecast, DEFAULT_LAGS};
pub use error::ForecastError;
pub use last_value::LastValueForecast;
pub use selector::{DEFAULT_AR_THRESHOLD, ForecastSelector, Strategy};
