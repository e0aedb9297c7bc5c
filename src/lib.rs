//! Crop-yield prediction and time-series forecasting service.

#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
/// Crop-yield model contract and bundled linear regressor.
pub mod crop;
pub mod forecast;
pub mod io;
pub mod logging;
pub mod runner;
pub mod series;
