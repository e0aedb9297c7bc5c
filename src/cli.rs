//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cropcast", version)]
#[command(about = "Crop-yield prediction and time-series forecasting service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP API server.
    #[cfg(feature = "api")]
    Serve(ServeArgs),
    /// Forecast a `date,value` CSV series and print the result as JSON.
    Forecast(ForecastArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override `server.host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Override `server.port`.
    #[arg(long)]
    pub port: Option<u16>,

    /// Override `model.crop_model_path`.
    #[arg(long)]
    pub crop_model: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ForecastArgs {
    /// CSV file with a `date,value` header.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of steps to forecast (default: `forecast.default_horizon`).
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Override `forecast.lags`.
    #[arg(long)]
    pub lags: Option<usize>,

    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the forecast as `step,forecast` CSV to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
