//! cropcast entry point: CLI wiring and config-driven service construction.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;

use cropcast::cli::{Cli, Command, ForecastArgs};
use cropcast::config::ServiceConfig;
use cropcast::io::export::export_csv;
use cropcast::io::series::read_series_csv;
use cropcast::logging;
use cropcast::runner::run_forecast;

/// Loads the configuration file if given, otherwise the defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<ServiceConfig> {
    match path {
        Some(path) => Ok(ServiceConfig::from_toml_file(path)?),
        None => Ok(ServiceConfig::default()),
    }
}

/// Fails with every validation error, one per line.
fn ensure_valid(config: &ServiceConfig) -> anyhow::Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid configuration:\n{}", lines.join("\n"));
    }
    Ok(())
}

#[cfg(feature = "api")]
fn serve(args: cropcast::cli::ServeArgs) -> anyhow::Result<()> {
    use std::net::ToSocketAddrs;
    use std::sync::Arc;

    use cropcast::api::{self, AppState};
    use cropcast::crop::{LinearYieldModel, YieldModel};

    let mut config = load_config(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = args.crop_model {
        config.model.crop_model_path = Some(path);
    }
    ensure_valid(&config)?;
    logging::init(&config.logging);

    let crop_model: Option<Arc<dyn YieldModel>> = match &config.model.crop_model_path {
        Some(path) => {
            let model = LinearYieldModel::from_json_file(path)?;
            tracing::info!(path = %path.display(), "crop yield model loaded");
            Some(Arc::new(model) as Arc<dyn YieldModel>)
        }
        None => {
            tracing::warn!("no crop yield model configured; /predict/crop will answer 503");
            None
        }
    };

    let server = &config.server;
    let addr = (server.host.as_str(), server.port)
        .to_socket_addrs()
        .with_context(|| format!("cannot resolve {}:{}", server.host, server.port))?
        .next()
        .with_context(|| format!("no address for {}:{}", server.host, server.port))?;

    let state = Arc::new(AppState::from_config(&config, crop_model)?);
    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(api::serve(state, addr))
        .with_context(|| format!("API server on {addr} failed"))
}

fn forecast(args: ForecastArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(lags) = args.lags {
        config.forecast.lags = lags;
    }
    ensure_valid(&config)?;
    logging::init(&config.logging);

    let horizon = args.horizon.unwrap_or(config.forecast.default_horizon);
    let max_horizon = config.forecast.max_horizon;
    if !(1..=max_horizon).contains(&horizon) {
        bail!("--horizon must be in [1, {max_horizon}] (forecast.max_horizon), got {horizon}");
    }

    let selector = config.forecast.selector()?;
    let points = read_series_csv(&args.input)?;
    let report = run_forecast(&points, horizon, &selector)?;

    if let Some(ref path) = args.output {
        export_csv(&report.forecast, path)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        tracing::info!(path = %path.display(), "forecast written");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        #[cfg(feature = "api")]
        Command::Serve(args) => serve(args),
        Command::Forecast(args) => forecast(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
