//! REST API for crop-yield prediction and time-series forecasting.
//!
//! Routes:
//! - `GET /`: greeting
//! - `GET /health`: liveness and model status
//! - `POST /forecast/ts`: forecast a dated series
//! - `POST /predict/crop`: predict crop yield from agronomic features

pub mod handlers;
pub mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::config::{ForecastConfig, ServiceConfig};
use crate::crop::YieldModel;
use crate::forecast::{ForecastError, ForecastSelector};

/// Boundary limits applied to forecast requests before they reach the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    /// Horizon used when a request omits one.
    pub default_horizon: usize,
    /// Largest accepted horizon.
    pub max_horizon: usize,
    /// Longest accepted series.
    pub max_series_len: usize,
}

impl From<&ForecastConfig> for RequestLimits {
    fn from(cfg: &ForecastConfig) -> Self {
        Self {
            default_horizon: cfg.default_horizon,
            max_horizon: cfg.max_horizon,
            max_series_len: cfg.max_series_len,
        }
    }
}

/// Immutable application state shared across all request handlers.
///
/// Built once at startup and wrapped in `Arc`; no locks are needed since
/// nothing is mutated after construction.
pub struct AppState {
    /// Forecast strategy selector.
    pub selector: ForecastSelector,
    /// Request validation limits.
    pub limits: RequestLimits,
    /// Crop-yield regressor, if an artifact was loaded.
    pub crop_model: Option<Arc<dyn YieldModel>>,
}

impl AppState {
    /// Builds state from a validated configuration and an optional model.
    ///
    /// # Errors
    ///
    /// Returns a `ForecastError` if the forecast section cannot build a
    /// selector.
    pub fn from_config(
        config: &ServiceConfig,
        crop_model: Option<Arc<dyn YieldModel>>,
    ) -> Result<Self, ForecastError> {
        Ok(Self {
            selector: config.forecast.selector()?,
            limits: RequestLimits::from(&config.forecast),
            crop_model,
        })
    }
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/forecast/ts", post(handlers::forecast_ts))
        .route("/predict/crop", post(handlers::predict_crop))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind to `addr` or the
/// server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "cropcast v{} listening on http://{addr}",
        env!("CARGO_PKG_VERSION")
    );
    axum::serve(listener, app).await
}
