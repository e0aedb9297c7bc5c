//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use super::AppState;
use super::types::{
    CropYieldResponse, ErrorResponse, ForecastRequest, ForecastResponse, HealthResponse,
    MessageResponse, validate_crop,
};
use crate::crop::CropFeatures;
use crate::series;

/// Error half of every fallible handler.
type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Unwraps a JSON body, reporting extractor rejections as `ErrorResponse`
/// with the rejection's own status.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(status = %rejection.status(), "rejected request body: {rejection}");
            Err(error(rejection.status(), rejection.body_text()))
        }
    }
}

/// `GET /` → 200 + greeting
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "cropcast API is running".to_string(),
    })
}

/// `GET /health` → 200 + `HealthResponse`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        crop_model_loaded: state.crop_model.is_some(),
    })
}

/// Forecasts the submitted series.
///
/// `POST /forecast/ts` → 200 + `ForecastResponse`
/// malformed body → 400/415/422, invalid horizon, oversized series, or failed
/// fit → 422, all with `ErrorResponse`
pub async fn forecast_ts(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let req = json_body(payload)?;
    let horizon = req
        .validate(&state.limits)
        .map_err(|msg| error(StatusCode::UNPROCESSABLE_ENTITY, msg))?;

    let values = series::values(&req.series);
    let strategy = state.selector.select(values.len());
    let forecast = state
        .selector
        .select_and_forecast(&values, horizon)
        .map_err(|e| {
            tracing::warn!(%strategy, series_len = values.len(), horizon, "forecast failed: {e}");
            error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        })?;

    tracing::info!(%strategy, series_len = values.len(), horizon, "forecast served");
    Ok(Json(ForecastResponse { forecast, horizon }))
}

/// Predicts crop yield from agronomic features.
///
/// `POST /predict/crop` → 200 + `CropYieldResponse`
/// malformed body or invalid features → 4xx, no model loaded → 503,
/// model failure → 500
pub async fn predict_crop(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CropFeatures>, JsonRejection>,
) -> Result<Json<CropYieldResponse>, ApiError> {
    let features = json_body(payload)?;
    validate_crop(&features).map_err(|msg| error(StatusCode::UNPROCESSABLE_ENTITY, msg))?;

    let Some(model) = state.crop_model.as_ref() else {
        return Err(error(
            StatusCode::SERVICE_UNAVAILABLE,
            "no crop yield model is loaded",
        ));
    };

    let predicted_yield = model.predict(&features).map_err(|e| {
        tracing::error!(model = model.name(), "crop prediction failed: {e}");
        error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    tracing::info!(
        model = model.name(),
        crop_type = %features.crop_type,
        predicted_yield,
        "crop yield predicted"
    );
    Ok(Json(CropYieldResponse { predicted_yield }))
}
