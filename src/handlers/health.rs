use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use tracing::warn;

use super::AppState;

/// Health check endpoint
/// Returns 200 OK if the process is serving
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "climate-api",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness check endpoint
/// Returns 200 OK if a store connection can be opened, 503 otherwise
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.connector().ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({
            "status": "ready",
            "service": "climate-api",
        }))),
        Err(err) => {
            warn!(error = %err, "Readiness check failed to reach the store");
            (StatusCode::SERVICE_UNAVAILABLE, Json(json!({
                "status": "unavailable",
                "service": "climate-api",
                "error": err.to_string(),
            })))
        }
    }
}
