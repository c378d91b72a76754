use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types
///
/// Every handler failure originates in the observation store and surfaces as a
/// generic server error carrying the underlying failure's text.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failure raised by the observation store (connect, query, decode)
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Store(err) => err.to_string(),
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "type": error_type_name(&self),
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::Store(_) => "store_error",
    }
}
