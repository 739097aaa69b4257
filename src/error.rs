// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::services::gemini::CompletionError;

/// Per-request failures. Converted to an HTTP status plus a
/// `{"response": ...}` body at the router boundary; nothing escapes past it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Completion(err) => {
                tracing::error!(error = %err, "completion request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("⚠️ Server error: {err}"),
                )
            }
        };

        (status, Json(json!({ "response": message }))).into_response()
    }
}
