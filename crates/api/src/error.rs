//! Error types for the REST API.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::{DatabaseError, ValidationError};
use plan_core::PlanError;
use thiserror::Error;

/// Errors that can occur while handling an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Request body failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Goals or plan could not be used for generation.
    #[error("{0}")]
    Plan(#[from] PlanError),

    /// A required record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Request body is not well-formed JSON of the expected shape.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Database(err @ DatabaseError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Validation(err) => {
                tracing::warn!("Rejected input: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Plan(err) => {
                tracing::warn!("Rejected plan input: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::BadRequest(msg) => {
                tracing::warn!("Malformed request body: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
