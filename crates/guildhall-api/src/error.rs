//! Guildhall — API error types.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use guildhall_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Startup errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub detail: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DomainError::GuildNotFound(_) => (StatusCode::NOT_FOUND, "guild_not_found"),
            DomainError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            DomainError::Infrastructure(message) => {
                error!(%message, "request failed with infrastructure error");
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
        };

        let body = ErrorBody {
            error: error_code,
            detail: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
