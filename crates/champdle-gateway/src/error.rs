//! Error handling for the gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Internal server error.
    #[error("{0}")]
    Internal(String),
    /// Bad request.
    #[error("{0}")]
    BadRequest(String),
    /// Not found.
    #[error("{0}")]
    NotFound(String),
}

/// Error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error flag.
    pub error: bool,
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
        };

        let body = ErrorResponse {
            error: true,
            code: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<champdle_core::Error> for AppError {
    fn from(err: champdle_core::Error) -> Self {
        match err {
            champdle_core::Error::NotFound(_) => AppError::NotFound(err.to_string()),
            champdle_core::Error::InvalidRecord { .. } | champdle_core::Error::Csv(_) => {
                AppError::BadRequest(err.to_string())
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Rejection body for `/validate`, which answers in the game's own
/// `{valid, error}` shape rather than the generic error envelope.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidateRejection {
    pub status: StatusCode,
    pub message: String,
}

impl ValidateRejection {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ValidateRejectionBody {
    valid: bool,
    error: String,
}

impl IntoResponse for ValidateRejection {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(error = %self.message, "validation failed");
        }
        let body = ValidateRejectionBody {
            valid: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<champdle_core::Error> for ValidateRejection {
    fn from(err: champdle_core::Error) -> Self {
        if err.is_not_found() {
            ValidateRejection::bad_request("Champion not found")
        } else {
            ValidateRejection::internal(err.to_string())
        }
    }
}
