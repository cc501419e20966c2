pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product not found: 0190c0de-...",
///   "details": null
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable message including what the request was doing
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Error type every handler converts into before responding.
///
/// Domain crates implement `From<TheirError> for AppError` and delegate
/// `IntoResponse` here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    /// Store failure; the detail is logged, not returned
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    /// Internal error with structured details attached to the body
    #[error("Internal Server Error: {message}")]
    InternalWithDetails {
        message: String,
        details: serde_json::Value,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::InternalServerError(_)
            | AppError::InternalWithDetails { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::InternalServerError(_) | AppError::InternalWithDetails { .. } => {
                ErrorCode::InternalError
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let body = match self {
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                ErrorResponse::new(code, msg)
            }
            AppError::Database(detail) => {
                tracing::error!(error_code = code.code(), "Database error: {}", detail);
                ErrorResponse::new(code, code.default_message())
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                ErrorResponse::new(code, msg)
            }
            AppError::InternalWithDetails { message, details } => {
                tracing::error!(
                    error_code = code.code(),
                    details = %details,
                    "Internal server error: {}",
                    message
                );
                ErrorResponse::new(code, message).with_details(details)
            }
        };

        (status, Json(body)).into_response()
    }
}
