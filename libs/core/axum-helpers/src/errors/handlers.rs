use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Fallback for unmatched routes.
pub async fn not_found(request: Request) -> Response {
    let message = format!("No route for {} {}", request.method(), request.uri().path());
    tracing::debug!(error_code = ErrorCode::NotFound.code(), "{}", message);

    let body = Json(ErrorResponse::new(ErrorCode::NotFound, message));
    (StatusCode::NOT_FOUND, body).into_response()
}
