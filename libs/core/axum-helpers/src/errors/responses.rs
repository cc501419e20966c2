//! OpenAPI response components shared by the domain routers.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "Failed to create product: price is required"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Document store error",
    content_type = "application/json",
    example = json!({
        "code": 2003,
        "error": "DATABASE_ERROR",
        "message": "Database error occurred"
    })
)]
pub struct DatabaseErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Resource not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
