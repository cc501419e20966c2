use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Body could not be decoded into a product
    #[error("Invalid product: {0}")]
    Validation(String),

    #[error("Invalid product: {0}")]
    InvalidFields(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Rejected input is reported as a 500 with the failing fields attached.
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) | ProductError::CategoryNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            ProductError::Validation(msg) => {
                AppError::InternalServerError(format!("Failed to create product: {}", msg))
            }
            ProductError::InvalidFields(errors) => AppError::InternalWithDetails {
                message: format!("Failed to create product: {}", errors),
                details: serde_json::to_value(&errors).unwrap_or_default(),
            },
            ProductError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}
