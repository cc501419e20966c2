use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum WishlistError {
    #[error("Wishlist not found for user: {0}")]
    UserWishlistNotFound(String),

    #[error("Wishlist not found: {0}")]
    NotFound(String),

    #[error("Wishlist already exists for user: {0}")]
    AlreadyExists(String),

    /// Body could not be decoded
    #[error("Invalid wishlist request: {0}")]
    Validation(String),

    #[error("Invalid wishlist request: {0}")]
    InvalidFields(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

pub type WishlistResult<T> = Result<T, WishlistError>;

impl From<WishlistError> for AppError {
    fn from(err: WishlistError) -> Self {
        match err {
            WishlistError::UserWishlistNotFound(_) | WishlistError::NotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            WishlistError::AlreadyExists(_) => {
                AppError::InternalServerError(format!("Failed to create wishlist: {}", err))
            }
            WishlistError::Validation(msg) => {
                AppError::InternalServerError(format!("Failed to update wishlist: {}", msg))
            }
            WishlistError::InvalidFields(errors) => AppError::InternalWithDetails {
                message: format!("Failed to update wishlist: {}", errors),
                details: serde_json::to_value(&errors).unwrap_or_default(),
            },
            WishlistError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for WishlistError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for WishlistError {
    fn from(err: mongodb::error::Error) -> Self {
        WishlistError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for WishlistError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        WishlistError::Database(err.to_string())
    }
}
