use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Wishlist entity - stored in the `wishlists` collection, one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Owning user, opaque
    pub user: String,
    /// Product ids, no repeats, in the order they were added
    #[serde(default)]
    pub products: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wishlist {
    pub fn new(user: impl Into<String>, products: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user: user.into(),
            products: dedup_preserving_order(products),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add `product_id` unless already present. Returns whether it was added.
    pub fn add_product(&mut self, product_id: &str) -> bool {
        if self.contains(product_id) {
            return false;
        }
        self.products.push(product_id.to_string());
        self.updated_at = Utc::now();
        true
    }

    /// Remove `product_id` if present. Returns whether it was removed.
    pub fn remove_product(&mut self, product_id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p != product_id);
        self.updated_at = Utc::now();
        self.products.len() != before
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.products.iter().any(|p| p == product_id)
    }
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Body of `POST /wishlist/{user_id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddToWishlist {
    #[validate(custom(function = "not_blank"))]
    pub product_id: String,
}

/// Body of the legacy `POST /wishlist`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateWishlist {
    #[validate(custom(function = "not_blank"))]
    pub user: String,
    #[serde(default)]
    pub products: Vec<String>,
}

// Response envelopes

/// Product ids of one user's wishlist
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WishlistProductsResponse {
    pub data: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WishlistResponse {
    pub message: String,
    pub data: Wishlist,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WishlistList {
    pub wishlists: Vec<Wishlist>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WishlistListResponse {
    pub data: WishlistList,
}
