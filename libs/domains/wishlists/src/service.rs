//! Wishlist Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{WishlistError, WishlistResult};
use crate::models::{AddToWishlist, CreateWishlist, Wishlist};
use crate::repository::WishlistRepository;

pub struct WishlistService<R: WishlistRepository> {
    repository: Arc<R>,
}

impl<R: WishlistRepository> Clone for WishlistService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: WishlistRepository> WishlistService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Product ids on the user's wishlist; empty when the user has none
    #[instrument(skip(self))]
    pub async fn products_for_user(&self, user: &str) -> WishlistResult<Vec<String>> {
        Ok(self
            .repository
            .find_by_user(user)
            .await?
            .map(|wishlist| wishlist.products)
            .unwrap_or_default())
    }

    /// Add a product, creating the wishlist on first use. Repeated adds are no-ops.
    ///
    /// The product id is not checked against the catalog.
    #[instrument(skip(self, input), fields(product_id = %input.product_id))]
    pub async fn add_product(&self, user: &str, input: AddToWishlist) -> WishlistResult<Wishlist> {
        input.validate()?;
        self.repository.add_product(user, &input.product_id).await
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&self, user: &str, product_id: &str) -> WishlistResult<Wishlist> {
        self.repository
            .remove_product(user, product_id)
            .await?
            .ok_or_else(|| WishlistError::UserWishlistNotFound(user.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_wishlists(&self) -> WishlistResult<Vec<Wishlist>> {
        self.repository.list().await
    }

    #[instrument(skip(self, input), fields(user = %input.user))]
    pub async fn create_wishlist(&self, input: CreateWishlist) -> WishlistResult<Wishlist> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Delete a whole wishlist by its own id; malformed ids are not found
    #[instrument(skip(self))]
    pub async fn delete_wishlist(&self, id: &str) -> WishlistResult<()> {
        let uuid = Uuid::parse_str(id).map_err(|_| WishlistError::NotFound(id.to_string()))?;

        if !self.repository.delete_by_id(uuid).await? {
            return Err(WishlistError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
