use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{WishlistError, WishlistResult};
use crate::models::{CreateWishlist, Wishlist};

/// Repository trait for Wishlist persistence
///
/// Implementations keep at most one wishlist per user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn find_by_user(&self, user: &str) -> WishlistResult<Option<Wishlist>>;

    /// Add `product_id` to the user's wishlist, creating the wishlist if the
    /// user has none. Adding a product already present changes nothing.
    async fn add_product(&self, user: &str, product_id: &str) -> WishlistResult<Wishlist>;

    /// Remove `product_id` from the user's wishlist.
    ///
    /// `None` when the user has no wishlist.
    async fn remove_product(&self, user: &str, product_id: &str)
        -> WishlistResult<Option<Wishlist>>;

    async fn list(&self) -> WishlistResult<Vec<Wishlist>>;

    /// Insert a wishlist document as given.
    ///
    /// Fails with `AlreadyExists` when the user already has one.
    async fn create(&self, input: CreateWishlist) -> WishlistResult<Wishlist>;

    /// Returns whether a document was deleted
    async fn delete_by_id(&self, id: Uuid) -> WishlistResult<bool>;
}

/// In-memory implementation for development and tests
#[derive(Clone, Default)]
pub struct InMemoryWishlistRepository {
    wishlists: Arc<RwLock<Vec<Wishlist>>>,
}

impl InMemoryWishlistRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WishlistRepository for InMemoryWishlistRepository {
    async fn find_by_user(&self, user: &str) -> WishlistResult<Option<Wishlist>> {
        let wishlists = self.wishlists.read().await;
        Ok(wishlists.iter().find(|w| w.user == user).cloned())
    }

    async fn add_product(&self, user: &str, product_id: &str) -> WishlistResult<Wishlist> {
        // One write lock covers find-or-create and the update
        let mut wishlists = self.wishlists.write().await;

        if let Some(wishlist) = wishlists.iter_mut().find(|w| w.user == user) {
            wishlist.add_product(product_id);
            return Ok(wishlist.clone());
        }

        let wishlist = Wishlist::new(user, vec![product_id.to_string()]);
        wishlists.push(wishlist.clone());

        tracing::info!(wishlist_id = %wishlist.id, user, "Created wishlist");
        Ok(wishlist)
    }

    async fn remove_product(
        &self,
        user: &str,
        product_id: &str,
    ) -> WishlistResult<Option<Wishlist>> {
        let mut wishlists = self.wishlists.write().await;

        Ok(wishlists
            .iter_mut()
            .find(|w| w.user == user)
            .map(|wishlist| {
                wishlist.remove_product(product_id);
                wishlist.clone()
            }))
    }

    async fn list(&self) -> WishlistResult<Vec<Wishlist>> {
        Ok(self.wishlists.read().await.clone())
    }

    async fn create(&self, input: CreateWishlist) -> WishlistResult<Wishlist> {
        let mut wishlists = self.wishlists.write().await;
        if wishlists.iter().any(|w| w.user == input.user) {
            return Err(WishlistError::AlreadyExists(input.user));
        }

        let wishlist = Wishlist::new(input.user, input.products);
        wishlists.push(wishlist.clone());
        Ok(wishlist)
    }

    async fn delete_by_id(&self, id: Uuid) -> WishlistResult<bool> {
        let mut wishlists = self.wishlists.write().await;
        let before = wishlists.len();
        wishlists.retain(|w| w.id != id);
        Ok(wishlists.len() != before)
    }
}
