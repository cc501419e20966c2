//! Wishlist routes

use axum::Router;
use domain_wishlists::{handlers, MongoWishlistRepository, WishlistRepository, WishlistService};

use crate::config::WishlistRoutes;
use crate::state::AppState;

pub fn service(state: &AppState) -> WishlistService<MongoWishlistRepository> {
    WishlistService::new(MongoWishlistRepository::new(&state.db))
}

/// The configured wishlist route set
pub fn router<R: WishlistRepository + 'static>(
    service: WishlistService<R>,
    routes: WishlistRoutes,
) -> Router {
    match routes {
        WishlistRoutes::User => handlers::router(service),
        WishlistRoutes::Legacy => handlers::legacy_router(service),
    }
}

/// Initialize wishlist indexes, including the unique index on `user`
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    let repository = MongoWishlistRepository::new(&state.db);
    repository.init_indexes().await?;
    Ok(())
}
