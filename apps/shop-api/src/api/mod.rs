//! API routes module

pub mod health;
pub mod products;
pub mod wishlists;

use axum::Router;
use domain_products::{handlers as product_handlers, ProductRepository, ProductService};
use domain_wishlists::{WishlistRepository, WishlistService};

use crate::config::WishlistRoutes;
use crate::state::AppState;

/// Create all `/api` routes backed by MongoDB
pub fn routes(state: &AppState) -> Router {
    build_routes(
        products::service(state),
        wishlists::service(state),
        state.config.wishlist_routes,
    )
}

/// Assemble the `/api` routes over any repositories
pub fn build_routes<P, W>(
    product_service: ProductService<P>,
    wishlist_service: WishlistService<W>,
    wishlist_routes: WishlistRoutes,
) -> Router
where
    P: ProductRepository + 'static,
    W: WishlistRepository + 'static,
{
    Router::new()
        .nest("/products", product_handlers::router(product_service.clone()))
        .nest("/categories", product_handlers::categories_router(product_service))
        .nest("/wishlist", wishlists::router(wishlist_service, wishlist_routes))
}

/// Initialize database indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    products::init_indexes(state).await?;
    wishlists::init_indexes(state).await
}
