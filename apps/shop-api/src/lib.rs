//! Shop API
//!
//! REST service for the product catalog, its categories and per-user wishlists.
//!
//! ## Architecture
//!
//! ```text
//! axum router (/api, docs, health)
//!   ↓
//! domain handlers (domain_products, domain_wishlists)
//!   ↓
//! services → Mongo repositories
//!   ↓
//! MongoDB (products, wishlists)
//! ```
//!
//! ## Modules
//!
//! - `api`: route assembly and index setup
//! - `config`: environment configuration, including the wishlist route set
//! - `openapi`: combined API documentation
//! - `state`: shared application state

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::create_router;

pub use config::{Config, WishlistRoutes};
pub use state::AppState;

/// Mount `api` under `/api` and `root` at the top level, with the
/// documentation matching the wishlist route set
pub fn with_docs(api: Router, root: Router, wishlist_routes: WishlistRoutes) -> Router {
    match wishlist_routes {
        WishlistRoutes::User => create_router::<openapi::ApiDoc>(api, root),
        WishlistRoutes::Legacy => create_router::<openapi::LegacyApiDoc>(api, root),
    }
}
