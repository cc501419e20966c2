//! Wishlists Domain
//!
//! One wishlist per user holding unique product ids, stored in MongoDB.
//! Wishlists are created on the first add and only disappear through the
//! legacy delete route.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_wishlists::{handlers, MongoWishlistRepository, WishlistService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoWishlistRepository::new(&client.database("shop"));
//! repository.init_indexes().await?;
//!
//! let router = handlers::router(WishlistService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{WishlistError, WishlistResult};
pub use handlers::{ApiDoc, LegacyApiDoc};
pub use models::{AddToWishlist, CreateWishlist, Wishlist};
pub use crate::mongodb::MongoWishlistRepository;
pub use repository::{InMemoryWishlistRepository, WishlistRepository};
pub use service::WishlistService;
