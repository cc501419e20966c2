//! Products Domain
//!
//! Product catalog and the category views derived from it, stored in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /products and /categories endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, search normalization, NotFound rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, response envelopes
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, MongoProductRepository, ProductService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("shop");
//!
//! let service = ProductService::new(MongoProductRepository::new(&db));
//!
//! let products = handlers::router(service.clone());
//! let categories = handlers::categories_router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::{ApiDoc, CategoriesApiDoc};
pub use models::{
    CategoryProducts, CreateProduct, DeliveryInfo, Product, ProductFilter, ProductQuery,
};
pub use crate::mongodb::MongoProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
