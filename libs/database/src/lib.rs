//! Database connectors and utilities for the shop services
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client, configuration and health probes
//! - `config` - `core_config::FromEnv` support for configuration structs
//! - `all` - everything above
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017/shop");
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = mongodb::resolve_database(&client, &config);
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
