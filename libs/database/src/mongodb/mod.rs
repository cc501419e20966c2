//! MongoDB connection management and probes

mod config;
mod connector;
mod health;
mod ids;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{
    MongoError, connect, connect_from_config, connect_from_config_with_retry,
    is_duplicate_key_error, resolve_database,
};
pub use health::ping;
pub use ids::uuid_bson;

pub use mongodb::{Client, Collection, Database};
