use mongodb::{Client, Database, options::ClientOptions};
use std::time::Duration;
use tracing::{info, warn};

use super::{DEFAULT_DATABASE, MongoConfig};
use crate::common::{RetryConfig, retry_with_backoff};

/// Error type for MongoDB connection setup
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Driver error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

/// Connect with default client options.
pub async fn connect(url: &str) -> Result<Client, MongoError> {
    connect_from_config(&MongoConfig::new(url)).await
}

/// Build a client from `config` and verify it can reach the deployment.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!(url = %config.redacted_url(), "Connecting to MongoDB");

    let mut options = ClientOptions::parse(&config.url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    if let Some(app_name) = &config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .list_database_names()
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] wrapped in exponential backoff.
///
/// `None` uses [`RetryConfig::startup`].
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    let policy = retry_config.unwrap_or_else(RetryConfig::startup);
    retry_with_backoff(|| connect_from_config(config), policy)
        .await
        .inspect_err(|e| warn!(error = %e, "Could not connect to MongoDB"))
}

/// Pick the database named by `config`, then the connection string, then [`DEFAULT_DATABASE`].
pub fn resolve_database(client: &Client, config: &MongoConfig) -> Database {
    match &config.database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    }
}

/// True when a write failed because a unique index already holds the key.
pub fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        ErrorKind::InsertMany(insert_error) => insert_error
            .write_errors
            .as_ref()
            .is_some_and(|errors| errors.iter().any(|e| e.code == DUPLICATE_KEY)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_database_prefers_explicit_name() {
        // Client construction is lazy; no server is contacted here.
        let config = MongoConfig::new("mongodb://localhost:27017/from_url").with_database("explicit");
        let client = Client::with_uri_str(&config.url).await.unwrap();
        assert_eq!(resolve_database(&client, &config).name(), "explicit");
    }

    #[tokio::test]
    async fn test_resolve_database_falls_back_to_url_then_default() {
        let config = MongoConfig::new("mongodb://localhost:27017/from_url");
        let client = Client::with_uri_str(&config.url).await.unwrap();
        assert_eq!(resolve_database(&client, &config).name(), "from_url");

        let config = MongoConfig::new("mongodb://localhost:27017");
        let client = Client::with_uri_str(&config.url).await.unwrap();
        assert_eq!(resolve_database(&client, &config).name(), DEFAULT_DATABASE);
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let result = connect("not-a-mongodb-url").await;
        assert!(matches!(result, Err(MongoError::Mongo(_))));
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn test_connect_from_config() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = connect_from_config(&MongoConfig::new(url)).await;
        assert!(client.is_ok());
    }
}
