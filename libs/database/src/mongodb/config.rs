#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_first_of, env_parse_or};

/// Database used when neither the configuration nor the connection string names one
pub const DEFAULT_DATABASE: &str = "shop";

/// MongoDB connection settings
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::new("mongodb://localhost:27017").with_database("shop");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Explicit database name; `None` defers to the connection string
    pub database: Option<String>,

    /// Reported to the server in its logs
    pub app_name: Option<String>,

    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_pool_size(mut self, max_pool_size: u32, min_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self.min_pool_size = min_pool_size;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connection string with any password replaced, safe for logs.
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        match rest.rsplit_once('@') {
            Some((credentials, host)) => {
                let user = credentials.split(':').next().unwrap_or_default();
                format!("{scheme}://{user}:***@{host}")
            }
            None => self.url.clone(),
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: None,
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

/// Environment variables:
/// - `MONGODB_URL`, `MONGO_URL` or `MONGODB` (required) - connection string
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (optional) - database name
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let url = env_first_of(&["MONGODB_URL", "MONGO_URL", "MONGODB"]).ok_or_else(|| {
            ConfigError::MissingEnvVar("MONGODB_URL, MONGO_URL or MONGODB".to_string())
        })?;

        if !url.starts_with("mongodb://") && !url.starts_with("mongodb+srv://") {
            return Err(ConfigError::InvalidValue {
                key: "MONGODB_URL".to_string(),
                value: url,
            });
        }

        Ok(Self {
            url,
            database: env_first_of(&["MONGODB_DATABASE", "MONGO_DATABASE"]),
            app_name: env_first_of(&["MONGODB_APP_NAME"]),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_secs: env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_defaults() {
        let config = MongoConfig::new("mongodb://db:27017");
        assert_eq!(config.url(), "mongodb://db:27017");
        assert_eq!(config.database, None);
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.min_pool_size, 5);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.server_selection_timeout_secs, 30);
    }

    #[test]
    fn test_mongo_config_builders() {
        let config = MongoConfig::new("mongodb://db:27017")
            .with_database("shop_test")
            .with_app_name("shop-api")
            .with_pool_size(20, 2);

        assert_eq!(config.database.as_deref(), Some("shop_test"));
        assert_eq!(config.app_name.as_deref(), Some("shop-api"));
        assert_eq!(config.max_pool_size, 20);
        assert_eq!(config.min_pool_size, 2);
    }

    #[test]
    fn test_redacted_url_hides_password() {
        let config = MongoConfig::new("mongodb://admin:s3cret@db:27017/shop");
        assert_eq!(config.redacted_url(), "mongodb://admin:***@db:27017/shop");

        let plain = MongoConfig::new("mongodb://db:27017");
        assert_eq!(plain.redacted_url(), "mongodb://db:27017");
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_primary_variables() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGO_URL", None),
                ("MONGODB", None),
                ("MONGODB_DATABASE", Some("catalog")),
                ("MONGO_DATABASE", None),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://localhost:27017");
                assert_eq!(config.database.as_deref(), Some("catalog"));
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_accepts_bare_mongodb_variable() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None),
                ("MONGO_URL", None),
                ("MONGODB", Some("mongodb://legacy:27017/shop")),
                ("MONGODB_DATABASE", None),
                ("MONGO_DATABASE", None),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://legacy:27017/shop");
                assert_eq!(config.database, None);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_missing_url() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None),
                ("MONGODB", None),
            ],
            || {
                let err = MongoConfig::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::MissingEnvVar(_)));
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_rejects_non_mongodb_scheme() {
        temp_env::with_var("MONGODB_URL", Some("postgres://localhost:5432"), || {
            let err = MongoConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_invalid_pool_size() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_MAX_POOL_SIZE", Some("many")),
            ],
            || {
                let err = MongoConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("MONGODB_MAX_POOL_SIZE"));
            },
        );
    }
}
