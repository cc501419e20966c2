//! Configuration for the Shop API

use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use database::mongodb::MongoConfig;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Which wishlist route set is mounted under `/api/wishlist`.
///
/// The sets are alternatives and are never served together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WishlistRoutes {
    /// `/{user_id}` and `/{user_id}/{product_id}`
    #[default]
    User,
    /// `/` and `/{id}` over whole wishlist documents
    Legacy,
}

/// `WISHLIST_ROUTES`: `user` (default) or `legacy`
impl FromEnv for WishlistRoutes {
    fn from_env() -> Result<Self, ConfigError> {
        let value = env_or_default("WISHLIST_ROUTES", "user");
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "WISHLIST_ROUTES".to_string(),
                value,
            })
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub wishlist_routes: WishlistRoutes,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?.with_app_name(env!("CARGO_PKG_NAME"));
        let server = ServerConfig::from_env()?;
        let wishlist_routes = WishlistRoutes::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            wishlist_routes,
        })
    }
}
