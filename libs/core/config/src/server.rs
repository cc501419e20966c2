use crate::{env_or_default, ConfigError, FromEnv};
use std::net::Ipv4Addr;

const DEFAULT_PORT: u16 = 3000;

/// Listen address for the HTTP server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// `host:port`, ready for `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|e| ConfigError::ParseError {
        key: "PORT".to_string(),
        details: format!("{raw:?}: {e}"),
    })
}

/// `HOST` (all interfaces when unset) and `PORT` (3000 when unset)
impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            host: env_or_default("HOST", &defaults.host),
            port,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), DEFAULT_PORT)
    }
}
