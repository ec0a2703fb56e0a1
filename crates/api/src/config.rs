//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `LUNCHER_API_HOST` - Bind address (default: 127.0.0.1)
//! - `LUNCHER_API_PORT` - Listen port (default: 8080)
//! - `LUNCHER_DB_*` - Store settings, see [`luncher_db::config`]

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "8080";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error(transparent)]
    Db(#[from] luncher_db::ConfigError),
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Document store settings
    pub db: luncher_db::Config,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the host or port does not
    /// parse, `ConfigError::Db` if a store setting is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let db = luncher_db::Config::from_env()?;
        Self::from_lookup(|key| std::env::var(key).ok(), db)
    }

    fn from_lookup(
        get: impl Fn(&str) -> Option<String>,
        db: luncher_db::Config,
    ) -> Result<Self, ConfigError> {
        let host = get("LUNCHER_API_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_owned())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUNCHER_API_HOST".to_owned(), e.to_string()))?;
        let port = get("LUNCHER_API_PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_owned())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUNCHER_API_PORT".to_owned(), e.to_string()))?;

        Ok(Self { host, port, db })
    }

    /// Address to listen on.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
