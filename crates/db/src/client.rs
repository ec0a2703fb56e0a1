//! Store connection lifecycle.

use std::str::FromStr;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use thiserror::Error;

use crate::config::Config;
use crate::error::RepositoryError;

/// Schema for every collection, applied on connect.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Every collection table, in truncation order.
#[cfg(feature = "test-utils")]
const COLLECTIONS: &[&str] = &[
    "offers",
    "regions",
    "restaurants",
    "users",
    "tags",
    "offer_group_posts",
    "registration_access_tokens",
];

/// Errors from managing the store connection.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The store could not be reached within the configured budget.
    #[error("failed to connect to the database: {0}")]
    Connection(#[source] sqlx::Error),

    /// Applying the collection schema failed.
    #[error("failed to prepare collections: {0}")]
    Migration(#[from] MigrateError),

    /// `connect` was called on a connected client.
    #[error("client is already connected")]
    AlreadyConnected,

    /// The operation needs a connection and there is none.
    #[error("client is not connected")]
    NotConnected,

    /// A statement issued by the client itself failed.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// Owner of the store connection pool.
///
/// A `Client` starts unconnected. Collections are created from a connected
/// client and share its pool; every collection call is an independent round
/// trip, so one client can serve many concurrent callers.
#[derive(Debug)]
pub struct Client {
    config: Config,
    pool: Option<PgPool>,
}

impl Client {
    /// Create an unconnected client. Performs no I/O.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config, pool: None }
    }

    /// Connect to the store and make sure every collection exists.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::AlreadyConnected` if called twice without a
    /// `disconnect` in between, `ClientError::Connection` if the store is
    /// unreachable within the configured timeout and
    /// `ClientError::Migration` if preparing the collections fails.
    pub async fn connect(&mut self) -> Result<(), ClientError> {
        if self.pool.is_some() {
            return Err(ClientError::AlreadyConnected);
        }

        let options = PgConnectOptions::from_str(self.config.url.expose_secret())
            .map_err(ClientError::Connection)?
            .database(&self.config.name);

        tracing::debug!(database = %self.config.name, "Connecting to document store");
        let pool = PgPoolOptions::new()
            .max_connections(self.config.max_connections)
            .acquire_timeout(self.config.connect_timeout)
            .connect_with(options)
            .await
            .map_err(ClientError::Connection)?;

        MIGRATOR.run(&pool).await?;
        tracing::info!(database = %self.config.name, "Connected to document store");

        self.pool = Some(pool);
        Ok(())
    }

    /// Close the connection pool. A no-op when not connected.
    pub async fn disconnect(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.close().await;
            tracing::debug!(database = %self.config.name, "Disconnected from document store");
        }
    }

    /// Whether `connect` has succeeded and `disconnect` has not been called.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.pool.is_some()
    }

    /// The configuration this client was created with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The shared connection pool.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotConnected` before `connect` succeeds.
    pub fn pool(&self) -> Result<&PgPool, ClientError> {
        self.pool.as_ref().ok_or(ClientError::NotConnected)
    }

    /// Round trip to the store, for readiness checks.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the store does not answer.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        let pool = self
            .pool
            .as_ref()
            .ok_or(RepositoryError::Database(sqlx::Error::PoolClosed))?;
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Delete every document from every collection.
    ///
    /// Only compiled with the `test-utils` feature.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotConnected` when not connected and
    /// `ClientError::Database` if truncation fails.
    #[cfg(feature = "test-utils")]
    pub async fn wipe_db(&self) -> Result<(), ClientError> {
        let pool = self.pool()?;
        let sql = format!("TRUNCATE {}", COLLECTIONS.join(", "));
        sqlx::query(&sql)
            .execute(pool)
            .await
            .map_err(ClientError::Database)?;
        tracing::debug!(database = %self.config.name, "Wiped every collection");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_new_client_is_not_connected() {
        let client = Client::new(Config::new("postgres://localhost:5432", "test"));
        assert!(!client.is_connected());
        assert!(matches!(client.pool(), Err(ClientError::NotConnected)));
    }

    #[tokio::test]
    async fn test_disconnect_without_connect_is_noop() {
        let mut client = Client::new(Config::new("postgres://localhost:5432", "test"));
        client.disconnect().await;
        client.disconnect().await;
        assert!(!client.is_connected());
    }

    #[tokio::test]
    async fn test_ping_without_connection_fails() {
        let client = Client::new(Config::new("postgres://localhost:5432", "test"));
        assert!(matches!(
            client.ping().await,
            Err(RepositoryError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let mut config = Config::new("definitely not a url", "test");
        config.connect_timeout = Duration::from_millis(100);
        let mut client = Client::new(config);
        assert!(matches!(
            client.connect().await,
            Err(ClientError::Connection(_))
        ));
        assert!(!client.is_connected());
    }

    #[cfg(feature = "test-utils")]
    #[tokio::test]
    async fn test_wipe_db_requires_connection() {
        let client = Client::new(Config::new("postgres://localhost:5432", "test"));
        assert!(matches!(
            client.wipe_db().await,
            Err(ClientError::NotConnected)
        ));
    }
}
