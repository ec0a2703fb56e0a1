//! Registration access tokens collection.

use async_trait::async_trait;

use luncher_core::RegistrationAccessToken;

use crate::client::{Client, ClientError};
use crate::document::{Document, DocumentCollection, single};
use crate::error::RepositoryError;

impl Document for RegistrationAccessToken {
    const COLLECTION: &'static str = "registration_access_tokens";
    const NOUN: &'static str = "registration access token";
}

/// Capability contract for registration token storage.
#[async_trait]
pub trait RegistrationAccessTokens: Send + Sync {
    /// Store tokens atomically, returning them with IDs populated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a token value is already stored.
    async fn insert_many(
        &self,
        tokens: Vec<RegistrationAccessToken>,
    ) -> Result<Vec<RegistrationAccessToken>, RepositoryError>;

    /// Store a single token.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the token value is already stored.
    async fn insert(
        &self,
        token: RegistrationAccessToken,
    ) -> Result<RegistrationAccessToken, RepositoryError> {
        single(self.insert_many(vec![token]).await?)
    }

    /// Whether `token` has been issued.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    async fn exists(&self, token: &str) -> Result<bool, RepositoryError>;
}

/// `PostgreSQL`-backed registration access tokens.
#[derive(Clone)]
pub struct RegistrationAccessTokensCollection {
    inner: DocumentCollection<RegistrationAccessToken>,
}

impl RegistrationAccessTokensCollection {
    /// Bind to the registration access tokens collection.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotConnected` if the client is not connected.
    pub fn new(client: &Client) -> Result<Self, ClientError> {
        Ok(Self {
            inner: DocumentCollection::new(client)?,
        })
    }
}

#[async_trait]
impl RegistrationAccessTokens for RegistrationAccessTokensCollection {
    async fn insert_many(
        &self,
        tokens: Vec<RegistrationAccessToken>,
    ) -> Result<Vec<RegistrationAccessToken>, RepositoryError> {
        self.inner.insert_many(tokens).await
    }

    async fn exists(&self, token: &str) -> Result<bool, RepositoryError> {
        self.inner.exists_by_field("token", token).await
    }
}
