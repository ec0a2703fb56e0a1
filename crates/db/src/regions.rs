//! Regions collection.

use async_trait::async_trait;

use luncher_core::Region;

use crate::client::{Client, ClientError};
use crate::document::{Document, DocumentCollection, single};
use crate::error::RepositoryError;

impl Document for Region {
    const COLLECTION: &'static str = "regions";
    const NOUN: &'static str = "region";
}

/// Capability contract for region storage.
#[async_trait]
pub trait Regions: Send + Sync {
    /// Store regions atomically, returning them with IDs populated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a name is already taken.
    async fn insert_many(&self, regions: Vec<Region>) -> Result<Vec<Region>, RepositoryError>;

    /// Store a single region.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name is already taken.
    async fn insert(&self, region: Region) -> Result<Region, RepositoryError> {
        single(self.insert_many(vec![region]).await?)
    }

    /// Get a region by its unique name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no region has that name.
    async fn get(&self, name: &str) -> Result<Region, RepositoryError>;

    /// Whether a region with this name exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` on I/O failure only.
    async fn exists(&self, name: &str) -> Result<bool, RepositoryError>;

    /// All regions, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    async fn list(&self) -> Result<Vec<Region>, RepositoryError>;
}

/// `PostgreSQL`-backed regions.
#[derive(Clone)]
pub struct RegionsCollection {
    inner: DocumentCollection<Region>,
}

impl RegionsCollection {
    /// Bind to the regions collection.
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
impl Regions for RegionsCollection {
    async fn insert_many(&self, regions: Vec<Region>) -> Result<Vec<Region>, RepositoryError> {
        self.inner.insert_many(regions).await
    }

    async fn get(&self, name: &str) -> Result<Region, RepositoryError> {
        self.inner.find_by_field("name", name).await
    }

    async fn exists(&self, name: &str) -> Result<bool, RepositoryError> {
        self.inner.exists_by_field("name", name).await
    }

    async fn list(&self) -> Result<Vec<Region>, RepositoryError> {
        self.inner.list_ordered_by("name").await
    }
}
