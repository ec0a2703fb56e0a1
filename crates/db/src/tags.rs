//! Tags collection.

use async_trait::async_trait;

use luncher_core::Tag;

use crate::client::{Client, ClientError};
use crate::document::{Document, DocumentCollection, single};
use crate::error::RepositoryError;

impl Document for Tag {
    const COLLECTION: &'static str = "tags";
    const NOUN: &'static str = "tag";
}

/// Capability contract for tag storage.
#[async_trait]
pub trait Tags: Send + Sync {
    /// Store tags atomically, returning them with IDs populated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a tag name is already taken.
    async fn insert_many(&self, tags: Vec<Tag>) -> Result<Vec<Tag>, RepositoryError>;

    /// Store a single tag.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name is already taken.
    async fn insert(&self, tag: Tag) -> Result<Tag, RepositoryError> {
        single(self.insert_many(vec![tag]).await?)
    }

    /// Get a tag by its machine name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no tag has that name.
    async fn get(&self, name: &str) -> Result<Tag, RepositoryError>;

    /// Every tag, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    async fn list(&self) -> Result<Vec<Tag>, RepositoryError>;
}

/// `PostgreSQL`-backed tags.
#[derive(Clone)]
pub struct TagsCollection {
    inner: DocumentCollection<Tag>,
}

impl TagsCollection {
    /// Bind to the tags collection.
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
impl Tags for TagsCollection {
    async fn insert_many(&self, tags: Vec<Tag>) -> Result<Vec<Tag>, RepositoryError> {
        self.inner.insert_many(tags).await
    }

    async fn get(&self, name: &str) -> Result<Tag, RepositoryError> {
        self.inner.find_by_field("name", name).await
    }

    async fn list(&self) -> Result<Vec<Tag>, RepositoryError> {
        self.inner.list_ordered_by("name").await
    }
}
