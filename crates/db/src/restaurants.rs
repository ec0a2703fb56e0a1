//! Restaurants collection.

use async_trait::async_trait;

use luncher_core::{Restaurant, RestaurantId};

use crate::client::{Client, ClientError};
use crate::document::{Document, DocumentCollection, single};
use crate::error::RepositoryError;

impl Document for Restaurant {
    const COLLECTION: &'static str = "restaurants";
    const NOUN: &'static str = "restaurant";
}

/// Capability contract for restaurant storage.
#[async_trait]
pub trait Restaurants: Send + Sync {
    /// Store restaurants atomically, returning them with IDs populated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a name is already taken.
    async fn insert_many(
        &self,
        restaurants: Vec<Restaurant>,
    ) -> Result<Vec<Restaurant>, RepositoryError>;

    /// Store a single restaurant.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name is already taken.
    async fn insert(&self, restaurant: Restaurant) -> Result<Restaurant, RepositoryError> {
        single(self.insert_many(vec![restaurant]).await?)
    }

    /// Get a restaurant by its unique name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no restaurant has that name.
    async fn get(&self, name: &str) -> Result<Restaurant, RepositoryError>;

    /// Get a restaurant by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the ID is unknown.
    async fn get_by_id(&self, id: RestaurantId) -> Result<Restaurant, RepositoryError>;

    /// Whether a restaurant with this name exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` on I/O failure only.
    async fn exists(&self, name: &str) -> Result<bool, RepositoryError>;
}

/// `PostgreSQL`-backed restaurants.
#[derive(Clone)]
pub struct RestaurantsCollection {
    inner: DocumentCollection<Restaurant>,
}

impl RestaurantsCollection {
    /// Bind to the restaurants collection.
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
impl Restaurants for RestaurantsCollection {
    async fn insert_many(
        &self,
        restaurants: Vec<Restaurant>,
    ) -> Result<Vec<Restaurant>, RepositoryError> {
        self.inner.insert_many(restaurants).await
    }

    async fn get(&self, name: &str) -> Result<Restaurant, RepositoryError> {
        self.inner.find_by_field("name", name).await
    }

    async fn get_by_id(&self, id: RestaurantId) -> Result<Restaurant, RepositoryError> {
        self.inner.find_by_id(id.as_uuid()).await
    }

    async fn exists(&self, name: &str) -> Result<bool, RepositoryError> {
        self.inner.exists_by_field("name", name).await
    }
}
