//! Offers collection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use luncher_core::{Offer, OfferId};

use crate::client::{Client, ClientError};
use crate::document::{Document, DocumentCollection, single};
use crate::error::RepositoryError;

impl Document for Offer {
    const COLLECTION: &'static str = "offers";
    const NOUN: &'static str = "offer";
}

/// Capability contract for offer storage.
#[async_trait]
pub trait Offers: Send + Sync {
    /// Store offers atomically, returning them with IDs populated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidDocument` if any offer ends before it
    /// starts; nothing is stored in that case.
    async fn insert_many(&self, offers: Vec<Offer>) -> Result<Vec<Offer>, RepositoryError>;

    /// Store a single offer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidDocument` if the offer ends before it starts.
    async fn insert(&self, offer: Offer) -> Result<Offer, RepositoryError> {
        single(self.insert_many(vec![offer]).await?)
    }

    /// Get an offer by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the ID is unknown.
    async fn get(&self, id: OfferId) -> Result<Offer, RepositoryError>;

    /// Every offer whose `[from_time, to_time)` intersects `[start, end)`.
    ///
    /// Ordered by ascending `from_time`, ties broken by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    async fn get_for_time_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Offer>, RepositoryError>;
}

/// Reject any offer breaking its interval invariant.
pub(crate) fn validate_all(offers: &[Offer]) -> Result<(), RepositoryError> {
    offers
        .iter()
        .try_for_each(Offer::validate)
        .map_err(|e| RepositoryError::InvalidDocument(e.to_string()))
}

/// `PostgreSQL`-backed offers.
#[derive(Clone)]
pub struct OffersCollection {
    inner: DocumentCollection<Offer>,
}

impl OffersCollection {
    /// Bind to the offers collection.
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
impl Offers for OffersCollection {
    async fn insert_many(&self, offers: Vec<Offer>) -> Result<Vec<Offer>, RepositoryError> {
        validate_all(&offers)?;
        self.inner.insert_many(offers).await
    }

    async fn get(&self, id: OfferId) -> Result<Offer, RepositoryError> {
        self.inner.find_by_id(id.as_uuid()).await
    }

    async fn get_for_time_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Offer>, RepositoryError> {
        let sql = format!(
            r"{}
            WHERE (doc->>'fromTime')::timestamptz < $2
              AND (doc->>'toTime')::timestamptz > $1
            ORDER BY (doc->>'fromTime')::timestamptz ASC, id ASC",
            DocumentCollection::<Offer>::select()
        );
        self.inner
            .fetch_all(sqlx::query_scalar(&sql).bind(start).bind(end))
            .await
    }
}
