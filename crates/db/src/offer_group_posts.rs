//! Offer group posts collection.

use async_trait::async_trait;
use chrono::NaiveDate;

use luncher_core::{OfferGroupPost, RestaurantId};

use crate::client::{Client, ClientError};
use crate::document::{Document, DocumentCollection, single};
use crate::error::RepositoryError;

impl Document for OfferGroupPost {
    const COLLECTION: &'static str = "offer_group_posts";
    const NOUN: &'static str = "offer group post";
}

/// Capability contract for daily post storage.
#[async_trait]
pub trait OfferGroupPosts: Send + Sync {
    /// Store posts atomically, returning them with IDs populated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a restaurant already has a post
    /// for one of the dates.
    async fn insert_many(
        &self,
        posts: Vec<OfferGroupPost>,
    ) -> Result<Vec<OfferGroupPost>, RepositoryError>;

    /// Store a single post.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the restaurant already has a
    /// post for that date.
    async fn insert(&self, post: OfferGroupPost) -> Result<OfferGroupPost, RepositoryError> {
        single(self.insert_many(vec![post]).await?)
    }

    /// Get a restaurant's post for one day.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if there is no such post.
    async fn get_by_date(
        &self,
        restaurant_id: RestaurantId,
        date: NaiveDate,
    ) -> Result<OfferGroupPost, RepositoryError>;
}

/// `PostgreSQL`-backed offer group posts.
#[derive(Clone)]
pub struct OfferGroupPostsCollection {
    inner: DocumentCollection<OfferGroupPost>,
}

impl OfferGroupPostsCollection {
    /// Bind to the offer group posts collection.
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
impl OfferGroupPosts for OfferGroupPostsCollection {
    async fn insert_many(
        &self,
        posts: Vec<OfferGroupPost>,
    ) -> Result<Vec<OfferGroupPost>, RepositoryError> {
        self.inner.insert_many(posts).await
    }

    async fn get_by_date(
        &self,
        restaurant_id: RestaurantId,
        date: NaiveDate,
    ) -> Result<OfferGroupPost, RepositoryError> {
        let sql = format!(
            "{} WHERE doc->>'restaurantId' = $1 AND doc->>'date' = $2 LIMIT 1",
            DocumentCollection::<OfferGroupPost>::select()
        );
        // Both fields are stored in their canonical string forms.
        self.inner
            .fetch_one(
                sqlx::query_scalar(&sql)
                    .bind(restaurant_id.to_string())
                    .bind(date.format("%Y-%m-%d").to_string()),
            )
            .await
    }
}
