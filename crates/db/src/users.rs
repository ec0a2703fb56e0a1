//! Users collection.

use async_trait::async_trait;

use luncher_core::User;

use crate::client::{Client, ClientError};
use crate::document::{Document, DocumentCollection, single};
use crate::error::RepositoryError;

impl Document for User {
    const COLLECTION: &'static str = "users";
    const NOUN: &'static str = "user";
}

/// Capability contract for restaurant administrator storage.
#[async_trait]
pub trait Users: Send + Sync {
    /// Store users atomically, returning them with IDs populated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    async fn insert_many(&self, users: Vec<User>) -> Result<Vec<User>, RepositoryError>;

    /// Store a single user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    async fn insert(&self, user: User) -> Result<User, RepositoryError> {
        single(self.insert_many(vec![user]).await?)
    }

    /// Get the user logged in with `session_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user holds that session.
    async fn get_by_session_id(&self, session_id: &str) -> Result<User, RepositoryError>;

    /// Get a user by their Facebook user ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has that ID.
    async fn get_by_facebook_user_id(&self, facebook_user_id: &str)
    -> Result<User, RepositoryError>;

    /// Attach a session to the user with the given Facebook user ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has that ID.
    async fn set_session_id(
        &self,
        facebook_user_id: &str,
        session_id: &str,
    ) -> Result<(), RepositoryError>;
}

/// `PostgreSQL`-backed users.
#[derive(Clone)]
pub struct UsersCollection {
    inner: DocumentCollection<User>,
}

impl UsersCollection {
    /// Bind to the users collection.
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
impl Users for UsersCollection {
    async fn insert_many(&self, users: Vec<User>) -> Result<Vec<User>, RepositoryError> {
        self.inner.insert_many(users).await
    }

    async fn get_by_session_id(&self, session_id: &str) -> Result<User, RepositoryError> {
        let sql = format!(
            "{} WHERE doc->'session'->>'id' = $1 LIMIT 1",
            DocumentCollection::<User>::select()
        );
        self.inner
            .fetch_one(sqlx::query_scalar(&sql).bind(session_id))
            .await
    }

    async fn get_by_facebook_user_id(
        &self,
        facebook_user_id: &str,
    ) -> Result<User, RepositoryError> {
        self.inner
            .find_by_field("facebookUserId", facebook_user_id)
            .await
    }

    async fn set_session_id(
        &self,
        facebook_user_id: &str,
        session_id: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET doc = jsonb_set(doc, '{session}', jsonb_build_object('id', $2::text))
            WHERE doc->>'facebookUserId' = $1
            ",
        )
        .bind(facebook_user_id)
        .bind(session_id)
        .execute(self.inner.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
