//! Generic JSONB document collection.
//!
//! Every entity table has the same shape, `(id UUID, doc JSONB)`, so the
//! plumbing shared by all collections lives here and the per-entity modules
//! only add their lookups.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use uuid::Uuid;

use crate::client::{Client, ClientError};
use crate::error::RepositoryError;

/// Column list returning a stored document with its ID merged in as `_id`.
pub(crate) const PROJECTION: &str = "doc || jsonb_build_object('_id', id) AS doc";

/// An entity stored as a document in its own collection.
pub(crate) trait Document: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// Table holding the collection.
    const COLLECTION: &'static str;
    /// Singular noun used in conflict messages.
    const NOUN: &'static str;
}

/// Typed access to one collection table.
pub(crate) struct DocumentCollection<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for DocumentCollection<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Document> DocumentCollection<E> {
    /// Bind to the collection through a connected client.
    pub(crate) fn new(client: &Client) -> Result<Self, ClientError> {
        Ok(Self {
            pool: client.pool()?.clone(),
            _entity: PhantomData,
        })
    }

    pub(crate) const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// `SELECT` prefix for this collection.
    pub(crate) fn select() -> String {
        format!("SELECT {PROJECTION} FROM {}", E::COLLECTION)
    }

    /// Insert every document in one transaction.
    ///
    /// Either all documents are stored or none are. The returned documents
    /// carry their store-generated IDs, in input order.
    pub(crate) async fn insert_many(&self, docs: Vec<E>) -> Result<Vec<E>, RepositoryError> {
        let sql = format!(
            "INSERT INTO {} (doc) VALUES ($1 - '_id'::text) RETURNING {PROJECTION}",
            E::COLLECTION
        );

        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(docs.len());
        for doc in &docs {
            let value = serde_json::to_value(doc).map_err(|e| {
                RepositoryError::DataCorruption(format!("failed to serialize {}: {e}", E::NOUN))
            })?;

            let stored: JsonValue = sqlx::query_scalar(&sql)
                .bind(value)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| RepositoryError::from_write(e, E::NOUN))?;

            inserted.push(decode(stored)?);
        }
        tx.commit().await?;

        tracing::debug!(
            collection = E::COLLECTION,
            count = inserted.len(),
            "Inserted documents"
        );
        Ok(inserted)
    }

    /// Fetch the document whose top-level `field` equals `value`.
    pub(crate) async fn find_by_field(
        &self,
        field: &str,
        value: &str,
    ) -> Result<E, RepositoryError> {
        let sql = format!("{} WHERE doc->>'{field}' = $1 LIMIT 1", Self::select());
        self.fetch_one(sqlx::query_scalar(&sql).bind(value)).await
    }

    /// Fetch the document stored under `id`.
    pub(crate) async fn find_by_id(&self, id: Uuid) -> Result<E, RepositoryError> {
        let sql = format!("{} WHERE id = $1", Self::select());
        self.fetch_one(sqlx::query_scalar(&sql).bind(id)).await
    }

    /// Whether a document with top-level `field` equal to `value` exists.
    pub(crate) async fn exists_by_field(
        &self,
        field: &str,
        value: &str,
    ) -> Result<bool, RepositoryError> {
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE doc->>'{field}' = $1)",
            E::COLLECTION
        );
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Every document, ordered by a top-level text field.
    pub(crate) async fn list_ordered_by(&self, field: &str) -> Result<Vec<E>, RepositoryError> {
        let sql = format!("{} ORDER BY doc->>'{field}' ASC, id ASC", Self::select());
        self.fetch_all(sqlx::query_scalar(&sql)).await
    }

    /// Run a prepared single-document query, mapping no row to `NotFound`.
    pub(crate) async fn fetch_one<'q>(
        &self,
        query: sqlx::query::QueryScalar<'q, sqlx::Postgres, JsonValue, sqlx::postgres::PgArguments>,
    ) -> Result<E, RepositoryError> {
        let row = query.fetch_optional(&self.pool).await?;
        row.map_or(Err(RepositoryError::NotFound), decode)
    }

    /// Run a prepared multi-document query.
    pub(crate) async fn fetch_all<'q>(
        &self,
        query: sqlx::query::QueryScalar<'q, sqlx::Postgres, JsonValue, sqlx::postgres::PgArguments>,
    ) -> Result<Vec<E>, RepositoryError> {
        let rows = query.fetch_all(&self.pool).await?;
        rows.into_iter().map(decode).collect()
    }
}

/// Take the only element of a single-document insert.
pub(crate) fn single<T>(mut inserted: Vec<T>) -> Result<T, RepositoryError> {
    inserted
        .pop()
        .ok_or_else(|| RepositoryError::DataCorruption("insert returned no document".to_owned()))
}

fn decode<E: Document>(value: JsonValue) -> Result<E, RepositoryError> {
    serde_json::from_value(value).map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid {} in database: {e}", E::NOUN))
    })
}
