//! Content persistence.
//!
//! The resolver and updater only see the [`ContentStore`] trait; the
//! production backend is Postgres (JSONB keyed by slug), with an
//! in-memory implementation for tests and local development.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::content::model::{ContentPayload, ContentRecord};
use crate::content::slug::ContentSlug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored payload for '{slug}' is corrupt: {source}")]
    CorruptPayload {
        slug: ContentSlug,
        #[source]
        source: serde_json::Error,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Keyed storage for content records.
///
/// `put` has upsert semantics: the previous payload for the slug is
/// discarded atomically and `updated_at` advances; `created_at` survives
/// replacement. `get` hands out a snapshot that never aliases the stored
/// copy.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn get(&self, slug: ContentSlug) -> Result<Option<ContentRecord>, StoreError>;

    async fn put(
        &self,
        slug: ContentSlug,
        payload: ContentPayload,
    ) -> Result<ContentRecord, StoreError>;
}
