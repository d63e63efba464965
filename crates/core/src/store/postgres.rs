//! Postgres-backed store. One row per slug, payload as JSONB.
//!
//! Queries are runtime-checked so the crate builds without a live
//! database; the schema lives in the workspace `migrations/` directory.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::content::model::{ContentPayload, ContentRecord};
use crate::content::slug::ContentSlug;

use super::{ContentStore, StoreError};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgStore {
    async fn get(&self, slug: ContentSlug) -> Result<Option<ContentRecord>, StoreError> {
        let row = sqlx::query(
            "SELECT content, created_at, updated_at FROM content_records WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: serde_json::Value = row.try_get("content")?;
        let content = ContentPayload::from_value(slug, value)
            .map_err(|source| StoreError::CorruptPayload { slug, source })?;

        Ok(Some(ContentRecord {
            slug,
            content,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        }))
    }

    async fn put(
        &self,
        slug: ContentSlug,
        payload: ContentPayload,
    ) -> Result<ContentRecord, StoreError> {
        let value = serde_json::to_value(&payload)?;

        // Atomic full replace; created_at survives, updated_at advances.
        let row = sqlx::query(
            "INSERT INTO content_records (slug, content) VALUES ($1, $2) \
             ON CONFLICT (slug) DO UPDATE \
             SET content = EXCLUDED.content, updated_at = now() \
             RETURNING created_at, updated_at",
        )
        .bind(slug.as_str())
        .bind(value)
        .fetch_one(&self.pool)
        .await?;

        Ok(ContentRecord {
            slug,
            content: payload,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
