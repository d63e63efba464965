//! In-memory store, used by tests and local development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::content::model::{ContentPayload, ContentRecord};
use crate::content::slug::ContentSlug;

use super::{ContentStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<ContentSlug, ContentRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get(&self, slug: ContentSlug) -> Result<Option<ContentRecord>, StoreError> {
        Ok(self.records.read().await.get(&slug).cloned())
    }

    async fn put(
        &self,
        slug: ContentSlug,
        payload: ContentPayload,
    ) -> Result<ContentRecord, StoreError> {
        let now = Utc::now();
        let mut records = self.records.write().await;
        let record = match records.get(&slug) {
            Some(existing) => ContentRecord {
                slug,
                content: payload,
                created_at: existing.created_at,
                updated_at: now,
            },
            None => ContentRecord {
                slug,
                content: payload,
                created_at: now,
                updated_at: now,
            },
        };
        records.insert(slug, record.clone());
        Ok(record)
    }
}
