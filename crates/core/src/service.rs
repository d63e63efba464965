//! The two boundary operations: resolve (read with absent signal) and
//! update (validated full replace).

use std::sync::Arc;

use thiserror::Error;

use crate::content::model::{ContentPayload, ContentRecord};
use crate::content::slug::ContentSlug;
use crate::content::{defaults, validate};
use crate::events::bus::EventBus;
use crate::events::types::{ContentEvent, ContentUpdated};
use crate::store::{ContentStore, StoreError};

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] validate::ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Resolver and updater over a [`ContentStore`].
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn ContentStore>,
    events: EventBus,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>, events: EventBus) -> Self {
        Self { store, events }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Current payload for a slug, or `None` when the record has never
    /// been written. Transport failures degrade to `None` as well — the
    /// caller substitutes the static default either way, so a flaky store
    /// renders as default content, never as an error page.
    pub async fn resolve(&self, slug: ContentSlug) -> Option<ContentPayload> {
        match self.store.get(slug).await {
            Ok(record) => record.map(|r| r.content),
            Err(err) => {
                tracing::warn!(%slug, error = %err, "content fetch failed, treating as absent");
                None
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but substituting the slug's static
    /// default when absent. Public pages render through this.
    pub async fn resolve_or_default(&self, slug: ContentSlug) -> ContentPayload {
        match self.resolve(slug).await {
            Some(payload) => payload,
            None => defaults::payload(slug),
        }
    }

    /// Full record for a slug, timestamps included (editing forms show
    /// them). Transport failures surface here, unlike `resolve`.
    pub async fn fetch_record(
        &self,
        slug: ContentSlug,
    ) -> Result<Option<ContentRecord>, StoreError> {
        self.store.get(slug).await
    }

    /// Full-replace update. The payload is validated against the slug's
    /// variant and invariants, then replaces the stored record atomically
    /// (creating it on first write). Last write wins: concurrent sessions
    /// editing the same slug clobber each other whole-payload, by design.
    pub async fn update(
        &self,
        slug: ContentSlug,
        payload: ContentPayload,
    ) -> Result<ContentRecord, UpdateError> {
        validate::check(slug, &payload)?;

        let created = self.store.get(slug).await?.is_none();
        let record = self.store.put(slug, payload).await?;

        tracing::info!(%slug, created, "content updated");
        self.events.publish(ContentEvent::Updated(ContentUpdated {
            slug,
            updated_at: record.updated_at,
            created,
        }));

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::AboutContent;
    use crate::store::memory::MemoryStore;

    fn service() -> ContentService {
        ContentService::new(Arc::new(MemoryStore::new()), EventBus::new(16))
    }

    #[tokio::test]
    async fn resolve_unwritten_slug_is_none() {
        assert!(service().resolve(ContentSlug::Faq).await.is_none());
    }

    #[tokio::test]
    async fn resolve_or_default_falls_back() {
        let payload = service().resolve_or_default(ContentSlug::Faq).await;
        assert_eq!(payload, defaults::payload(ContentSlug::Faq));
    }

    #[tokio::test]
    async fn update_rejects_mismatched_shape() {
        let svc = service();
        let err = svc
            .update(ContentSlug::Faq, defaults::payload(ContentSlug::AboutUs))
            .await
            .unwrap_err();
        assert!(matches!(err, UpdateError::InvalidPayload(_)));
        // Nothing was persisted.
        assert!(svc.resolve(ContentSlug::Faq).await.is_none());
    }

    #[tokio::test]
    async fn update_rejects_invariant_violation() {
        let svc = service();
        let empty = ContentPayload::About(AboutContent {
            title: "About Us".into(),
            heading: "H".into(),
            paragraphs: vec![],
        });
        assert!(svc.update(ContentSlug::AboutUs, empty).await.is_err());
    }

    #[tokio::test]
    async fn first_update_creates_and_publishes() {
        let svc = service();
        let mut rx = svc.events().subscribe();

        svc.update(ContentSlug::Faq, defaults::payload(ContentSlug::Faq))
            .await
            .unwrap();

        let ContentEvent::Updated(event) = rx.recv().await.unwrap();
        assert_eq!(event.slug, ContentSlug::Faq);
        assert!(event.created);

        svc.update(ContentSlug::Faq, defaults::payload(ContentSlug::Faq))
            .await
            .unwrap();
        let ContentEvent::Updated(event) = rx.recv().await.unwrap();
        assert!(!event.created);
    }
}
