//! End-to-end flows over the in-memory store: resolve/update round
//! trips, default fallback, editing sessions, and the last-write-wins
//! behavior of concurrent sessions.

use std::sync::Arc;

use async_trait::async_trait;

use site_content_core::content::defaults;
use site_content_core::content::model::{ContentPayload, ContentRecord};
use site_content_core::editor::{faq, shipping, EditorSession, EditorStatus};
use site_content_core::events::bus::EventBus;
use site_content_core::store::memory::MemoryStore;
use site_content_core::store::{ContentStore, StoreError};
use site_content_core::{ContentService, ContentSlug};

fn service_with_store(store: Arc<dyn ContentStore>) -> ContentService {
    ContentService::new(store, EventBus::new(16))
}

fn service() -> ContentService {
    service_with_store(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn update_then_resolve_round_trips_every_slug() {
    let svc = service();
    for slug in ContentSlug::ALL {
        let payload = defaults::payload(slug);
        svc.update(slug, payload.clone()).await.unwrap();
        assert_eq!(svc.resolve(slug).await, Some(payload), "slug {slug}");
    }
}

#[tokio::test]
async fn faq_absent_default_add_save_resolve() {
    let svc = service();

    // Nothing persisted yet; the caller substitutes the static default.
    assert!(svc.resolve(ContentSlug::Faq).await.is_none());
    let initial = svc.resolve_or_default(ContentSlug::Faq).await;
    let ContentPayload::Faq(items) = initial else {
        panic!("faq default has the wrong variant");
    };
    assert_eq!(items.len(), 10);

    // One editing session: add a question, save, reload.
    let mut session = EditorSession::load(items);
    session.apply(|items| Ok(faq::add_item(items))).unwrap();
    assert_eq!(session.payload().last().unwrap().id, 11);

    let draft = session.begin_save().unwrap();
    let record = svc
        .update(ContentSlug::Faq, ContentPayload::Faq(draft))
        .await
        .unwrap();
    let ContentRecord {
        content: ContentPayload::Faq(confirmed),
        ..
    } = record
    else {
        panic!("confirmed record has the wrong variant");
    };
    session.save_succeeded(confirmed);
    assert_eq!(session.status(), EditorStatus::Loaded);

    let resolved = svc.resolve(ContentSlug::Faq).await.unwrap();
    let ContentPayload::Faq(items) = resolved else {
        panic!("resolved faq has the wrong variant");
    };
    assert_eq!(items.len(), 11);
    assert!(items.iter().any(|i| i.id == 11));
}

#[tokio::test]
async fn concurrent_sessions_are_last_write_wins() {
    let svc = service();
    svc.update(
        ContentSlug::ShippingDelivery,
        defaults::payload(ContentSlug::ShippingDelivery),
    )
    .await
    .unwrap();

    // Both sessions load the same snapshot.
    let ContentPayload::Shipping(snapshot) =
        svc.resolve(ContentSlug::ShippingDelivery).await.unwrap()
    else {
        panic!("wrong variant");
    };
    let session_a = snapshot.clone();
    let session_b = snapshot;

    // Session A retitles item 0 and saves.
    let a_items =
        shipping::update_field(&session_a, 0, shipping::ShippingField::Title, "Fast Shipping")
            .unwrap();
    svc.update(
        ContentSlug::ShippingDelivery,
        ContentPayload::Shipping(a_items),
    )
    .await
    .unwrap();

    // Session B, still on the stale snapshot, edits item 1 and saves.
    let b_items =
        shipping::update_field(&session_b, 1, shipping::ShippingField::Content, "Handled by us")
            .unwrap();
    svc.update(
        ContentSlug::ShippingDelivery,
        ContentPayload::Shipping(b_items.clone()),
    )
    .await
    .unwrap();

    // B's whole array won; A's title edit is silently gone.
    let ContentPayload::Shipping(final_items) =
        svc.resolve(ContentSlug::ShippingDelivery).await.unwrap()
    else {
        panic!("wrong variant");
    };
    assert_eq!(final_items, b_items);
    assert_ne!(final_items[0].title, "Fast Shipping");
    assert_eq!(final_items[1].content, "Handled by us");
}

/// Store stub whose reads always fail, standing in for a broken
/// transport.
struct FailingStore;

#[async_trait]
impl ContentStore for FailingStore {
    async fn get(&self, _slug: ContentSlug) -> Result<Option<ContentRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn put(
        &self,
        _slug: ContentSlug,
        _payload: ContentPayload,
    ) -> Result<ContentRecord, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test]
async fn transport_failure_degrades_to_default() {
    let svc = service_with_store(Arc::new(FailingStore));

    assert!(svc.resolve(ContentSlug::ContactUs).await.is_none());
    assert_eq!(
        svc.resolve_or_default(ContentSlug::ContactUs).await,
        defaults::payload(ContentSlug::ContactUs)
    );
}

#[tokio::test]
async fn failed_save_keeps_the_draft_for_retry() {
    let broken = service_with_store(Arc::new(FailingStore));

    let mut session = EditorSession::load(defaults::faq_items());
    session.apply(|items| Ok(faq::add_item(items))).unwrap();

    let draft = session.begin_save().unwrap();
    let result = broken
        .update(ContentSlug::Faq, ContentPayload::Faq(draft))
        .await;
    assert!(result.is_err());
    session.save_failed();

    // Draft intact, session retryable.
    assert_eq!(session.status(), EditorStatus::Dirty);
    assert_eq!(session.payload().len(), 11);
    assert!(session.begin_save().is_ok());
}
