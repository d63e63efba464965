use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::ContentEvent;

/// In-process event bus backed by `tokio::broadcast`. Single-node.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: Arc<broadcast::Sender<ContentEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Publish an event to all current subscribers. A send error only
    /// means nobody is listening, which is fine.
    pub fn publish(&self, event: ContentEvent) {
        let _ = self.sender.send(event);
    }

    /// Subscribe to the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.sender.subscribe()
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::slug::ContentSlug;
    use crate::events::types::ContentUpdated;
    use chrono::Utc;

    fn updated(slug: ContentSlug) -> ContentEvent {
        ContentEvent::Updated(ContentUpdated {
            slug,
            updated_at: Utc::now(),
            created: false,
        })
    }

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(updated(ContentSlug::Faq));

        let ContentEvent::Updated(event) = rx.recv().await.unwrap();
        assert_eq!(event.slug, ContentSlug::Faq);
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(updated(ContentSlug::AboutUs));

        assert!(rx1.recv().await.is_ok());
        assert!(rx2.recv().await.is_ok());
    }
}
