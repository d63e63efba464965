use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::content::slug::ContentSlug;

/// Events emitted after successful content updates. Consumed in-process
/// today; the payload is serializable so a listener endpoint can forward
/// it later.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentEvent {
    Updated(ContentUpdated),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUpdated {
    pub slug: ContentSlug,
    pub updated_at: DateTime<Utc>,
    /// True when this update created the record.
    pub created: bool,
}
