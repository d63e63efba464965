/// Payload validation applied by the updater before persisting.
///
/// The editors already preserve these invariants, but a full-replace write
/// would otherwise persist a malformed payload silently, so the server
/// checks shape and per-variant invariants once more at the boundary.
use thiserror::Error;

use super::model::{ContentPayload, PolicySection};
use super::slug::ContentSlug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("payload shape does not match content type '{slug}'")]
    ShapeMismatch { slug: ContentSlug },
    #[error("duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: i64 },
    #[error("about-us must have at least one paragraph")]
    NoParagraphs,
}

/// Check a payload against the invariants of its slug's variant.
pub fn check(slug: ContentSlug, payload: &ContentPayload) -> Result<(), ValidationError> {
    if !payload.matches(slug) {
        return Err(ValidationError::ShapeMismatch { slug });
    }
    match payload {
        ContentPayload::Shipping(items) => {
            unique_ids("shipping items", items.iter().map(|i| i.id))
        }
        ContentPayload::Policy(sections) => check_sections(sections),
        ContentPayload::Faq(items) => unique_ids("faq items", items.iter().map(|i| i.id)),
        ContentPayload::CookiePolicy(content) => check_sections(&content.sections),
        // Shape constraints (two phone slots) are carried by the types.
        ContentPayload::Contact(_) => Ok(()),
        ContentPayload::About(content) => {
            if content.paragraphs.is_empty() {
                Err(ValidationError::NoParagraphs)
            } else {
                Ok(())
            }
        }
    }
}

fn check_sections(sections: &[PolicySection]) -> Result<(), ValidationError> {
    unique_ids("policy sections", sections.iter().map(|s| s.id))
}

fn unique_ids(
    collection: &'static str,
    ids: impl Iterator<Item = i64>,
) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId { collection, id });
        }
    }
    Ok(())
}
