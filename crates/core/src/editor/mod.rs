//! Per-variant editing helpers.
//!
//! Every operation here is a pure function from a borrowed payload to a
//! new payload; a refused operation returns an [`EditError`] and the input
//! is untouched. Nothing in this module performs I/O — the resulting
//! payload is handed to the updater as one full replacement.

pub mod about;
pub mod contact;
pub mod cookie;
pub mod faq;
pub mod policy;
pub mod shipping;

mod session;

pub use session::{EditorSession, EditorStatus, SessionError};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("no element at index {0}")]
    IndexOutOfBounds(usize),
    #[error("at least one paragraph is required")]
    ParagraphFloor,
    #[error("phone slot must be 0 or 1, got {0}")]
    InvalidPhoneSlot(usize),
    #[error("unknown field path '{0}'")]
    UnknownField(String),
    #[error("section has no list to edit")]
    NoList,
}

/// Next id for a collection: `1 + max(existing ids)`, or 1 when empty.
/// Ids are assigned locally and persisted with the whole array, so they
/// are session-unique, not globally unique across concurrent editors.
pub fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_on_empty_is_one() {
        assert_eq!(next_id(std::iter::empty()), 1);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id([3, 1, 7].into_iter()), 8);
    }

    #[test]
    fn next_id_ignores_gaps() {
        // Removed ids are never reused.
        assert_eq!(next_id([1, 2, 9].into_iter()), 10);
    }
}
