//! Core of the storefront content subsystem: a closed set of named
//! content records (shipping info, policies, FAQ, contact details, about
//! text) stored behind one key-value surface, resolved with a
//! static-default fallback and edited through per-variant helpers that
//! all funnel into one full-replace update.

pub mod content;
pub mod editor;
pub mod events;
pub mod service;
pub mod store;

pub use content::model::{ContentPayload, ContentRecord};
pub use content::slug::ContentSlug;
pub use service::{ContentService, UpdateError};
