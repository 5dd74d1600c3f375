//! Document store holding one collection per item kind.
//!
//! The store knows nothing about items: it persists flat string-keyed
//! documents and hands out identifiers. Mapping to and from [`crate::Item`]
//! happens in [`crate::item::transform`].
mod document;
mod error;
mod markdown;
mod memory;

use async_trait::async_trait;

pub use document::{StoredRecord, StoredRecordDraft};
pub use error::StoreError;
pub use markdown::MarkdownStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every readable document in `collection`, in no particular order.
    async fn find_all(&self, collection: &str) -> Result<Vec<StoredRecord>, StoreError>;

    /// Persist a new document and return it with its generated identifier.
    async fn insert(
        &self,
        collection: &str,
        draft: StoredRecordDraft,
    ) -> Result<StoredRecord, StoreError>;
}

/// Generate a fresh document identifier.
pub(crate) fn new_document_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
