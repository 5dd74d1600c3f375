//! In-process store. Backs `serve --ephemeral` and the test suites.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use super::document::{StoredRecord, StoredRecordDraft};
use super::error::StoreError;
use super::{new_document_id, ItemStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<StoredRecord>>>,
    writes: AtomicUsize,
    unavailable: AtomicBool,
    latency: Option<Duration>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every call by `latency` before it touches the data.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Place a document directly, bypassing `insert` and the write counter.
    pub fn seed(&self, collection: &str, record: StoredRecord) {
        self.lock()
            .entry(collection.to_string())
            .or_default()
            .push(record);
    }

    /// While set, every call fails with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of successful `insert` calls.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of documents in `collection`.
    #[must_use]
    pub fn len(&self, collection: &str) -> usize {
        self.lock().get(collection).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().values().all(Vec::is_empty)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<StoredRecord>>> {
        self.collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    async fn gate(&self) -> Result<(), StoreError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store switched off".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<StoredRecord>, StoreError> {
        self.gate().await?;
        Ok(self.lock().get(collection).cloned().unwrap_or_default())
    }

    async fn insert(
        &self,
        collection: &str,
        draft: StoredRecordDraft,
    ) -> Result<StoredRecord, StoreError> {
        self.gate().await?;
        let record = StoredRecord::from_draft(new_document_id(), draft);
        self.seed(collection, record.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_counts_writes() {
        let store = MemoryStore::new();
        let mut draft = StoredRecordDraft::new();
        draft.set("nomeItem", "Caneta");

        let record = store.insert("itens_perdidos", draft).await.unwrap();
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.len("itens_perdidos"), 1);
        assert_eq!(record.get_str("nomeItem"), Some("Caneta"));
    }

    #[tokio::test]
    async fn test_seed_does_not_count_as_write() {
        let store = MemoryStore::new();
        store.seed("itens_perdidos", StoredRecord::new("s1", serde_json::Map::new()));
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.find_all("itens_perdidos").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_store_rejects_calls() {
        let store = MemoryStore::new();
        store.set_unavailable(true);
        assert!(store.find_all("itens_perdidos").await.is_err());
        assert!(store
            .insert("itens_perdidos", StoredRecordDraft::new())
            .await
            .is_err());
        assert_eq!(store.write_count(), 0);
        assert!(store.is_empty());

        store.set_unavailable(false);
        assert!(store.find_all("itens_perdidos").await.is_ok());
    }
}
