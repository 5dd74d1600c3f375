//! Client-side cache of every item report, kept newest first.
//!
//! One registry is built per session and shared through an `Arc`. It talks to
//! whatever [`ItemsApi`] it was given: the in-process service or the HTTP
//! client.
//!
//! Loads may overlap. Each load takes a ticket from a generation counter and
//! only the most recently started one may commit its outcome; `dispose`
//! advances the counter too, so a late load cannot refill a disposed registry.

mod state;

pub use state::RegistryState;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::item::{Item, ItemError, ItemKind, Submission};
use crate::search::search;
use crate::service::ItemsApi;

#[derive(Debug, Default)]
struct Inner {
    state: RegistryState,
    items: Vec<Item>,
}

pub struct ItemRegistry {
    api: Arc<dyn ItemsApi>,
    inner: RwLock<Inner>,
    generation: AtomicU64,
    disposals: AtomicU64,
}

impl ItemRegistry {
    #[must_use]
    pub fn new(api: Arc<dyn ItemsApi>) -> Self {
        Self {
            api,
            inner: RwLock::new(Inner::default()),
            generation: AtomicU64::new(0),
            disposals: AtomicU64::new(0),
        }
    }

    /// Fetch both kinds and replace the cached items.
    ///
    /// On failure the cached items stay as they were and the state becomes
    /// [`RegistryState::Failed`]. A load overtaken by a newer one (or by
    /// [`dispose`](Self::dispose)) returns its own outcome without touching
    /// the registry.
    pub async fn load(&self) -> Result<(), ItemError> {
        let ticket = {
            let mut inner = self.write();
            inner.state = RegistryState::Loading;
            self.generation
                .fetch_add(1, Ordering::SeqCst)
                .wrapping_add(1)
        };
        debug!(ticket, "Loading items");

        let result = self.api.list_all().await;

        let mut inner = self.write();
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "Discarding superseded load");
            return result.map(|_| ());
        }
        match result {
            Ok(listing) => {
                inner.items = listing.into_combined();
                inner.state = RegistryState::Ready;
                info!(count = inner.items.len(), "Items loaded");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load items");
                inner.state = RegistryState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn reload(&self) -> Result<(), ItemError> {
        self.load().await
    }

    /// Submit a report and put the created item at the front of the cache.
    ///
    /// Errors are returned unchanged and leave the cache untouched.
    pub async fn add(&self, kind: ItemKind, submission: &Submission) -> Result<Item, ItemError> {
        let disposals = self.disposals.load(Ordering::SeqCst);
        let item = self.api.create(kind, submission).await?;

        let mut inner = self.write();
        if self.disposals.load(Ordering::SeqCst) == disposals {
            inner.items.insert(0, item.clone());
        }
        Ok(item)
    }

    pub async fn add_lost(&self, submission: &Submission) -> Result<Item, ItemError> {
        self.add(ItemKind::Lost, submission).await
    }

    pub async fn add_found(&self, submission: &Submission) -> Result<Item, ItemError> {
        self.add(ItemKind::Found, submission).await
    }

    /// Every cached item, newest first.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.read().items.clone()
    }

    #[must_use]
    pub fn lost_items(&self) -> Vec<Item> {
        self.items_of(ItemKind::Lost)
    }

    #[must_use]
    pub fn found_items(&self) -> Vec<Item> {
        self.items_of(ItemKind::Found)
    }

    /// Run [`search`] over the cached items.
    #[must_use]
    pub fn search(&self, query: &str, category: &str, location: &str) -> Vec<Item> {
        search(&self.read().items, query, category, location)
    }

    #[must_use]
    pub fn state(&self) -> RegistryState {
        self.read().state.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().state == RegistryState::Loading
    }

    /// Drop the cached items and return to [`RegistryState::Uninitialized`].
    pub fn dispose(&self) {
        let mut inner = self.write();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.disposals.fetch_add(1, Ordering::SeqCst);
        inner.items.clear();
        inner.state = RegistryState::Uninitialized;
        debug!("Registry disposed");
    }

    fn items_of(&self, kind: ItemKind) -> Vec<Item> {
        self.read()
            .items
            .iter()
            .filter(|item| item.kind() == kind)
            .cloned()
            .collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
