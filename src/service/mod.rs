//! Retrieval and submission of item reports against an [`ItemStore`].
//!
//! Every store call is bounded by [`ServiceConfig::store_timeout`] and is
//! abandoned once the daemon's shutdown signal fires.

mod api;
mod config;

pub use api::ItemsApi;
pub use config::{ServiceConfig, DEFAULT_STORE_TIMEOUT};

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::item::transform::{to_domain, to_storage};
use crate::item::{
    sort_newest_first, validate_submission, Item, ItemError, ItemKind, ItemListing, Submission,
};
use crate::server::ShutdownSignal;
use crate::store::{ItemStore, StoreError};

pub struct ItemService {
    store: Arc<dyn ItemStore>,
    config: ServiceConfig,
    shutdown_rx: Option<watch::Receiver<ShutdownSignal>>,
}

impl ItemService {
    #[must_use]
    pub fn new(store: Arc<dyn ItemStore>, config: ServiceConfig) -> Self {
        Self {
            store,
            config,
            shutdown_rx: None,
        }
    }

    /// Abandon in-flight store calls with [`ItemError::Cancelled`] once
    /// `shutdown_rx` leaves [`ShutdownSignal::None`].
    #[must_use]
    pub fn with_shutdown(mut self, shutdown_rx: watch::Receiver<ShutdownSignal>) -> Self {
        self.shutdown_rx = Some(shutdown_rx);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// All items of one kind, newest first. Malformed documents are skipped.
    pub async fn list(&self, kind: ItemKind) -> Result<Vec<Item>, ItemError> {
        let records = self
            .guarded("find_all", self.store.find_all(kind.collection()))
            .await?;

        let mut items = Vec::with_capacity(records.len());
        for record in &records {
            match to_domain(record, kind) {
                Ok(item) => items.push(item),
                Err(e) => warn!(
                    collection = kind.collection(),
                    id = %record.id,
                    error = %e,
                    "Skipping malformed document"
                ),
            }
        }
        sort_newest_first(&mut items);
        debug!(kind = %kind, count = items.len(), "Listed items");
        Ok(items)
    }

    pub async fn list_lost(&self) -> Result<Vec<Item>, ItemError> {
        self.list(ItemKind::Lost).await
    }

    pub async fn list_found(&self) -> Result<Vec<Item>, ItemError> {
        self.list(ItemKind::Found).await
    }

    /// Both collections, fetched concurrently.
    pub async fn list_all(&self) -> Result<ItemListing, ItemError> {
        let (lost, found) = tokio::try_join!(self.list_lost(), self.list_found())?;
        Ok(ItemListing { lost, found })
    }

    /// Validate and persist a report. Nothing reaches the store when
    /// validation fails.
    pub async fn create(&self, kind: ItemKind, submission: &Submission) -> Result<Item, ItemError> {
        validate_submission(submission, kind)?;

        let draft = to_storage(submission, kind, Utc::now());
        let record = self
            .guarded("insert", self.store.insert(kind.collection(), draft))
            .await?;
        let item = to_domain(&record, kind)?;

        info!(kind = %kind, id = %item.id(), "Created item");
        Ok(item)
    }

    pub async fn create_lost(&self, submission: &Submission) -> Result<Item, ItemError> {
        self.create(ItemKind::Lost, submission).await
    }

    pub async fn create_found(&self, submission: &Submission) -> Result<Item, ItemError> {
        self.create(ItemKind::Found, submission).await
    }

    async fn guarded<T, F>(&self, operation: &'static str, call: F) -> Result<T, ItemError>
    where
        F: Future<Output = Result<T, StoreError>> + Send,
    {
        let timeout = self.config.store_timeout;
        let bounded = async {
            match tokio::time::timeout(timeout, call).await {
                Ok(result) => result.map_err(ItemError::from),
                Err(_) => {
                    warn!(operation, timeout = ?timeout, "Store call timed out");
                    Err(ItemError::Timeout(format!(
                        "store {operation} exceeded {timeout:?}"
                    )))
                }
            }
        };

        let Some(shutdown_rx) = self.shutdown_rx.clone() else {
            return bounded.await;
        };

        tokio::select! {
            result = bounded => result,
            () = wait_for_shutdown(shutdown_rx) => {
                debug!(operation, "Store call abandoned on shutdown");
                Err(ItemError::Cancelled)
            }
        }
    }
}

/// Resolves once a shutdown or restart has been signalled. Never resolves if
/// the sender goes away without signalling.
async fn wait_for_shutdown(mut shutdown_rx: watch::Receiver<ShutdownSignal>) {
    loop {
        if *shutdown_rx.borrow_and_update() != ShutdownSignal::None {
            return;
        }
        if shutdown_rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
