use async_trait::async_trait;

use super::ItemService;
use crate::item::{Item, ItemError, ItemKind, ItemListing, Submission};

/// Operations the registry needs from whoever owns the items.
///
/// Implemented in-process by [`ItemService`] and over HTTP by
/// [`crate::client::HttpItemsClient`].
#[async_trait]
pub trait ItemsApi: Send + Sync {
    async fn list_all(&self) -> Result<ItemListing, ItemError>;

    async fn create(&self, kind: ItemKind, submission: &Submission) -> Result<Item, ItemError>;
}

#[async_trait]
impl ItemsApi for ItemService {
    async fn list_all(&self) -> Result<ItemListing, ItemError> {
        ItemService::list_all(self).await
    }

    async fn create(&self, kind: ItemKind, submission: &Submission) -> Result<Item, ItemError> {
        ItemService::create(self, kind, submission).await
    }
}
