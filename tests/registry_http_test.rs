#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]

mod common;

use std::sync::Arc;

use common::{memory_app, spawn_server};
use lost_found_daemon::{
    HttpItemsClient, ItemError, ItemKind, ItemRegistry, ItemsApi, RegistryState, Submission,
};

async fn client_for_fresh_server() -> (Arc<lost_found_daemon::MemoryStore>, HttpItemsClient) {
    let (store, app) = memory_app();
    let addr = spawn_server(app).await;
    (store, HttpItemsClient::new(&format!("http://{addr}")))
}

fn wallet() -> Submission {
    Submission::lost("Wallet", "brown leather", "Bags", "Main Library", "2024-05-01")
        .with_contact("Ana", "11987654321", "ana@example.com")
}

fn glasses() -> Submission {
    Submission::found("Glasses", "Red frame", "Óculos", "Auditorium", "2024-06-02")
        .with_stored_at("Front desk")
}

#[tokio::test]
async fn test_registry_over_http_end_to_end() {
    let (_, client) = client_for_fresh_server().await;
    let registry = ItemRegistry::new(Arc::new(client));

    registry.load().await.unwrap();
    assert_eq!(registry.state(), RegistryState::Ready);
    assert!(registry.items().is_empty());

    let lost = registry.add_lost(&wallet()).await.unwrap();
    let found = registry.add_found(&glasses()).await.unwrap();
    assert_eq!(lost.kind(), ItemKind::Lost);
    assert_eq!(found.location(), "Auditorium");
    assert_eq!(registry.items()[0], found);

    // A fresh load sees the same items the server persisted
    registry.reload().await.unwrap();
    assert_eq!(registry.items().len(), 2);
    assert_eq!(registry.lost_items(), vec![lost]);
    assert_eq!(registry.found_items(), vec![found]);

    let matches = registry.search("wallet", "", "library");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name(), "Wallet");
}

#[tokio::test]
async fn test_validation_error_crosses_the_wire() {
    let (store, client) = client_for_fresh_server().await;
    let registry = ItemRegistry::new(Arc::new(client));

    let mut submission = glasses();
    submission.found_location = String::new();
    let err = registry.add_found(&submission).await.unwrap_err();

    assert_eq!(err, ItemError::validation(["localEncontrado"]));
    assert!(registry.items().is_empty());
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_store_failure_crosses_the_wire() {
    let (store, client) = client_for_fresh_server().await;
    let registry = ItemRegistry::new(Arc::new(client));
    registry.add_lost(&wallet()).await.unwrap();

    store.set_unavailable(true);
    assert!(matches!(
        registry.load().await,
        Err(ItemError::StoreUnavailable(_))
    ));
    assert!(matches!(registry.state(), RegistryState::Failed(_)));
    assert!(matches!(
        registry.add_lost(&wallet()).await,
        Err(ItemError::StoreUnavailable(_))
    ));
    assert_eq!(registry.items().len(), 1);
}

#[tokio::test]
async fn test_client_lists_one_kind() {
    let (_, client) = client_for_fresh_server().await;
    client.create(ItemKind::Lost, &wallet()).await.unwrap();
    client.create(ItemKind::Found, &glasses()).await.unwrap();

    let found = client.list(ItemKind::Found).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind(), ItemKind::Found);

    let listing = client.list_all().await.unwrap();
    assert_eq!(listing.len(), 2);
}
