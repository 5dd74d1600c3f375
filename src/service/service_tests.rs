use super::*;
use std::time::Duration;

use serde_json::json;

use crate::store::{MemoryStore, StoredRecord};

fn service_over(store: &Arc<MemoryStore>) -> ItemService {
    ItemService::new(store.clone(), ServiceConfig::default())
}

fn wallet() -> Submission {
    Submission::lost("Carteira", "Couro marrom", "Bolsas e Carteiras", "Cantina", "2024-05-01")
}

fn umbrella() -> Submission {
    Submission::found("Guarda-chuva", "Preto", "Outros", "Portaria", "2024-05-03")
        .with_stored_at("Achados e perdidos")
}

fn seeded_lost(id: &str, name: &str, created_at: &str) -> StoredRecord {
    let fields = json!({
        "tipo": "perdido",
        "nomeItem": name,
        "descricao": "-",
        "categoria": "Outros",
        "local": "Pátio",
        "data": "2024-01-01",
        "criadoEm": created_at
    });
    match fields {
        serde_json::Value::Object(map) => StoredRecord::new(id, map),
        other => panic!("expected an object, got {other}"),
    }
}

#[tokio::test]
async fn test_create_lost_assigns_identity() {
    let store = Arc::new(MemoryStore::new());
    let service = service_over(&store);

    let first = service.create_lost(&wallet()).await.unwrap();
    let second = service.create_lost(&wallet()).await.unwrap();

    assert_eq!(first.kind(), ItemKind::Lost);
    assert!(!first.id().is_empty());
    assert_ne!(first.id(), second.id());
    assert_eq!(first.name(), "Carteira");
    assert_eq!(store.write_count(), 2);
}

#[tokio::test]
async fn test_create_found_copies_found_fields() {
    let store = Arc::new(MemoryStore::new());
    let service = service_over(&store);

    let item = service.create_found(&umbrella()).await.unwrap();
    let Item::Found(found) = item else {
        panic!("expected a found item");
    };
    assert_eq!(found.details.location, found.found_location);
    assert_eq!(found.details.date, found.found_date);
    assert_eq!(found.stored_at, "Achados e perdidos");
    assert_eq!(store.len(ItemKind::Found.collection()), 1);
    assert_eq!(store.len(ItemKind::Lost.collection()), 0);
}

#[tokio::test]
async fn test_validation_failure_never_writes() {
    let store = Arc::new(MemoryStore::new());
    let service = service_over(&store);

    let mut submission = wallet();
    submission.name = String::new();
    let err = service.create_lost(&submission).await.unwrap_err();

    assert_eq!(err, ItemError::validation(["nomeItem"]));
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_store_failure_is_unavailable() {
    let store = Arc::new(MemoryStore::new());
    store.set_unavailable(true);
    let service = service_over(&store);

    assert!(matches!(
        service.create_lost(&wallet()).await,
        Err(ItemError::StoreUnavailable(_))
    ));
    assert!(matches!(
        service.list_all().await,
        Err(ItemError::StoreUnavailable(_))
    ));
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let store = Arc::new(MemoryStore::new());
    let collection = ItemKind::Lost.collection();
    store.seed(collection, seeded_lost("a", "T1", "2024-01-01T00:00:00.000Z"));
    store.seed(collection, seeded_lost("c", "T3", "2024-03-01T00:00:00.000Z"));
    store.seed(collection, seeded_lost("b", "T2", "2024-02-01T00:00:00.000Z"));
    let service = service_over(&store);

    let names: Vec<String> = service
        .list_lost()
        .await
        .unwrap()
        .iter()
        .map(|i| i.name().to_string())
        .collect();
    assert_eq!(names, vec!["T3", "T2", "T1"]);
}

#[tokio::test]
async fn test_malformed_documents_are_skipped() {
    let store = Arc::new(MemoryStore::new());
    let collection = ItemKind::Lost.collection();
    store.seed(collection, seeded_lost("ok", "Boa", "2024-01-01T00:00:00.000Z"));
    store.seed(collection, seeded_lost("bad", "Ruim", "not a timestamp"));
    let service = service_over(&store);

    let items = service.list_lost().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), "ok");
}

#[tokio::test]
async fn test_list_all_keeps_kinds_apart() {
    let store = Arc::new(MemoryStore::new());
    let service = service_over(&store);
    service.create_lost(&wallet()).await.unwrap();
    service.create_found(&umbrella()).await.unwrap();
    service.create_found(&umbrella()).await.unwrap();

    let listing = service.list_all().await.unwrap();
    assert_eq!(listing.lost.len(), 1);
    assert_eq!(listing.found.len(), 2);
    assert!(listing.lost.iter().all(|i| i.kind() == ItemKind::Lost));
    assert!(listing.found.iter().all(|i| i.kind() == ItemKind::Found));
}

#[tokio::test]
async fn test_slow_store_times_out() {
    let store = Arc::new(MemoryStore::new().with_latency(Duration::from_millis(500)));
    let service = ItemService::new(
        store.clone(),
        ServiceConfig::default().with_store_timeout(Duration::from_millis(20)),
    );

    assert!(matches!(
        service.list_lost().await,
        Err(ItemError::Timeout(_))
    ));
}

#[tokio::test]
async fn test_shutdown_cancels_store_calls() {
    let store = Arc::new(MemoryStore::new().with_latency(Duration::from_secs(5)));
    let (shutdown_tx, shutdown_rx) = watch::channel(ShutdownSignal::None);
    let service = service_over(&store).with_shutdown(shutdown_rx);

    let pending = tokio::spawn(async move { service.create_lost(&wallet()).await });
    tokio::time::sleep(Duration::from_millis(20)).await;
    shutdown_tx.send(ShutdownSignal::Shutdown).unwrap();

    assert_eq!(pending.await.unwrap(), Err(ItemError::Cancelled));
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_dropped_shutdown_sender_does_not_cancel() {
    let store = Arc::new(MemoryStore::new());
    let (shutdown_tx, shutdown_rx) = watch::channel(ShutdownSignal::None);
    drop(shutdown_tx);
    let service = service_over(&store).with_shutdown(shutdown_rx);

    assert!(service.create_lost(&wallet()).await.is_ok());
}

#[tokio::test]
async fn test_items_api_delegates_to_service() {
    let store = Arc::new(MemoryStore::new());
    let api: Arc<dyn ItemsApi> = Arc::new(service_over(&store));

    let item = api.create(ItemKind::Found, &umbrella()).await.unwrap();
    let listing = api.list_all().await.unwrap();
    assert_eq!(listing.found, vec![item]);
}
