//! Common test utilities

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::response::Response;
use axum::Router;
use lost_found_daemon::{router, AppState, ItemService, ItemStore, MemoryStore, ServiceConfig};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Create a temporary directory for testing
#[allow(dead_code)]
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Router over `store` with the default service configuration
#[allow(dead_code)]
pub fn app_over(store: Arc<dyn ItemStore>) -> Router {
    app_with_timeout(store, ServiceConfig::default().store_timeout)
}

/// Router over `store` with a custom store timeout
#[allow(dead_code)]
pub fn app_with_timeout(store: Arc<dyn ItemStore>, timeout: Duration) -> Router {
    let service = ItemService::new(store, ServiceConfig::default().with_store_timeout(timeout));
    router(AppState::new(service))
}

/// Router over a fresh in-memory store
#[allow(dead_code)]
pub fn memory_app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    let app = app_over(store.clone());
    (store, app)
}

/// Serve `app` on an ephemeral loopback port
#[allow(dead_code)]
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });
    addr
}

/// Read a response body as JSON
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

/// A complete lost-item form
#[allow(dead_code)]
pub fn lost_form(name: &str) -> Value {
    json!({
        "nomeItem": name,
        "descricao": "Couro marrom, com documentos",
        "categoria": "Bolsas e Carteiras",
        "local": "Biblioteca central",
        "data": "2024-05-01",
        "nomeContato": "Ana",
        "telefone": "11987654321",
        "email": "ana@example.com",
        "observacoes": ""
    })
}

/// A complete found-item form
#[allow(dead_code)]
pub fn found_form(name: &str) -> Value {
    json!({
        "nomeItem": name,
        "descricao": "Armação vermelha",
        "categoria": "Óculos",
        "localEncontrado": "Auditório",
        "dataEncontrada": "2024-06-02",
        "localGuardado": "Secretaria",
        "nomeContato": "Rui",
        "telefone": "",
        "email": "",
        "observacoes": "Estava embaixo da cadeira"
    })
}
