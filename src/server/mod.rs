//! HTTP/JSON binding of [`ItemService`].
//!
//! | Route          | GET                  | POST          |
//! |----------------|----------------------|---------------|
//! | `/items`       | `{lost, found}`      |               |
//! | `/items/lost`  | lost items           | create (201)  |
//! | `/items/found` | found items          | create (201)  |
//! | `/health`      | status and version   |               |

pub mod error_mapping;
mod routes;
pub mod structured_error;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::item::ItemKind;
use crate::service::ItemService;

pub use routes::HealthResponse;

/// Signal type for daemon shutdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutdownSignal {
    None,
    Shutdown,
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ItemService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: ItemService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Path serving the items of one kind.
#[must_use]
pub fn items_path(kind: ItemKind) -> String {
    format!("/items/{}", kind.path_segment())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/items", get(routes::list_all))
        .route(
            &items_path(ItemKind::Lost),
            get(routes::list_lost).post(routes::create_lost),
        )
        .route(
            &items_path(ItemKind::Found),
            get(routes::list_found).post(routes::create_found),
        )
        .with_state(state)
}
