// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod client;
pub mod common;
pub mod cors;
pub mod http_logging;
pub mod item;
pub mod logging;
pub mod registry;
pub mod search;
pub mod server;
pub mod service;
pub mod store;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use client::HttpItemsClient;
pub use item::{
    FoundItem, Item, ItemDetails, ItemError, ItemKind, ItemListing, Submission,
    SUGGESTED_CATEGORIES,
};
pub use registry::{ItemRegistry, RegistryState};
pub use search::{search, SearchFilters, ALL_CATEGORIES};
pub use server::{router, AppState, ShutdownSignal};
pub use service::{ItemService, ItemsApi, ServiceConfig};
pub use store::{ItemStore, MarkdownStore, MemoryStore, StoreError, StoredRecord, StoredRecordDraft};
