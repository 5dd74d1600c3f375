//! [`ItemsApi`] over the daemon's HTTP binding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::item::{Item, ItemError, ItemKind, ItemListing, Submission};
use crate::server::error_mapping::item_error_from_body;
use crate::server::items_path;
use crate::server::structured_error::ErrorBody;
use crate::service::ItemsApi;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3001";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct HttpItemsClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpItemsClient {
    /// `base_url` is the daemon root, e.g. `http://127.0.0.1:3001`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Items of one kind, newest first.
    pub async fn list(&self, kind: ItemKind) -> Result<Vec<Item>, ItemError> {
        let url = self.url(&items_path(kind));
        debug!(url = %url, "Listing items");
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl ItemsApi for HttpItemsClient {
    async fn list_all(&self) -> Result<ItemListing, ItemError> {
        let url = self.url("/items");
        debug!(url = %url, "Listing all items");
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        decode(response).await
    }

    async fn create(&self, kind: ItemKind, submission: &Submission) -> Result<Item, ItemError> {
        let url = self.url(&items_path(kind));
        debug!(url = %url, "Submitting item");
        let response = self
            .http
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ItemError> {
    let status = response.status();
    if status.is_success() {
        return response.json().await.map_err(transport_error);
    }

    let text = response.text().await.map_err(transport_error)?;
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => Err(item_error_from_body(status, body)),
        Err(_) => Err(unexpected_status(status, &text)),
    }
}

fn unexpected_status(status: StatusCode, text: &str) -> ItemError {
    ItemError::StoreUnavailable(format!("HTTP {status}: {}", text.trim()))
}

fn transport_error(err: reqwest::Error) -> ItemError {
    if err.is_timeout() {
        ItemError::Timeout(err.to_string())
    } else {
        ItemError::StoreUnavailable(err.to_string())
    }
}
