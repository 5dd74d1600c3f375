//! File-based store: one directory per collection, one Markdown file per document.
//!
//! Every field lives in the YAML frontmatter. The item name is repeated as the
//! H1 heading and the description as the body so the files read naturally;
//! when a hand-written file lacks those frontmatter keys they are taken from
//! the heading and body instead.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, warn};

use super::document::{StoredRecord, StoredRecordDraft};
use super::error::StoreError;
use super::{new_document_id, ItemStore};
use crate::common::frontmatter::{generate_frontmatter, parse_frontmatter_raw, FrontmatterError};
use crate::item::fields;
use crate::utils::{atomic_write, collection_path, TEMP_FILE_PREFIX};

const DOCUMENT_EXTENSION: &str = "md";

#[derive(Debug, Clone)]
pub struct MarkdownStore {
    root: PathBuf,
}

impl MarkdownStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the collection directories up front.
    pub async fn init(&self, collections: &[&str]) -> Result<(), StoreError> {
        for collection in collections {
            fs::create_dir_all(self.collection_dir(collection)?).await?;
        }
        Ok(())
    }

    /// Path of a document file.
    pub fn document_path(&self, collection: &str, id: &str) -> Result<PathBuf, StoreError> {
        Ok(self
            .collection_dir(collection)?
            .join(format!("{id}.{DOCUMENT_EXTENSION}")))
    }

    fn collection_dir(&self, collection: &str) -> Result<PathBuf, StoreError> {
        let valid = !collection.is_empty()
            && collection
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidCollection(collection.to_string()));
        }
        Ok(collection_path(&self.root, collection))
    }
}

#[async_trait]
impl ItemStore for MarkdownStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<StoredRecord>, StoreError> {
        let dir = self.collection_dir(collection)?;
        if !fs::try_exists(&dir).await? {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if is_document_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(id) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };
            let content = match fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) => {
                    warn!(
                        collection = %collection,
                        path = %path.display(),
                        error = %e,
                        "Skipping document that could not be read"
                    );
                    continue;
                }
            };
            match decode_document(&id, &content) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        collection = %collection,
                        path = %path.display(),
                        error = %e,
                        "Skipping unreadable document"
                    );
                }
            }
        }
        debug!(collection = %collection, count = records.len(), "Read collection");
        Ok(records)
    }

    async fn insert(
        &self,
        collection: &str,
        draft: StoredRecordDraft,
    ) -> Result<StoredRecord, StoreError> {
        let dir = self.collection_dir(collection)?;
        fs::create_dir_all(&dir).await?;

        let id = new_document_id();
        let path = self.document_path(collection, &id)?;
        let content = encode_document(&draft.fields)?;
        atomic_write(&path, &content).await?;

        debug!(collection = %collection, id = %id, "Inserted document");
        Ok(StoredRecord::from_draft(id, draft))
    }
}

fn is_document_file(path: &Path) -> bool {
    let is_markdown = path
        .extension()
        .is_some_and(|ext| ext == DOCUMENT_EXTENSION);
    let is_temp = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(TEMP_FILE_PREFIX));
    is_markdown && !is_temp
}

fn encode_document(fields_map: &Map<String, Value>) -> Result<String, StoreError> {
    let title = fields_map
        .get(fields::NAME)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .replace('\n', " ");
    let body = fields_map
        .get(fields::DESCRIPTION)
        .and_then(Value::as_str)
        .unwrap_or_default();
    generate_frontmatter(fields_map, &title, body).map_err(StoreError::from)
}

fn decode_document(id: &str, content: &str) -> Result<StoredRecord, StoreError> {
    let (value, title, body) = parse_frontmatter_raw(content)?;
    let mut fields_map = match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Null) => Map::new(),
        Ok(_) => {
            return Err(FrontmatterError::InvalidFormat(
                "frontmatter must be a mapping".to_string(),
            )
            .into())
        }
        Err(e) => return Err(FrontmatterError::InvalidFormat(e.to_string()).into()),
    };

    if !title.is_empty() && !fields_map.contains_key(fields::NAME) {
        fields_map.insert(fields::NAME.to_string(), Value::String(title));
    }
    if !fields_map.contains_key(fields::DESCRIPTION) {
        fields_map.insert(fields::DESCRIPTION.to_string(), Value::String(body));
    }
    Ok(StoredRecord::new(id, fields_map))
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod markdown_tests;
