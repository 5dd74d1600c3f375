use thiserror::Error;

use crate::common::frontmatter::FrontmatterError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),

    #[error("Invalid collection name: {0}")]
    InvalidCollection(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
