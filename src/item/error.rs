//! Error type shared by the service, the registry and the HTTP client.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Validation error: missing or invalid field(s): {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Malformed record '{id}': field '{field}' {reason}")]
    MalformedRecord {
        id: String,
        field: String,
        reason: String,
    },

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl ItemError {
    /// Create a validation error naming the offending fields
    pub fn validation<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ItemError::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a malformed record error
    pub fn malformed(id: &str, field: &str, reason: impl Into<String>) -> Self {
        ItemError::MalformedRecord {
            id: id.to_string(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<StoreError> for ItemError {
    fn from(err: StoreError) -> Self {
        ItemError::StoreUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = ItemError::validation(["nomeItem", "data"]);
        assert_eq!(
            err.to_string(),
            "Validation error: missing or invalid field(s): nomeItem, data"
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = ItemError::malformed("abc", "criadoEm", "is missing");
        assert_eq!(err.to_string(), "Malformed record 'abc': field 'criadoEm' is missing");
    }

    #[test]
    fn test_store_error_becomes_unavailable() {
        let err: ItemError = StoreError::Unavailable("connection refused".to_string()).into();
        assert!(matches!(err, ItemError::StoreUnavailable(msg) if msg.contains("connection refused")));
    }
}
