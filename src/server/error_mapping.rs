use http::StatusCode;

use super::structured_error::ErrorBody;
use crate::item::ItemError;

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const MALFORMED_RECORD: &str = "MALFORMED_RECORD";
pub const TIMEOUT: &str = "TIMEOUT";
pub const CANCELLED: &str = "CANCELLED";
pub const INVALID_BODY: &str = "INVALID_BODY";

/// Mapping of a domain error onto the HTTP error contract.
pub trait ToStructuredError {
    /// Stable machine-readable code
    fn error_code(&self) -> &'static str;

    fn status_code(&self) -> StatusCode;

    /// Message safe to show to end users
    fn user_message(&self) -> &'static str;

    /// Technical detail for the `details` field
    fn details(&self) -> String;
}

impl ToStructuredError for ItemError {
    fn error_code(&self) -> &'static str {
        match self {
            ItemError::Validation { .. } => VALIDATION_ERROR,
            ItemError::StoreUnavailable(_) => STORE_UNAVAILABLE,
            ItemError::MalformedRecord { .. } => MALFORMED_RECORD,
            ItemError::Timeout(_) => TIMEOUT,
            ItemError::Cancelled => CANCELLED,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ItemError::Validation { .. } => StatusCode::BAD_REQUEST,
            ItemError::StoreUnavailable(_) | ItemError::MalformedRecord { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ItemError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ItemError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn user_message(&self) -> &'static str {
        match self {
            ItemError::Validation { .. } => "Missing or invalid required fields",
            ItemError::StoreUnavailable(_) | ItemError::MalformedRecord { .. } => {
                "Internal server error"
            }
            ItemError::Timeout(_) => "The request took too long, try again",
            ItemError::Cancelled => "The server is shutting down",
        }
    }

    fn details(&self) -> String {
        match self {
            ItemError::StoreUnavailable(msg) | ItemError::Timeout(msg) => msg.clone(),
            ItemError::MalformedRecord { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// Rebuild the domain error carried by an error response.
///
/// Unknown codes become [`ItemError::StoreUnavailable`] with the HTTP status
/// in the message.
#[must_use]
pub fn item_error_from_body(status: StatusCode, body: ErrorBody) -> ItemError {
    let ErrorBody {
        details,
        code,
        fields,
        record_id,
        ..
    } = body;
    match code.as_str() {
        VALIDATION_ERROR => ItemError::Validation {
            fields: fields.unwrap_or_default(),
        },
        STORE_UNAVAILABLE => ItemError::StoreUnavailable(details),
        MALFORMED_RECORD => ItemError::MalformedRecord {
            id: record_id.unwrap_or_default(),
            field: fields
                .and_then(|f| f.into_iter().next())
                .unwrap_or_default(),
            reason: details,
        },
        TIMEOUT => ItemError::Timeout(details),
        CANCELLED => ItemError::Cancelled,
        _ => ItemError::StoreUnavailable(format!("HTTP {status}: {details}")),
    }
}
