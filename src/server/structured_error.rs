use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::error_mapping::{ToStructuredError, INVALID_BODY};
use crate::item::ItemError;
use crate::logging::get_log_file_path;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
    pub code: String,
    /// Offending field names (validation) or the broken field (malformed record)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(default, rename = "recordId", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// Daemon log file, when file logging is active
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub logs: String,
}

impl ErrorBody {
    pub fn new(code: &str, message: &str, details: impl Into<String>) -> Self {
        Self {
            error: message.to_string(),
            details: details.into(),
            code: code.to_string(),
            fields: None,
            record_id: None,
            logs: get_log_file_path().to_string(),
        }
    }

    pub fn from_error(err: &ItemError) -> Self {
        let mut body = Self::new(err.error_code(), err.user_message(), err.details());
        match err {
            ItemError::Validation { fields } => body.fields = Some(fields.clone()),
            ItemError::MalformedRecord { id, field, .. } => {
                body.fields = Some(vec![field.clone()]);
                body.record_id = Some(id.clone());
            }
            _ => {}
        }
        body
    }
}

/// Error returned by the route handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        Self {
            status: err.status_code(),
            body: ErrorBody::from_error(&err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody::new(
                INVALID_BODY,
                "Request body is not a valid item form",
                rejection.body_text(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = %self.body.code, details = %self.body.details, "Request failed");
        } else {
            warn!(code = %self.body.code, details = %self.body.details, "Request rejected");
        }
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
#[path = "structured_error_tests.rs"]
mod structured_error_tests;
