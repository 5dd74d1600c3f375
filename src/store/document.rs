use serde_json::{Map, Value};

/// Fields to persist for a new document; the store adds the identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredRecordDraft {
    pub fields: Map<String, Value>,
}

impl StoredRecordDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a string field, replacing any previous value.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.fields
            .insert(field.to_string(), Value::String(value.into()));
    }

    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }
}

/// A document read back from a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    /// Store-assigned identifier
    pub id: String,
    pub fields: Map<String, Value>,
}

impl StoredRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Attach an identifier to a draft.
    #[must_use]
    pub fn from_draft(id: impl Into<String>, draft: StoredRecordDraft) -> Self {
        Self::new(id, draft.fields)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }
}
