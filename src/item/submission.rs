use serde::{Deserialize, Serialize};

use super::fields;
use super::kind::ItemKind;

/// Form payload for both report kinds.
///
/// Lost forms fill `local`/`data`; found forms fill `localEncontrado`,
/// `dataEncontrada` and `localGuardado`. Which of them matter is decided by
/// [`ItemKind`], so one shape serves both endpoints. Missing fields default
/// to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "nomeItem", default)]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "local", default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(rename = "data", default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(
        rename = "localEncontrado",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub found_location: String,
    #[serde(
        rename = "dataEncontrada",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub found_date: String,
    #[serde(
        rename = "localGuardado",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub stored_at: String,
    #[serde(rename = "nomeContato", default)]
    pub contact_name: String,
    #[serde(rename = "telefone", default)]
    pub contact_phone: String,
    #[serde(rename = "email", default)]
    pub contact_email: String,
    #[serde(rename = "observacoes", default)]
    pub notes: String,
}

impl Submission {
    /// Start a lost-item submission with its mandatory fields.
    #[must_use]
    pub fn lost(name: &str, description: &str, category: &str, location: &str, date: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            location: location.to_string(),
            date: date.to_string(),
            ..Self::default()
        }
    }

    /// Start a found-item submission with its mandatory fields.
    #[must_use]
    pub fn found(
        name: &str,
        description: &str,
        category: &str,
        found_location: &str,
        found_date: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            found_location: found_location.to_string(),
            found_date: found_date.to_string(),
            ..Self::default()
        }
    }

    /// Set the contact details.
    #[must_use]
    pub fn with_contact(mut self, name: &str, phone: &str, email: &str) -> Self {
        self.contact_name = name.to_string();
        self.contact_phone = phone.to_string();
        self.contact_email = email.to_string();
        self
    }

    /// Set the free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    /// Set where a found item is being held.
    #[must_use]
    pub fn with_stored_at(mut self, stored_at: &str) -> Self {
        self.stored_at = stored_at.to_string();
        self
    }

    /// Look a field up by its wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            fields::NAME => &self.name,
            fields::DESCRIPTION => &self.description,
            fields::CATEGORY => &self.category,
            fields::LOCATION => &self.location,
            fields::DATE => &self.date,
            fields::FOUND_LOCATION => &self.found_location,
            fields::FOUND_DATE => &self.found_date,
            fields::STORED_AT => &self.stored_at,
            fields::CONTACT_NAME => &self.contact_name,
            fields::CONTACT_PHONE => &self.contact_phone,
            fields::CONTACT_EMAIL => &self.contact_email,
            fields::NOTES => &self.notes,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Location as seen by `kind` (`local` or `localEncontrado`).
    #[must_use]
    pub fn location_for(&self, kind: ItemKind) -> &str {
        self.field(kind.location_field()).unwrap_or_default()
    }

    /// Event date as seen by `kind` (`data` or `dataEncontrada`).
    #[must_use]
    pub fn date_for(&self, kind: ItemKind) -> &str {
        self.field(kind.date_field()).unwrap_or_default()
    }
}
