use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::kind::ItemKind;

/// Suggested categories offered by the report forms.
///
/// Advisory only: the service accepts any non-empty category.
pub const SUGGESTED_CATEGORIES: [&str; 10] = [
    "Eletrônicos",
    "Documentos",
    "Roupas e Acessórios",
    "Bolsas e Carteiras",
    "Chaves",
    "Joias",
    "Óculos",
    "Livros",
    "Brinquedos",
    "Outros",
];

/// Fields shared by lost and found reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    /// Store-assigned identifier
    pub id: String,
    #[serde(rename = "nomeItem")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "categoria")]
    pub category: String,
    /// Where the item was lost, or where it was found
    #[serde(rename = "local")]
    pub location: String,
    /// When the item was lost, or when it was found
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "nomeContato", default)]
    pub contact_name: String,
    #[serde(rename = "telefone", default)]
    pub contact_phone: String,
    #[serde(rename = "email", default)]
    pub contact_email: String,
    #[serde(rename = "observacoes", default)]
    pub notes: String,
    #[serde(rename = "criadoEm")]
    pub created_at: DateTime<Utc>,
}

/// A found report. `details.location`/`details.date` always mirror
/// `found_location`/`found_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundItem {
    #[serde(flatten)]
    pub details: ItemDetails,
    #[serde(rename = "localEncontrado")]
    pub found_location: String,
    #[serde(rename = "dataEncontrada")]
    pub found_date: NaiveDate,
    /// Where the finder is holding the item
    #[serde(rename = "localGuardado", default)]
    pub stored_at: String,
}

impl FoundItem {
    /// Build a found item, copying the found location/date into the common fields.
    #[must_use]
    pub fn new(
        mut details: ItemDetails,
        found_location: String,
        found_date: NaiveDate,
        stored_at: String,
    ) -> Self {
        details.location.clone_from(&found_location);
        details.date = found_date;
        Self {
            details,
            found_location,
            found_date,
            stored_at,
        }
    }
}

/// A lost-or-found report, tagged by `tipo` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tipo")]
pub enum Item {
    #[serde(rename = "perdido")]
    Lost(ItemDetails),
    #[serde(rename = "encontrado")]
    Found(FoundItem),
}

impl Item {
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Lost(_) => ItemKind::Lost,
            Item::Found(_) => ItemKind::Found,
        }
    }

    #[must_use]
    pub fn details(&self) -> &ItemDetails {
        match self {
            Item::Lost(details) => details,
            Item::Found(found) => &found.details,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.details().id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.details().name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.details().description
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.details().category
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.details().location
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.details().date
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.details().created_at
    }
}

/// Sort newest first by creation timestamp. Stable, so ties keep their order.
pub fn sort_newest_first(items: &mut [Item]) {
    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

/// Result of listing both collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemListing {
    pub lost: Vec<Item>,
    pub found: Vec<Item>,
}

impl ItemListing {
    /// Merge both sequences into one, newest first.
    #[must_use]
    pub fn into_combined(self) -> Vec<Item> {
        let mut items = self.lost;
        items.extend(self.found);
        sort_newest_first(&mut items);
        items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lost.len().saturating_add(self.found.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lost.is_empty() && self.found.is_empty()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
