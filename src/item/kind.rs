use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fields;

/// The two report variants. Serialized as the `tipo` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    #[serde(rename = "perdido")]
    Lost,
    #[serde(rename = "encontrado")]
    Found,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Lost, ItemKind::Found];

    /// Value of the `tipo` tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            ItemKind::Lost => "perdido",
            ItemKind::Found => "encontrado",
        }
    }

    /// Store collection holding documents of this kind.
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            ItemKind::Lost => "itens_perdidos",
            ItemKind::Found => "itens_encontrados",
        }
    }

    /// Submission field that feeds the common `local` field.
    #[must_use]
    pub fn location_field(self) -> &'static str {
        match self {
            ItemKind::Lost => fields::LOCATION,
            ItemKind::Found => fields::FOUND_LOCATION,
        }
    }

    /// Submission field that feeds the common `data` field.
    #[must_use]
    pub fn date_field(self) -> &'static str {
        match self {
            ItemKind::Lost => fields::DATE,
            ItemKind::Found => fields::FOUND_DATE,
        }
    }

    /// Fields a submission of this kind must carry, in form order.
    #[must_use]
    pub fn required_fields(self) -> [&'static str; 5] {
        [
            fields::NAME,
            fields::DESCRIPTION,
            fields::CATEGORY,
            self.location_field(),
            self.date_field(),
        ]
    }

    /// Path segment used by the HTTP binding (`/items/<segment>`).
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lost" | "perdido" | "perdidos" => Ok(ItemKind::Lost),
            "found" | "encontrado" | "encontrados" => Ok(ItemKind::Found),
            other => Err(format!("unknown item kind '{other}' (expected lost or found)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrips_through_serde() {
        let json = serde_json::to_string(&ItemKind::Found).unwrap();
        assert_eq!(json, "\"encontrado\"");
        let kind: ItemKind = serde_json::from_str("\"perdido\"").unwrap();
        assert_eq!(kind, ItemKind::Lost);
    }

    #[test]
    fn test_found_fields_map_to_found_names() {
        assert_eq!(ItemKind::Found.location_field(), "localEncontrado");
        assert_eq!(ItemKind::Found.date_field(), "dataEncontrada");
        assert_eq!(
            ItemKind::Lost.required_fields(),
            ["nomeItem", "descricao", "categoria", "local", "data"]
        );
    }

    #[test]
    fn test_collections_are_distinct() {
        assert_ne!(ItemKind::Lost.collection(), ItemKind::Found.collection());
    }

    #[test]
    fn test_from_str_accepts_both_vocabularies() {
        assert_eq!("lost".parse::<ItemKind>().unwrap(), ItemKind::Lost);
        assert_eq!("Encontrado".parse::<ItemKind>().unwrap(), ItemKind::Found);
        assert!("stolen".parse::<ItemKind>().is_err());
    }
}
