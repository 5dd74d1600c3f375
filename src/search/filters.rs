use crate::item::{Item, ItemKind};

/// Category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

/// Accepted in place of [`ALL_CATEGORIES`].
pub const ALL_CATEGORIES_ALIAS: &str = "Todos";

/// Free-text, category, location and kind restrictions over a set of items.
///
/// An empty restriction matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    query: String,
    category: Option<String>,
    location: String,
    kind: Option<ItemKind>,
}

impl SearchFilters {
    #[must_use]
    pub fn new(query: &str, category: &str, location: &str) -> Self {
        let category = (!is_any_category(category)).then(|| category.to_string());
        Self {
            query: query.to_lowercase(),
            category,
            location: location.to_lowercase(),
            kind: None,
        }
    }

    /// Only keep items of `kind`.
    #[must_use]
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn kind(&self) -> Option<ItemKind> {
        self.kind
    }

    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.kind.is_none_or(|kind| item.kind() == kind)
            && self.matches_query(item)
            && self
                .category
                .as_deref()
                .is_none_or(|category| item.category() == category)
            && (self.location.is_empty() || item.location().to_lowercase().contains(&self.location))
    }

    /// Matching items in input order.
    #[must_use]
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }

    fn matches_query(&self, item: &Item) -> bool {
        self.query.is_empty()
            || item.name().to_lowercase().contains(&self.query)
            || item.description().to_lowercase().contains(&self.query)
    }
}

fn is_any_category(category: &str) -> bool {
    category.is_empty() || category == ALL_CATEGORIES || category == ALL_CATEGORIES_ALIAS
}
