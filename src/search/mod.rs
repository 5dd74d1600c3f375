//! In-memory search over item reports. No I/O.

mod filters;

pub use filters::{SearchFilters, ALL_CATEGORIES, ALL_CATEGORIES_ALIAS};

use crate::item::Item;

/// Items whose name or description contains `query`, whose category equals
/// `category` and whose location contains `location`.
///
/// Text matches ignore case. An empty `query` or `location`, and a `category`
/// of `""`, [`ALL_CATEGORIES`] or [`ALL_CATEGORIES_ALIAS`], match everything.
/// The result keeps input order.
#[must_use]
pub fn search(items: &[Item], query: &str, category: &str, location: &str) -> Vec<Item> {
    SearchFilters::new(query, category, location).apply(items)
}
