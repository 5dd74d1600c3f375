//! Item builders for unit tests.

use chrono::NaiveDate;

use super::dates::parse_timestamp;
use super::types::{FoundItem, Item, ItemDetails};

pub(crate) fn details(id: &str, name: &str, description: &str, category: &str, location: &str) -> ItemDetails {
    ItemDetails {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        contact_name: String::new(),
        contact_phone: String::new(),
        contact_email: String::new(),
        notes: String::new(),
        created_at: parse_timestamp("2024-05-02T10:00:00Z").unwrap(),
    }
}

pub(crate) fn lost(id: &str, name: &str, description: &str, category: &str, location: &str) -> Item {
    Item::Lost(details(id, name, description, category, location))
}

pub(crate) fn found(id: &str, name: &str, description: &str, category: &str, location: &str) -> Item {
    let details = details(id, name, description, category, location);
    let date = details.date;
    Item::Found(FoundItem::new(
        details,
        location.to_string(),
        date,
        "Secretaria".to_string(),
    ))
}

/// Same item with a different creation timestamp.
pub(crate) fn created_at(mut item: Item, timestamp: &str) -> Item {
    let ts = parse_timestamp(timestamp).unwrap();
    match &mut item {
        Item::Lost(details) => details.created_at = ts,
        Item::Found(found) => found.details.created_at = ts,
    }
    item
}
