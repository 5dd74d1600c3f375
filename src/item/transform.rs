//! Mapping between stored documents and [`Item`]s.
//!
//! Pure functions: no I/O, errors are data-shape mismatches only.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use super::dates::{format_event_date, format_timestamp, parse_event_date, parse_timestamp};
use super::error::ItemError;
use super::fields;
use super::kind::ItemKind;
use super::submission::Submission;
use super::types::{FoundItem, Item, ItemDetails};
use crate::store::{StoredRecord, StoredRecordDraft};

/// Build the domain item for a document read from `kind`'s collection.
///
/// Found documents take `local`/`data` from `localEncontrado`/`dataEncontrada`,
/// whatever the stored copies say.
pub fn to_domain(record: &StoredRecord, kind: ItemKind) -> Result<Item, ItemError> {
    let reader = RecordReader { record };

    if record.id.trim().is_empty() {
        return Err(ItemError::malformed(&record.id, fields::ID, "is empty"));
    }
    if let Some(tag) = record.get(fields::KIND) {
        if tag.as_str() != Some(kind.tag()) {
            return Err(ItemError::malformed(
                &record.id,
                fields::KIND,
                format!("is {tag}, expected {}", kind.tag()),
            ));
        }
    }

    let location = reader.required_str(kind.location_field())?;
    let date = reader.required_date(kind.date_field())?;

    let details = ItemDetails {
        id: record.id.clone(),
        name: reader.required_str(fields::NAME)?,
        description: reader.required_str(fields::DESCRIPTION)?,
        category: reader.required_str(fields::CATEGORY)?,
        location: location.clone(),
        date,
        contact_name: reader.optional_str(fields::CONTACT_NAME),
        contact_phone: reader.optional_str(fields::CONTACT_PHONE),
        contact_email: reader.optional_str(fields::CONTACT_EMAIL),
        notes: reader.optional_str(fields::NOTES),
        created_at: reader.required_timestamp(fields::CREATED_AT)?,
    };

    Ok(match kind {
        ItemKind::Lost => Item::Lost(details),
        ItemKind::Found => Item::Found(FoundItem::new(
            details,
            location,
            date,
            reader.required_str(fields::STORED_AT)?,
        )),
    })
}

/// Fields to persist for a validated submission.
///
/// Event dates are normalized to `YYYY-MM-DD`.
/// Found submissions are written under both vocabularies: `local`/`data`
/// copied from `localEncontrado`/`dataEncontrada`, plus the originals.
#[must_use]
pub fn to_storage(submission: &Submission, kind: ItemKind, now: DateTime<Utc>) -> StoredRecordDraft {
    let mut draft = StoredRecordDraft::new();
    draft.set(fields::KIND, kind.tag());
    draft.set(fields::NAME, submission.name.trim());
    draft.set(fields::DESCRIPTION, submission.description.trim());
    draft.set(fields::CATEGORY, submission.category.trim());
    draft.set(fields::LOCATION, submission.location_for(kind).trim());
    draft.set(fields::DATE, normalized_date(submission.date_for(kind)));
    for name in fields::OPTIONAL_COMMON {
        draft.set(name, submission.field(name).unwrap_or_default().trim());
    }
    if kind == ItemKind::Found {
        draft.set(fields::FOUND_LOCATION, submission.found_location.trim());
        draft.set(fields::FOUND_DATE, normalized_date(&submission.found_date));
        draft.set(fields::STORED_AT, submission.stored_at.trim());
    }
    draft.set(fields::CREATED_AT, format_timestamp(now));
    draft
}

/// Event dates are persisted as `YYYY-MM-DD`; unparsable input is kept trimmed.
fn normalized_date(raw: &str) -> String {
    parse_event_date(raw).map_or_else(|| raw.trim().to_string(), format_event_date)
}

struct RecordReader<'a> {
    record: &'a StoredRecord,
}

impl RecordReader<'_> {
    fn required_str(&self, field: &str) -> Result<String, ItemError> {
        match self.record.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(ItemError::malformed(
                &self.record.id,
                field,
                format!("is not a string ({other})"),
            )),
            None => Err(ItemError::malformed(&self.record.id, field, "is missing")),
        }
    }

    /// Absent or null reads as `""`; other scalars are stringified.
    fn optional_str(&self, field: &str) -> String {
        match self.record.get(field) {
            Some(Value::String(s)) => s.clone(),
            None | Some(Value::Null) => String::new(),
            Some(other) => other.to_string(),
        }
    }

    fn required_date(&self, field: &str) -> Result<NaiveDate, ItemError> {
        let raw = self.required_str(field)?;
        parse_event_date(&raw).ok_or_else(|| {
            ItemError::malformed(&self.record.id, field, format!("is not a date ({raw})"))
        })
    }

    fn required_timestamp(&self, field: &str) -> Result<DateTime<Utc>, ItemError> {
        let raw = self.required_str(field)?;
        parse_timestamp(&raw).ok_or_else(|| {
            ItemError::malformed(
                &self.record.id,
                field,
                format!("is not an ISO 8601 timestamp ({raw})"),
            )
        })
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod transform_tests;
