//! Parsing and formatting of event dates and creation timestamps.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Format used by the report forms for event dates.
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an event date.
///
/// Accepts a plain calendar date (`2024-05-01`) or a full RFC 3339 timestamp,
/// in which case only its date part is kept.
#[must_use]
pub fn parse_event_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, EVENT_DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Parse a creation timestamp (RFC 3339 / ISO 8601).
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a creation timestamp the way it is persisted (millisecond precision, `Z` suffix).
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format an event date as persisted.
#[must_use]
pub fn format_event_date(date: NaiveDate) -> String {
    date.format(EVENT_DATE_FORMAT).to_string()
}
