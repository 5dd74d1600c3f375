use super::dates::parse_event_date;
use super::error::ItemError;
use super::kind::ItemKind;
use super::submission::Submission;

/// Check that a submission carries every field its kind requires.
///
/// Blank (whitespace-only) values count as missing. The event date must be a
/// calendar date. All offending wire field names are reported at once.
pub fn validate_submission(submission: &Submission, kind: ItemKind) -> Result<(), ItemError> {
    let mut offending: Vec<&str> = kind
        .required_fields()
        .into_iter()
        .filter(|name| submission.field(name).is_none_or(|v| v.trim().is_empty()))
        .collect();

    let date_field = kind.date_field();
    let date = submission.date_for(kind);
    if !date.trim().is_empty() && parse_event_date(date).is_none() {
        offending.push(date_field);
    }

    if offending.is_empty() {
        Ok(())
    } else {
        Err(ItemError::validation(offending))
    }
}
