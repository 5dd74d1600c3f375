//! Lost and found item reports.
//!
//! Domain types, the submission payload, validation and the mapping to and
//! from stored documents. Nothing here performs I/O.

pub mod dates;
mod error;
pub mod fields;
#[cfg(test)]
pub(crate) mod fixtures;
mod kind;
mod submission;
pub mod transform;
mod types;
mod validate;

pub use error::ItemError;
pub use kind::ItemKind;
pub use submission::Submission;
pub use types::{sort_newest_first, FoundItem, Item, ItemDetails, ItemListing, SUGGESTED_CATEGORIES};
pub use validate::validate_submission;
