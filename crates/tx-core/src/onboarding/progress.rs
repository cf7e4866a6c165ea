//! Profile completion derivation.
//!
//! Always recomputed from the live field list; there is no cached percentage
//! or cursor to fall out of sync with the underlying record.

use super::ProfileField;

/// Percentage of profile fields marked complete, `0..=100`.
///
/// An empty field list counts as fully complete: there is nothing left for
/// the user to do, and screens use 100 to hide the progress card.
pub fn completion(fields: &[ProfileField]) -> u8 {
    if fields.is_empty() {
        return 100;
    }
    let completed = fields.iter().filter(|f| f.completed).count();
    ((completed as f64 / fields.len() as f64) * 100.0).round() as u8
}

/// Incomplete fields in their original seed order. Required fields are not
/// moved ahead of optional ones; screens render the required badge instead.
pub fn incomplete_fields(fields: &[ProfileField]) -> Vec<&ProfileField> {
    fields.iter().filter(|f| !f.completed).collect()
}

/// The first incomplete field in seed order, if any.
pub fn next_incomplete_field(fields: &[ProfileField]) -> Option<&ProfileField> {
    fields.iter().find(|f| !f.completed)
}

/// Whether every `required` field is complete. Optional fields never gate
/// this; it drives the `complete_profile` cascade.
pub fn required_complete(fields: &[ProfileField]) -> bool {
    fields.iter().filter(|f| f.required).all(|f| f.completed)
}
