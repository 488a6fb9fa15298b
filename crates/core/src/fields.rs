//! Field-name whitelisting.
//!
//! Any field name that is influenced by external input must pass through here before it is
//! interpolated into a storage query or used as a record key.

use crate::constants::{ALLOWED_ACTIVITY_FIELDS, ALLOWED_BABY_FIELDS};
use crate::error::{ValidationError, ValidationResult};
use minik_types::{ActivityField, BabyField};

/// Returns `field` unchanged if it is a member of `allowed_fields`.
///
/// Membership is exact and case-sensitive; the order of `allowed_fields` does not matter.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidFieldName`] (carrying the rejected name) otherwise.
pub fn sanitize_field_name<'a>(field: &'a str, allowed_fields: &[&str]) -> ValidationResult<&'a str> {
    if allowed_fields.contains(&field) {
        return Ok(field);
    }

    tracing::warn!(field_len = field.len(), "rejected field name outside whitelist");
    Err(ValidationError::InvalidFieldName(field.to_owned()))
}

/// Checks `field` against [`ALLOWED_BABY_FIELDS`] and returns the typed field.
pub fn baby_field(field: &str) -> ValidationResult<BabyField> {
    let field = sanitize_field_name(field, ALLOWED_BABY_FIELDS)?;
    BabyField::from_wire(field).ok_or_else(|| ValidationError::InvalidFieldName(field.to_owned()))
}

/// Checks `field` against [`ALLOWED_ACTIVITY_FIELDS`] and returns the typed field.
pub fn activity_field(field: &str) -> ValidationResult<ActivityField> {
    let field = sanitize_field_name(field, ALLOWED_ACTIVITY_FIELDS)?;
    ActivityField::from_wire(field)
        .ok_or_else(|| ValidationError::InvalidFieldName(field.to_owned()))
}
