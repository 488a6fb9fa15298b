//! # Minik Types
//!
//! Closed domain vocabularies shared by the validator and its front-ends.
//!
//! Everything a baby profile or an activity record may contain that comes from a fixed set
//! lives here:
//! - value enumerations ([`Gender`], [`BloodType`], [`ActivityType`]),
//! - the whitelisted record field names ([`BabyField`], [`ActivityField`]).
//!
//! Each enum knows its wire spelling (the exact string stored and exchanged as JSON) and can
//! be parsed back from it. Parsing is strict: matching is case-sensitive and no whitespace is
//! trimmed.

mod fields;
mod values;

pub use fields::{ActivityField, BabyField};
pub use values::{ActivityType, BloodType, Gender};

/// Error returned when a string is not the wire spelling of any variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: '{value}'")]
pub struct UnknownVariant {
    /// Name of the vocabulary the value was checked against.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
