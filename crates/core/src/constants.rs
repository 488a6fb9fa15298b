//! Constants used throughout the Minik core crate.
//!
//! Field whitelists and value bounds live here so that the validators, the composite
//! sanitizers and the front-ends all agree on them.

/// Field names a baby profile record may carry.
pub const ALLOWED_BABY_FIELDS: &[&str] = &[
    "name",
    "birthDate",
    "gender",
    "weight",
    "height",
    "bloodType",
    "photo",
];

/// Field names an activity record may carry.
pub const ALLOWED_ACTIVITY_FIELDS: &[&str] = &[
    "type",
    "startTime",
    "endTime",
    "duration",
    "notes",
    "babyId",
];

/// Default character limit applied by the string sanitizer.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 255;

/// Default character limit for activity notes.
pub const DEFAULT_MAX_NOTES_LENGTH: usize = 1000;

/// Inclusive bounds on the trimmed length of a baby name.
pub const BABY_NAME_MIN_LENGTH: usize = 2;
pub const BABY_NAME_MAX_LENGTH: usize = 50;

/// Weight bounds in kilograms (exclusive minimum, inclusive maximum).
pub const MIN_WEIGHT_KG: f64 = 0.09;
pub const MAX_WEIGHT_KG: f64 = 200.0;

/// Height bounds in centimetres (exclusive minimum, inclusive maximum).
pub const MIN_HEIGHT_CM: f64 = 10.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Longest loggable activity, in seconds (one day).
pub const MAX_ACTIVITY_DURATION_SECS: f64 = 86_400.0;

/// Environment variable overriding [`DEFAULT_MAX_STRING_LENGTH`].
pub const MAX_STRING_LENGTH_ENV: &str = "MINIK_MAX_STRING_LENGTH";

/// Environment variable overriding [`DEFAULT_MAX_NOTES_LENGTH`].
pub const MAX_NOTES_LENGTH_ENV: &str = "MINIK_MAX_NOTES_LENGTH";
