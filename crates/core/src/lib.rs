//! # Minik Core
//!
//! Input validation and sanitization for every write to Minik's local storage.
//!
//! This crate contains pure, synchronous checks:
//! - field-name whitelisting before a name is used as a storage key or query column,
//! - free-text sanitization (tag and markup-character stripping, length limits),
//! - domain validators (names, dates, weights, heights, enumerations, notes, identifiers),
//! - composite sanitizers for baby profiles and activities.
//!
//! **No storage or presentation concerns**: the persistence layer performs the write and the
//! front-ends (`minik-cli`, `api-rest`) decide how to show a [`ValidationError`] to the user.

pub mod activity;
pub mod config;
pub mod constants;
pub mod dates;
pub mod error;
pub mod fields;
pub mod profile;
pub mod sanitize;
pub mod validation;

pub use activity::{ActivityCandidate, SanitizedActivity};
pub use config::ValidatorConfig;
pub use constants::{ALLOWED_ACTIVITY_FIELDS, ALLOWED_BABY_FIELDS, DEFAULT_MAX_STRING_LENGTH};
pub use error::{ConfigError, ErrorKind, ValidationError, ValidationResult};
pub use fields::{activity_field, baby_field, sanitize_field_name};
pub use profile::{BabyProfileCandidate, SanitizedBabyProfile};
pub use sanitize::{sanitize_string, sanitize_value};
pub use validation::{
    validate_activity_type, validate_baby_name, validate_blood_type, validate_date,
    validate_date_at, validate_duration, validate_gender, validate_height, validate_id,
    validate_notes, validate_positive, validate_positive_number, validate_weight,
};

pub use minik_types::{ActivityField, ActivityType, BabyField, BloodType, Gender};

use serde_json::Value;

/// Sanitizer configured with startup limits.
///
/// Holds no mutable state; clone it or share it behind an `Arc` freely.
#[derive(Clone, Debug, Default)]
pub struct Validator {
    cfg: ValidatorConfig,
}

impl Validator {
    pub fn new(cfg: ValidatorConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.cfg
    }

    /// Sanitizes free text with the configured default length limit.
    pub fn sanitize_string(&self, input: &str) -> String {
        sanitize::sanitize_string(input, self.cfg.max_string_length())
    }

    /// Validates and sanitizes a baby profile candidate.
    ///
    /// # Errors
    ///
    /// Returns the error of the first field that fails validation.
    pub fn sanitize_baby_profile(
        &self,
        candidate: &BabyProfileCandidate,
    ) -> ValidationResult<SanitizedBabyProfile> {
        profile::sanitize_baby_profile_with(candidate, self.cfg.max_string_length())
    }

    /// Validates and sanitizes an activity candidate.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `type` or `startTime` is absent, or the
    /// error of the first field that fails validation.
    pub fn sanitize_activity(
        &self,
        candidate: &ActivityCandidate,
    ) -> ValidationResult<SanitizedActivity> {
        activity::sanitize_activity_with(candidate, self.cfg.max_notes_length())
    }

    /// Parses `json` as a baby profile candidate and sanitizes it.
    pub fn sanitize_baby_profile_json(&self, json: &str) -> ValidationResult<SanitizedBabyProfile> {
        let candidate = BabyProfileCandidate::from_value(parse_json(json)?)?;
        self.sanitize_baby_profile(&candidate)
    }

    /// Parses `json` as an activity candidate and sanitizes it.
    pub fn sanitize_activity_json(&self, json: &str) -> ValidationResult<SanitizedActivity> {
        let candidate = ActivityCandidate::from_value(parse_json(json)?)?;
        self.sanitize_activity(&candidate)
    }
}

fn parse_json(json: &str) -> ValidationResult<Value> {
    serde_json::from_str(json)
        .map_err(|e| ValidationError::InvalidFormat(format!("Geçersiz JSON: {e}")))
}

/// [`Validator::sanitize_baby_profile`] with default limits.
pub fn sanitize_baby_profile(
    candidate: &BabyProfileCandidate,
) -> ValidationResult<SanitizedBabyProfile> {
    Validator::default().sanitize_baby_profile(candidate)
}

/// [`Validator::sanitize_activity`] with default limits.
pub fn sanitize_activity(candidate: &ActivityCandidate) -> ValidationResult<SanitizedActivity> {
    Validator::default().sanitize_activity(candidate)
}

/// [`Validator::sanitize_baby_profile_json`] with default limits.
pub fn sanitize_baby_profile_json(json: &str) -> ValidationResult<SanitizedBabyProfile> {
    Validator::default().sanitize_baby_profile_json(json)
}

/// [`Validator::sanitize_activity_json`] with default limits.
pub fn sanitize_activity_json(json: &str) -> ValidationResult<SanitizedActivity> {
    Validator::default().sanitize_activity_json(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Validator>();
    }

    #[test]
    fn configured_string_limit_is_applied() {
        let validator = Validator::new(ValidatorConfig::new(5, 1000).unwrap());
        assert_eq!(validator.config().max_string_length(), 5);
        assert_eq!(Validator::default().config(), &ValidatorConfig::default());
        assert_eq!(validator.sanitize_string("  abcdefgh "), "abcde");
    }

    #[test]
    fn malformed_json_is_a_format_error() {
        let err = sanitize_activity_json("{ not json").expect_err("should reject");
        assert!(matches!(err, ValidationError::InvalidFormat(msg) if msg.contains("JSON")));
    }

    #[test]
    fn non_object_json_is_a_type_error() {
        for payload in ["[]", "\"name\"", "42", "null"] {
            let err = sanitize_baby_profile_json(payload).expect_err("should reject");
            assert_eq!(err.kind(), ErrorKind::InvalidType, "{payload}");
        }
    }
}
