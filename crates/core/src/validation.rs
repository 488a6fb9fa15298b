//! Domain value validators.
//!
//! Each validator either accepts a value or returns the error kind that names why it was
//! rejected. None of them mutate their input.
//!
//! Validators come in two flavours:
//! - typed (`&str`, `f64`, `i64`) for callers that already hold Rust values,
//! - `*_value` for values taken straight out of an untyped JSON record. These perform the
//!   runtime type check first and return the typed, validated value.

use crate::constants::{
    BABY_NAME_MAX_LENGTH, BABY_NAME_MIN_LENGTH, DEFAULT_MAX_STRING_LENGTH,
    MAX_ACTIVITY_DURATION_SECS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::dates::parse_lenient_date;
use crate::error::{ValidationError, ValidationResult};
use crate::sanitize::sanitize_string;
use chrono::{DateTime, Utc};
use minik_types::{ActivityType, BloodType, Gender};
use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;

static BABY_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZğüşıöçĞÜŞİÖÇ\s]+$").expect("baby name pattern is a valid regex")
});

/// Largest integer a client-side number can carry without losing precision (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// ============================================================================
// Names
// ============================================================================

/// Validates a baby's name.
///
/// The trimmed name must be 2-50 characters long and, once sanitized, consist only of
/// letters (including the Turkish letters) and whitespace.
///
/// # Errors
///
/// - [`ValidationError::LengthConstraintViolation`] when the length is out of range,
/// - [`ValidationError::InvalidFormat`] when digits, symbols or emoji are present.
pub fn validate_baby_name(name: &str) -> ValidationResult<()> {
    let len = name.trim().chars().count();
    if !(BABY_NAME_MIN_LENGTH..=BABY_NAME_MAX_LENGTH).contains(&len) {
        return Err(ValidationError::LengthConstraintViolation(format!(
            "Bebek adı {BABY_NAME_MIN_LENGTH}-{BABY_NAME_MAX_LENGTH} karakter arasında olmalıdır"
        )));
    }

    let sanitized = sanitize_string(name, DEFAULT_MAX_STRING_LENGTH);
    if !BABY_NAME_PATTERN.is_match(&sanitized) {
        return Err(ValidationError::InvalidFormat(
            "Bebek adı sadece harf içerebilir".into(),
        ));
    }

    Ok(())
}

/// Validates an untyped name and returns its sanitized form.
pub fn validate_baby_name_value(value: &Value, max_length: usize) -> ValidationResult<String> {
    let name = value.as_str().ok_or_else(|| {
        ValidationError::InvalidType("Bebek adı string formatında olmalıdır".into())
    })?;
    validate_baby_name(name)?;
    Ok(sanitize_string(name, max_length))
}

// ============================================================================
// Dates
// ============================================================================

/// Validates a date string against the current time.
///
/// Returns the parsed instant on success.
///
/// # Errors
///
/// - [`ValidationError::InvalidFormat`] when the string is not a recognised date,
/// - [`ValidationError::TemporalConstraintViolation`] when the date lies in the future and
///   `allow_future` is `false`.
pub fn validate_date(input: &str, allow_future: bool) -> ValidationResult<DateTime<Utc>> {
    validate_date_at(input, allow_future, Utc::now())
}

/// Like [`validate_date`], with an explicit notion of "now".
pub fn validate_date_at(
    input: &str,
    allow_future: bool,
    now: DateTime<Utc>,
) -> ValidationResult<DateTime<Utc>> {
    let parsed = parse_lenient_date(input)
        .ok_or_else(|| ValidationError::InvalidFormat("Geçersiz tarih formatı".into()))?;

    if !allow_future && parsed > now {
        return Err(ValidationError::TemporalConstraintViolation(
            "Gelecek tarih kabul edilmez".into(),
        ));
    }

    Ok(parsed)
}

/// Validates an untyped date and returns the original string.
pub fn validate_date_value(value: &Value, allow_future: bool) -> ValidationResult<&str> {
    let input = value
        .as_str()
        .ok_or_else(|| ValidationError::InvalidType("Geçersiz tarih formatı".into()))?;
    validate_date(input, allow_future)?;
    Ok(input)
}

// ============================================================================
// Numbers
// ============================================================================

/// Validates that `value` lies in `(min, max]`.
///
/// # Errors
///
/// - [`ValidationError::InvalidType`] for NaN,
/// - [`ValidationError::OutOfRange`] when `value <= min` or `value > max`.
pub fn validate_positive_number(value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if value.is_nan() {
        return Err(ValidationError::InvalidType("Geçersiz sayı".into()));
    }
    if value <= min {
        return Err(ValidationError::OutOfRange(format!(
            "Değer {min} değerinden büyük olmalıdır"
        )));
    }
    if value > max {
        return Err(ValidationError::OutOfRange(format!(
            "Değer {max} değerinden küçük veya eşit olmalıdır"
        )));
    }

    Ok(())
}

/// [`validate_positive_number`] with the default bounds `(0, f64::MAX]`.
pub fn validate_positive(value: f64) -> ValidationResult<()> {
    validate_positive_number(value, 0.0, f64::MAX)
}

/// Weight in kilograms, in `(0.09, 200]`.
pub fn validate_weight(weight: f64) -> ValidationResult<()> {
    validate_positive_number(weight, MIN_WEIGHT_KG, MAX_WEIGHT_KG)
}

/// Height in centimetres, in `(10, 300]`.
pub fn validate_height(height: f64) -> ValidationResult<()> {
    validate_positive_number(height, MIN_HEIGHT_CM, MAX_HEIGHT_CM)
}

/// Activity duration in seconds, in `[0, 86400]`.
pub fn validate_duration(seconds: f64) -> ValidationResult<()> {
    if seconds.is_nan() {
        return Err(ValidationError::InvalidType("Geçersiz sayı".into()));
    }
    if !(0.0..=MAX_ACTIVITY_DURATION_SECS).contains(&seconds) {
        return Err(ValidationError::OutOfRange(format!(
            "Süre 0 ile {MAX_ACTIVITY_DURATION_SECS} saniye arasında olmalıdır"
        )));
    }

    Ok(())
}

/// Extracts a JSON number, rejecting every other type.
pub fn number_value(value: &Value) -> ValidationResult<&Number> {
    match value {
        Value::Number(n) => Ok(n),
        _ => Err(ValidationError::InvalidType("Geçersiz sayı".into())),
    }
}

/// Validates an untyped value with `check` and returns the original number.
pub fn validate_number_value(
    value: &Value,
    check: fn(f64) -> ValidationResult<()>,
) -> ValidationResult<Number> {
    let number = number_value(value)?;
    let as_f64 = number
        .as_f64()
        .ok_or_else(|| ValidationError::InvalidType("Geçersiz sayı".into()))?;
    check(as_f64)?;
    Ok(number.clone())
}

// ============================================================================
// Enumerations
// ============================================================================

pub fn validate_gender(value: &str) -> ValidationResult<Gender> {
    Gender::from_wire(value)
        .ok_or_else(|| ValidationError::InvalidEnumMember("Geçersiz cinsiyet değeri".into()))
}

pub fn validate_blood_type(value: &str) -> ValidationResult<BloodType> {
    BloodType::from_wire(value)
        .ok_or_else(|| ValidationError::InvalidEnumMember("Geçersiz kan grubu".into()))
}

pub fn validate_activity_type(value: &str) -> ValidationResult<ActivityType> {
    ActivityType::from_wire(value)
        .ok_or_else(|| ValidationError::InvalidEnumMember("Geçersiz aktivite tipi".into()))
}

/// Applies an enum validator to an untyped value. Non-strings are never members.
pub fn validate_enum_value<T>(
    value: &Value,
    check: fn(&str) -> ValidationResult<T>,
) -> ValidationResult<T> {
    // An empty string is not a member of any vocabulary, so the enum error is reported.
    check(value.as_str().unwrap_or_default())
}

// ============================================================================
// Notes
// ============================================================================

/// Validates free-text notes against a character limit.
///
/// # Errors
///
/// Returns [`ValidationError::LengthConstraintViolation`] when `notes` exceeds `max_length`
/// characters.
pub fn validate_notes(notes: &str, max_length: usize) -> ValidationResult<()> {
    if notes.chars().count() > max_length {
        return Err(ValidationError::LengthConstraintViolation(format!(
            "Notlar maksimum {max_length} karakter olabilir"
        )));
    }

    Ok(())
}

/// Validates untyped notes and returns the original text.
pub fn validate_notes_value(value: &Value, max_length: usize) -> ValidationResult<&str> {
    let notes = value.as_str().ok_or_else(|| {
        ValidationError::InvalidType("Notlar string formatında olmalıdır".into())
    })?;
    validate_notes(notes, max_length)?;
    Ok(notes)
}

// ============================================================================
// Identifiers
// ============================================================================

/// Validates a record identifier, which must be strictly positive.
pub fn validate_id(id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::OutOfRange("Geçersiz ID".into()));
    }

    Ok(())
}

/// Validates an untyped identifier.
///
/// Integral floats (`1.0`) are accepted like integers; fractional values are not.
pub fn validate_id_value(value: &Value) -> ValidationResult<u64> {
    let number = number_value(value).map_err(|_| invalid_id_type())?;

    if let Some(id) = number.as_u64() {
        if id == 0 || id as f64 > MAX_SAFE_INTEGER {
            return Err(ValidationError::OutOfRange("Geçersiz ID".into()));
        }
        return Ok(id);
    }
    if let Some(id) = number.as_i64() {
        validate_id(id)?;
    }

    let as_f64 = number.as_f64().ok_or_else(invalid_id_type)?;
    if as_f64.fract() != 0.0 || !as_f64.is_finite() {
        return Err(invalid_id_type());
    }
    if as_f64 <= 0.0 || as_f64 > MAX_SAFE_INTEGER {
        return Err(ValidationError::OutOfRange("Geçersiz ID".into()));
    }

    Ok(as_f64 as u64)
}

fn invalid_id_type() -> ValidationError {
    ValidationError::InvalidType("Geçersiz ID".into())
}
