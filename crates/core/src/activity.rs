//! Activity records (feeding, sleep, diaper changes and so on).

use crate::error::{ValidationError, ValidationResult};
use crate::sanitize::sanitize_string;
use crate::validation::{
    validate_activity_type, validate_date_value, validate_duration, validate_enum_value,
    validate_id_value, validate_notes_value, validate_number_value,
};
use minik_types::{ActivityField, ActivityType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Unvalidated activity as supplied by a caller.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCandidate {
    #[serde(default, rename = "type")]
    pub activity_type: Option<Value>,
    #[serde(default)]
    pub start_time: Option<Value>,
    #[serde(default)]
    pub end_time: Option<Value>,
    #[serde(default)]
    pub duration: Option<Value>,
    #[serde(default)]
    pub notes: Option<Value>,
    #[serde(default)]
    pub baby_id: Option<Value>,

    /// Keys outside the whitelist. Never read by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActivityCandidate {
    /// Builds a candidate from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> ValidationResult<Self> {
        if !value.is_object() {
            return Err(ValidationError::InvalidType(
                "Aktivite bir JSON nesnesi olmalıdır".into(),
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| ValidationError::InvalidFormat(format!("Geçersiz aktivite: {e}")))
    }

    pub fn get(&self, field: ActivityField) -> Option<&Value> {
        match field {
            ActivityField::Type => self.activity_type.as_ref(),
            ActivityField::StartTime => self.start_time.as_ref(),
            ActivityField::EndTime => self.end_time.as_ref(),
            ActivityField::Duration => self.duration.as_ref(),
            ActivityField::Notes => self.notes.as_ref(),
            ActivityField::BabyId => self.baby_id.as_ref(),
        }
    }
}

/// A validated activity, ready to be written to storage.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedActivity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baby_id: Option<u64>,
}

impl SanitizedActivity {
    pub fn present_fields(&self) -> Vec<ActivityField> {
        ActivityField::ALL
            .into_iter()
            .filter(|field| match field {
                ActivityField::Type | ActivityField::StartTime => true,
                ActivityField::EndTime => self.end_time.is_some(),
                ActivityField::Duration => self.duration.is_some(),
                ActivityField::Notes => self.notes.is_some(),
                ActivityField::BabyId => self.baby_id.is_some(),
            })
            .collect()
    }
}

fn missing(field: ActivityField) -> ValidationError {
    ValidationError::MissingField(field.as_str().to_owned())
}

/// Validates every present field and copies it into a [`SanitizedActivity`].
///
/// Start and end times may lie in the future (activities can be scheduled ahead) and are
/// stored exactly as supplied. Notes are length-checked against `max_notes_length` and then
/// sanitized.
pub(crate) fn sanitize_activity_with(
    candidate: &ActivityCandidate,
    max_notes_length: usize,
) -> ValidationResult<SanitizedActivity> {
    let mut activity_type = None;
    let mut start_time = None;
    let mut end_time = None;
    let mut duration = None;
    let mut notes = None;
    let mut baby_id = None;

    for field in ActivityField::ALL {
        let Some(value) = candidate.get(field) else {
            if field.is_required() {
                return Err(missing(field));
            }
            continue;
        };

        match field {
            ActivityField::Type => {
                activity_type = Some(validate_enum_value(value, validate_activity_type)?);
            }
            ActivityField::StartTime => {
                start_time = Some(validate_date_value(value, true)?.to_owned());
            }
            ActivityField::EndTime => {
                end_time = Some(validate_date_value(value, true)?.to_owned());
            }
            ActivityField::Duration => {
                duration = Some(validate_number_value(value, validate_duration)?);
            }
            ActivityField::Notes => {
                let text = validate_notes_value(value, max_notes_length)?;
                notes = Some(sanitize_string(text, max_notes_length));
            }
            ActivityField::BabyId => {
                baby_id = Some(validate_id_value(value)?);
            }
        }
    }

    let activity = SanitizedActivity {
        activity_type: activity_type.ok_or_else(|| missing(ActivityField::Type))?,
        start_time: start_time.ok_or_else(|| missing(ActivityField::StartTime))?,
        end_time,
        duration,
        notes,
        baby_id,
    };

    tracing::debug!(
        activity_type = %activity.activity_type,
        dropped = candidate.extra.len(),
        "sanitized activity"
    );

    Ok(activity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sanitize_activity, sanitize_activity_json, ErrorKind, Validator, ValidatorConfig};
    use serde_json::json;

    fn candidate(value: Value) -> ActivityCandidate {
        ActivityCandidate::from_value(value).expect("test candidate is an object")
    }

    #[test]
    fn feeding_session_round_trips_with_trimmed_notes() {
        let input = candidate(json!({
            "type": "feeding",
            "startTime": "2024-01-01T10:00:00Z",
            "endTime": "2024-01-01T10:30:00Z",
            "duration": 1800,
            "notes": "  Good feeding session  ",
            "babyId": 1
        }));

        let out = sanitize_activity(&input).expect("valid activity");
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({
                "type": "feeding",
                "startTime": "2024-01-01T10:00:00Z",
                "endTime": "2024-01-01T10:30:00Z",
                "duration": 1800,
                "notes": "Good feeding session",
                "babyId": 1
            })
        );
        assert_eq!(out.present_fields(), ActivityField::ALL.to_vec());
    }

    #[test]
    fn invalid_activity_type_is_rejected() {
        let input = candidate(json!({
            "type": "invalid_type",
            "startTime": "2024-01-01T10:00:00Z",
            "babyId": 1
        }));
        let err = sanitize_activity(&input).expect_err("unknown activity type");
        assert!(
            matches!(err, ValidationError::InvalidEnumMember(msg) if msg.contains("aktivite"))
        );
    }

    #[test]
    fn type_and_start_time_are_required() {
        let err = sanitize_activity(&candidate(json!({ "startTime": "2024-01-01" }))).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("type".into()));

        let err = sanitize_activity(&candidate(json!({ "type": "sleep" }))).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("startTime".into()));

        let err = sanitize_activity(&candidate(json!({ "type": "sleep", "startTime": null })))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn future_times_are_allowed() {
        let input = candidate(json!({
            "type": "health",
            "startTime": "2999-06-01T09:00:00Z",
            "endTime": "2999-06-01T09:30:00Z"
        }));
        let out = sanitize_activity(&input).expect("scheduled activity");
        assert_eq!(out.start_time, "2999-06-01T09:00:00Z");
        assert_eq!(out.end_time.as_deref(), Some("2999-06-01T09:30:00Z"));
    }

    #[test]
    fn malformed_times_are_rejected() {
        let input = candidate(json!({ "type": "sleep", "startTime": "yesterday" }));
        let err = sanitize_activity(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn non_ascii_digits_in_start_time_are_a_format_error() {
        let err = sanitize_activity_json(
            r#"{"type":"sleep","startTime":"2024-01-01T00:00:00.١١١١١Z"}"#,
        )
        .expect_err("Arabic-Indic fraction digits");
        assert!(matches!(err, ValidationError::InvalidFormat(msg) if msg.contains("Geçersiz tarih")));
    }

    #[test]
    fn duration_bounds() {
        let ok = candidate(json!({ "type": "sleep", "startTime": "2024-01-01", "duration": 0 }));
        assert!(sanitize_activity(&ok).is_ok());

        let too_long =
            candidate(json!({ "type": "sleep", "startTime": "2024-01-01", "duration": 86401 }));
        assert_eq!(
            sanitize_activity(&too_long).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );

        let text =
            candidate(json!({ "type": "sleep", "startTime": "2024-01-01", "duration": "60" }));
        assert_eq!(sanitize_activity(&text).unwrap_err().kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn notes_are_length_checked_then_sanitized() {
        let input = candidate(json!({
            "type": "diaper",
            "startTime": "2024-01-01",
            "notes": "<b>Islak</b> bez, \"normal\""
        }));
        let out = sanitize_activity(&input).unwrap();
        assert_eq!(out.notes.as_deref(), Some("Islak bez, normal"));

        let input = candidate(json!({
            "type": "diaper",
            "startTime": "2024-01-01",
            "notes": "a".repeat(1001)
        }));
        let err = sanitize_activity(&input).unwrap_err();
        assert!(matches!(err, ValidationError::LengthConstraintViolation(msg) if msg.contains("maksimum 1000")));
    }

    #[test]
    fn configured_notes_limit_is_used() {
        let validator = Validator::new(ValidatorConfig::new(255, 10).unwrap());
        let input = candidate(json!({
            "type": "milestone",
            "startTime": "2024-01-01",
            "notes": "ilk adımlarını attı"
        }));
        let err = validator.sanitize_activity(&input).unwrap_err();
        assert!(err.to_string().contains("maksimum 10"));
    }

    #[test]
    fn baby_id_must_be_positive_integer() {
        for (baby_id, kind) in [
            (json!(0), ErrorKind::OutOfRange),
            (json!(-4), ErrorKind::OutOfRange),
            (json!(2.5), ErrorKind::InvalidType),
            (json!("1"), ErrorKind::InvalidType),
        ] {
            let input =
                candidate(json!({ "type": "growth", "startTime": "2024-01-01", "babyId": baby_id }));
            assert_eq!(sanitize_activity(&input).unwrap_err().kind(), kind);
        }
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let out = sanitize_activity_json(
            r#"{"type":"sleep","startTime":"2024-01-01T20:00:00Z","__proto__":{"isAdmin":true},"sql":"1; DROP TABLE activities"}"#,
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({ "type": "sleep", "startTime": "2024-01-01T20:00:00Z" })
        );
    }
}
