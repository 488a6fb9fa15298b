//! Baby profile records.
//!
//! A profile candidate arrives as an untyped JSON object. Only whitelisted fields are ever
//! read from it; every other key (including `__proto__`-style keys) is collected into
//! [`BabyProfileCandidate::extra`] and dropped.

use crate::error::{ValidationError, ValidationResult};
use crate::validation::{
    validate_baby_name_value, validate_blood_type, validate_date_value, validate_enum_value,
    validate_gender, validate_height, validate_number_value, validate_weight,
};
use minik_types::{BabyField, BloodType, Gender};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Unvalidated baby profile as supplied by a caller.
///
/// Every field is optional: partial updates are legal. A JSON `null` is read as absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabyProfileCandidate {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub birth_date: Option<Value>,
    #[serde(default)]
    pub gender: Option<Value>,
    #[serde(default)]
    pub weight: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
    #[serde(default)]
    pub blood_type: Option<Value>,
    #[serde(default)]
    pub photo: Option<Value>,

    /// Keys outside the whitelist. Never read by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BabyProfileCandidate {
    /// Builds a candidate from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> ValidationResult<Self> {
        if !value.is_object() {
            return Err(ValidationError::InvalidType(
                "Bebek profili bir JSON nesnesi olmalıdır".into(),
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| ValidationError::InvalidFormat(format!("Geçersiz bebek profili: {e}")))
    }

    /// The value supplied for `field`, if any.
    pub fn get(&self, field: BabyField) -> Option<&Value> {
        match field {
            BabyField::Name => self.name.as_ref(),
            BabyField::BirthDate => self.birth_date.as_ref(),
            BabyField::Gender => self.gender.as_ref(),
            BabyField::Weight => self.weight.as_ref(),
            BabyField::Height => self.height.as_ref(),
            BabyField::BloodType => self.blood_type.as_ref(),
            BabyField::Photo => self.photo.as_ref(),
        }
    }
}

/// A validated baby profile, ready to be written to storage.
///
/// Serialises with camelCase keys; absent fields are omitted rather than written as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedBabyProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<BloodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Value>,
}

impl SanitizedBabyProfile {
    /// Fields carrying a value, in storage order.
    ///
    /// Persistence code uses this to build an update statement from whitelisted names only.
    pub fn present_fields(&self) -> Vec<BabyField> {
        BabyField::ALL
            .into_iter()
            .filter(|field| match field {
                BabyField::Name => self.name.is_some(),
                BabyField::BirthDate => self.birth_date.is_some(),
                BabyField::Gender => self.gender.is_some(),
                BabyField::Weight => self.weight.is_some(),
                BabyField::Height => self.height.is_some(),
                BabyField::BloodType => self.blood_type.is_some(),
                BabyField::Photo => self.photo.is_some(),
            })
            .collect()
    }
}

/// Validates every present field and copies it into a [`SanitizedBabyProfile`].
///
/// The first failing field aborts the call with that field's own error; nothing partial is
/// returned. `name` is stored in sanitized form (at most `max_string_length` characters);
/// `photo` is an opaque reference and is passed through unvalidated.
pub(crate) fn sanitize_baby_profile_with(
    candidate: &BabyProfileCandidate,
    max_string_length: usize,
) -> ValidationResult<SanitizedBabyProfile> {
    let mut out = SanitizedBabyProfile::default();

    for field in BabyField::ALL {
        let Some(value) = candidate.get(field) else {
            continue;
        };

        match field {
            BabyField::Name => {
                out.name = Some(validate_baby_name_value(value, max_string_length)?);
            }
            BabyField::BirthDate => {
                out.birth_date = Some(validate_date_value(value, false)?.to_owned());
            }
            BabyField::Gender => {
                out.gender = Some(validate_enum_value(value, validate_gender)?);
            }
            BabyField::Weight => {
                out.weight = Some(validate_number_value(value, validate_weight)?);
            }
            BabyField::Height => {
                out.height = Some(validate_number_value(value, validate_height)?);
            }
            BabyField::BloodType => {
                out.blood_type = Some(validate_enum_value(value, validate_blood_type)?);
            }
            BabyField::Photo => {
                out.photo = Some(value.clone());
            }
        }
    }

    tracing::debug!(
        fields = out.present_fields().len(),
        dropped = candidate.extra.len(),
        "sanitized baby profile"
    );

    Ok(out)
}
