//! Whitelisted record field names.
//!
//! Records arrive as untyped JSON objects, so field names are still checked at runtime against
//! these lists before they are used as storage keys or interpolated into a query. The enums
//! give the persistence code an exhaustive `match` over the allowed fields once a name has
//! passed that check.

use crate::UnknownVariant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field of a baby profile record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BabyField {
    Name,
    BirthDate,
    Gender,
    Weight,
    Height,
    BloodType,
    Photo,
}

impl BabyField {
    /// Every field, in storage order.
    pub const ALL: [BabyField; 7] = [
        BabyField::Name,
        BabyField::BirthDate,
        BabyField::Gender,
        BabyField::Weight,
        BabyField::Height,
        BabyField::BloodType,
        BabyField::Photo,
    ];

    /// Wire (camelCase) spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            BabyField::Name => "name",
            BabyField::BirthDate => "birthDate",
            BabyField::Gender => "gender",
            BabyField::Weight => "weight",
            BabyField::Height => "height",
            BabyField::BloodType => "bloodType",
            BabyField::Photo => "photo",
        }
    }

    /// Parse from the wire spelling.
    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

/// A field of an activity record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityField {
    Type,
    StartTime,
    EndTime,
    Duration,
    Notes,
    BabyId,
}

impl ActivityField {
    /// Every field, in storage order.
    pub const ALL: [ActivityField; 6] = [
        ActivityField::Type,
        ActivityField::StartTime,
        ActivityField::EndTime,
        ActivityField::Duration,
        ActivityField::Notes,
        ActivityField::BabyId,
    ];

    /// Wire (camelCase) spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityField::Type => "type",
            ActivityField::StartTime => "startTime",
            ActivityField::EndTime => "endTime",
            ActivityField::Duration => "duration",
            ActivityField::Notes => "notes",
            ActivityField::BabyId => "babyId",
        }
    }

    /// Parse from the wire spelling.
    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    /// Whether a record must carry this field.
    pub fn is_required(self) -> bool {
        matches!(self, ActivityField::Type | ActivityField::StartTime)
    }
}

impl fmt::Display for BabyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActivityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BabyField {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| UnknownVariant::new("baby field", s))
    }
}

impl FromStr for ActivityField {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| UnknownVariant::new("activity field", s))
    }
}
