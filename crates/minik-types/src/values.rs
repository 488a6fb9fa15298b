//! Value enumerations for baby profiles and activities.

use crate::UnknownVariant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Gender
// ============================================================================

/// Gender recorded on a baby profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Every variant, in wire order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Parse from the wire spelling.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

// ============================================================================
// Blood type
// ============================================================================

/// ABO/Rh blood group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    /// Every variant, in wire order.
    pub const ALL: [BloodType; 8] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
        BloodType::OPositive,
        BloodType::ONegative,
    ];

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }

    /// Parse from the wire spelling.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "A+" => Some(BloodType::APositive),
            "A-" => Some(BloodType::ANegative),
            "B+" => Some(BloodType::BPositive),
            "B-" => Some(BloodType::BNegative),
            "AB+" => Some(BloodType::AbPositive),
            "AB-" => Some(BloodType::AbNegative),
            "O+" => Some(BloodType::OPositive),
            "O-" => Some(BloodType::ONegative),
            _ => None,
        }
    }
}

// ============================================================================
// Activity type
// ============================================================================

/// Kind of a logged activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Feeding,
    Sleep,
    Diaper,
    Health,
    Growth,
    Milestone,
}

impl ActivityType {
    /// Every variant, in wire order.
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Feeding,
        ActivityType::Sleep,
        ActivityType::Diaper,
        ActivityType::Health,
        ActivityType::Growth,
        ActivityType::Milestone,
    ];

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Feeding => "feeding",
            ActivityType::Sleep => "sleep",
            ActivityType::Diaper => "diaper",
            ActivityType::Health => "health",
            ActivityType::Growth => "growth",
            ActivityType::Milestone => "milestone",
        }
    }

    /// Parse from the wire spelling.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "feeding" => Some(ActivityType::Feeding),
            "sleep" => Some(ActivityType::Sleep),
            "diaper" => Some(ActivityType::Diaper),
            "health" => Some(ActivityType::Health),
            "growth" => Some(ActivityType::Growth),
            "milestone" => Some(ActivityType::Milestone),
            _ => None,
        }
    }
}

// ============================================================================
// Shared trait impls
// ============================================================================

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| UnknownVariant::new("gender", s))
    }
}

impl FromStr for BloodType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| UnknownVariant::new("blood type", s))
    }
}

impl FromStr for ActivityType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| UnknownVariant::new("activity type", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_spelling_parses_back_for_every_variant() {
        for g in Gender::ALL {
            assert_eq!(g.as_str().parse::<Gender>().unwrap(), g);
        }
        for b in BloodType::ALL {
            assert_eq!(b.as_str().parse::<BloodType>().unwrap(), b);
        }
        for a in ActivityType::ALL {
            assert_eq!(a.as_str().parse::<ActivityType>().unwrap(), a);
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(Gender::from_wire("Male").is_none());
        assert!(BloodType::from_wire("ab+").is_none());
        assert!(ActivityType::from_wire("FEEDING").is_none());
    }

    #[test]
    fn parsing_does_not_trim() {
        assert!(Gender::from_wire(" male").is_none());
        assert!(BloodType::from_wire("O+ ").is_none());
    }

    #[test]
    fn unknown_variant_reports_kind_and_value() {
        let err = "C+".parse::<BloodType>().expect_err("C+ is not a blood type");
        assert_eq!(err.kind, "blood type");
        assert_eq!(err.value, "C+");
        assert_eq!(err.to_string(), "unknown blood type value: 'C+'");
    }

    #[test]
    fn serde_uses_wire_spelling() {
        let json = serde_json::to_string(&BloodType::AbNegative).unwrap();
        assert_eq!(json, "\"AB-\"");

        let parsed: ActivityType = serde_json::from_str("\"milestone\"").unwrap();
        assert_eq!(parsed, ActivityType::Milestone);

        let err = serde_json::from_str::<Gender>("\"unknown\"");
        assert!(err.is_err());
    }
}
