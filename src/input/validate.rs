//! Start/stop age ordering check

use serde::Serialize;

/// Message shown when the start age is not strictly before the stop age
pub const AGE_ORDER_MESSAGE: &str = "Start age must be less than stop age.";

/// Outcome of validating the age pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum AgeValidation {
    Valid,
    Invalid(String),
}

impl AgeValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, AgeValidation::Valid)
    }

    /// The validation message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            AgeValidation::Valid => None,
            AgeValidation::Invalid(msg) => Some(msg),
        }
    }
}

/// Check that contributions start strictly before they stop.
///
/// Re-run whenever either age changes; an invalid result should block
/// submission until corrected.
pub fn validate_ages(start_age: u8, stop_age: u8) -> AgeValidation {
    if start_age >= stop_age {
        AgeValidation::Invalid(AGE_ORDER_MESSAGE.to_string())
    } else {
        AgeValidation::Valid
    }
}
