//! Projection input value object

use serde::Serialize;
use thiserror::Error;

/// Largest age accepted from a form or input file
pub const MAX_AGE: u8 = 120;

/// Largest annual return accepted, in percent
pub const MAX_RETURN_PERCENT: f64 = 100.0;

/// Largest yearly contribution accepted
pub const MAX_CONTRIBUTION: f64 = 1e12;

/// Errors raised while turning raw form values into a [`ProjectionInput`]
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a whole age between 0 and {max}, got {value}")]
    InvalidAge { field: &'static str, value: String, max: u8 },

    #[error("annual contribution cannot be negative, got {0}")]
    NegativeContribution(f64),

    #[error("annual contribution cannot exceed {max}, got {value}")]
    ContributionTooLarge { value: f64, max: f64 },

    #[error("annual return must be greater than -100% and at most {max}%, got {value}%")]
    ReturnOutOfRange { value: f64, max: f64 },

    #[error("{0}")]
    AgeOrder(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed input document: {0}")]
    Json(#[from] serde_json::Error),
}

/// The four numbers a projection is computed from.
///
/// Fields are private so a constructed input always satisfies the numeric
/// checks in [`ProjectionInput::new`]. Age ordering is a separate check (see
/// [`crate::input::validate_ages`]) because the engine itself accepts any pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionInput {
    start_age: u8,
    stop_age: u8,
    annual_contribution: f64,
    annual_return_percent: f64,
}

impl ProjectionInput {
    /// Build an input, rejecting out-of-range ages, negative, oversized or
    /// non-finite contributions, and returns outside (-100%, 100%]
    pub fn new(
        start_age: u8,
        stop_age: u8,
        annual_contribution: f64,
        annual_return_percent: f64,
    ) -> Result<Self, InputError> {
        check_age(super::START_AGE_FIELD, start_age)?;
        check_age(super::STOP_AGE_FIELD, stop_age)?;

        if !annual_contribution.is_finite() {
            return Err(InputError::NotANumber {
                field: super::CONTRIBUTION_FIELD,
                value: annual_contribution.to_string(),
            });
        }
        if annual_contribution < 0.0 {
            return Err(InputError::NegativeContribution(annual_contribution));
        }
        if annual_contribution > MAX_CONTRIBUTION {
            return Err(InputError::ContributionTooLarge {
                value: annual_contribution,
                max: MAX_CONTRIBUTION,
            });
        }

        if !annual_return_percent.is_finite() {
            return Err(InputError::NotANumber {
                field: super::RETURN_FIELD,
                value: annual_return_percent.to_string(),
            });
        }
        // Bounded above so 100 years of compounding stays finite
        if annual_return_percent <= -100.0 || annual_return_percent > MAX_RETURN_PERCENT {
            return Err(InputError::ReturnOutOfRange {
                value: annual_return_percent,
                max: MAX_RETURN_PERCENT,
            });
        }

        Ok(Self {
            start_age,
            stop_age,
            annual_contribution,
            annual_return_percent,
        })
    }

    /// Like [`ProjectionInput::new`], additionally requiring start age < stop age
    pub fn validated(
        start_age: u8,
        stop_age: u8,
        annual_contribution: f64,
        annual_return_percent: f64,
    ) -> Result<Self, InputError> {
        let input = Self::new(start_age, stop_age, annual_contribution, annual_return_percent)?;
        input.check_age_order()?;
        Ok(input)
    }

    /// Apply the age ordering rule to an already constructed input
    pub fn check_age_order(&self) -> Result<(), InputError> {
        match super::validate_ages(self.start_age, self.stop_age) {
            super::AgeValidation::Valid => Ok(()),
            super::AgeValidation::Invalid(msg) => Err(InputError::AgeOrder(msg)),
        }
    }

    pub fn start_age(&self) -> u8 {
        self.start_age
    }

    pub fn stop_age(&self) -> u8 {
        self.stop_age
    }

    pub fn annual_contribution(&self) -> f64 {
        self.annual_contribution
    }

    pub fn annual_return_percent(&self) -> f64 {
        self.annual_return_percent
    }

    /// Annual return as a decimal rate (7% -> 0.07)
    pub fn annual_rate(&self) -> f64 {
        self.annual_return_percent / 100.0
    }
}

fn check_age(field: &'static str, age: u8) -> Result<(), InputError> {
    if age > MAX_AGE {
        return Err(InputError::InvalidAge {
            field,
            value: age.to_string(),
            max: MAX_AGE,
        });
    }
    Ok(())
}
