//! Raw form field parsing
//!
//! Form values arrive as text. Each one is parsed explicitly so that an empty
//! or non-numeric field is reported instead of silently becoming zero.

use super::{InputError, ProjectionInput, MAX_AGE};
use log::debug;
use serde::Deserialize;

pub const START_AGE_FIELD: &str = "start-age";
pub const STOP_AGE_FIELD: &str = "stop-age";
pub const CONTRIBUTION_FIELD: &str = "annual-contribution";
pub const RETURN_FIELD: &str = "annual-return";

/// Text contents of the four calculator fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormFields {
    #[serde(rename = "start-age")]
    pub start_age: String,
    #[serde(rename = "stop-age")]
    pub stop_age: String,
    #[serde(rename = "annual-contribution")]
    pub annual_contribution: String,
    #[serde(rename = "annual-return")]
    pub annual_return: String,
}

impl FormFields {
    pub fn new(
        start_age: impl Into<String>,
        stop_age: impl Into<String>,
        annual_contribution: impl Into<String>,
        annual_return: impl Into<String>,
    ) -> Self {
        Self {
            start_age: start_age.into(),
            stop_age: stop_age.into(),
            annual_contribution: annual_contribution.into(),
            annual_return: annual_return.into(),
        }
    }

    /// Parse every field and apply the age ordering rule last
    pub fn parse(&self) -> Result<ProjectionInput, InputError> {
        let start_age = parse_age(START_AGE_FIELD, &self.start_age)?;
        let stop_age = parse_age(STOP_AGE_FIELD, &self.stop_age)?;
        let annual_contribution = parse_number(CONTRIBUTION_FIELD, &self.annual_contribution)?;
        let annual_return = parse_number(RETURN_FIELD, &self.annual_return)?;

        debug!(
            "parsed form: start={} stop={} contribution={} return={}%",
            start_age, stop_age, annual_contribution, annual_return
        );

        ProjectionInput::validated(start_age, stop_age, annual_contribution, annual_return)
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InputError::Missing { field });
    }

    let value: f64 = text.parse().map_err(|_| InputError::NotANumber {
        field,
        value: raw.to_string(),
    })?;

    // f64 parsing accepts "inf" and "NaN"; neither is a usable amount
    if !value.is_finite() {
        return Err(InputError::NotANumber {
            field,
            value: raw.to_string(),
        });
    }

    Ok(value)
}

fn parse_age(field: &'static str, raw: &str) -> Result<u8, InputError> {
    let value = parse_number(field, raw)?;

    if value.fract() != 0.0 || value < 0.0 || value > MAX_AGE as f64 {
        return Err(InputError::InvalidAge {
            field,
            value: raw.trim().to_string(),
            max: MAX_AGE,
        });
    }

    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_valid_form() {
        let input = FormFields::new("30", "65", "6000", "7").parse().unwrap();
        assert_eq!(input.start_age(), 30);
        assert_eq!(input.stop_age(), 65);
        assert_relative_eq!(input.annual_contribution(), 6000.0);
        assert_relative_eq!(input.annual_return_percent(), 7.0);
    }

    #[test]
    fn test_parse_trims_whitespace_and_accepts_decimals() {
        let input = FormFields::new(" 25 ", "60.0", "5500.50", "6.5").parse().unwrap();
        assert_eq!(input.start_age(), 25);
        assert_eq!(input.stop_age(), 60);
        assert_relative_eq!(input.annual_contribution(), 5500.5);
        assert_relative_eq!(input.annual_return_percent(), 6.5);
    }

    #[test]
    fn test_empty_field_is_missing() {
        let err = FormFields::new("30", "65", "", "7").parse().unwrap_err();
        assert!(matches!(err, InputError::Missing { field: "annual-contribution" }));
    }

    #[test]
    fn test_non_numeric_field() {
        let err = FormFields::new("thirty", "65", "6000", "7").parse().unwrap_err();
        match err {
            InputError::NotANumber { field, value } => {
                assert_eq!(field, "start-age");
                assert_eq!(value, "thirty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_infinite_return_rejected() {
        let err = FormFields::new("30", "65", "6000", "inf").parse().unwrap_err();
        assert!(matches!(err, InputError::NotANumber { field: "annual-return", .. }));
    }

    #[test]
    fn test_fractional_age_rejected() {
        let err = FormFields::new("30.5", "65", "6000", "7").parse().unwrap_err();
        assert!(matches!(err, InputError::InvalidAge { field: "start-age", .. }));
    }

    #[test]
    fn test_negative_age_rejected() {
        let err = FormFields::new("-1", "65", "6000", "7").parse().unwrap_err();
        assert!(matches!(err, InputError::InvalidAge { .. }));
    }

    #[test]
    fn test_age_order_checked() {
        let err = FormFields::new("65", "30", "6000", "7").parse().unwrap_err();
        assert_eq!(err.to_string(), "Start age must be less than stop age.");
    }

    #[test]
    fn test_deserialize_from_form_json() {
        let fields: FormFields = serde_json::from_str(
            r#"{"start-age":"30","stop-age":"65","annual-contribution":"6000","annual-return":"7"}"#,
        )
        .unwrap();
        assert!(fields.parse().is_ok());
    }
}
