//! Client-side validation of proposed setting values

use super::value_type::ConfigValueType;
use thiserror::Error;

/// Largest integer the settings UI accepts (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;
/// Smallest integer the settings UI accepts.
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Reason a proposed value was rejected. The display text is shown to the operator as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueValidationError {
    #[error("Invalid value. Please enter a valid 64-bit signed integer.")]
    InvalidSignedInteger,
    #[error("Invalid value. Please enter a valid 64-bit unsigned integer.")]
    InvalidUnsignedInteger,
    #[error("Invalid value. Please enter true or false.")]
    InvalidBoolean,
    #[error("Invalid value type")]
    InvalidValueType,
}

/// Validate a candidate value against the declared type of the setting.
///
/// A missing value is checked as the empty string. Integer types take any
/// finite decimal number (blank reads as `0`, fractions and exponents are
/// truncated toward zero) and range-check the truncated value.
pub fn validate_value(
    value_type: ConfigValueType,
    value: Option<&str>,
) -> Result<(), ValueValidationError> {
    let value = value.unwrap_or("");
    match value_type {
        ConfigValueType::Int => match parse_safe_integer(value) {
            Some(_) => Ok(()),
            None => Err(ValueValidationError::InvalidSignedInteger),
        },
        ConfigValueType::Uint => match parse_safe_integer(value) {
            Some(n) if n >= 0.0 => Ok(()),
            _ => Err(ValueValidationError::InvalidUnsignedInteger),
        },
        ConfigValueType::Bool => {
            if value == "true" || value == "false" {
                Ok(())
            } else {
                Err(ValueValidationError::InvalidBoolean)
            }
        }
        ConfigValueType::String => Ok(()),
        ConfigValueType::Unrecognized(_) => Err(ValueValidationError::InvalidValueType),
    }
}

fn parse_safe_integer(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let n = if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse::<f64>().ok()?
    };
    if !n.is_finite() {
        return None;
    }
    let n = n.trunc();
    (n >= MIN_SAFE_INTEGER as f64 && n <= MAX_SAFE_INTEGER as f64).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_accepts_values_inside_safe_range() {
        for v in ["0", "-42", " 17 ", "+5", "9007199254740991", "-9007199254740991"] {
            assert_eq!(validate_value(ConfigValueType::Int, Some(v)), Ok(()), "{v}");
        }
    }

    #[test]
    fn int_reads_blank_as_zero_and_truncates_fractions() {
        for v in ["", "   ", "1.5", "-2.9", "1e3", ".5"] {
            assert_eq!(validate_value(ConfigValueType::Int, Some(v)), Ok(()), "{v}");
        }
    }

    #[test]
    fn int_rejects_non_numbers_and_out_of_range() {
        for v in ["abc", "12abc", "inf", "NaN", "1e300", "9007199254740992", "-9007199254740992", "99999999999999999999"] {
            assert_eq!(
                validate_value(ConfigValueType::Int, Some(v)),
                Err(ValueValidationError::InvalidSignedInteger),
                "{v}"
            );
        }
        assert_eq!(validate_value(ConfigValueType::Int, None), Ok(()));
    }

    #[test]
    fn uint_rejects_negative_values() {
        assert_eq!(validate_value(ConfigValueType::Uint, Some("10")), Ok(()));
        assert_eq!(validate_value(ConfigValueType::Uint, Some("0")), Ok(()));
        assert_eq!(validate_value(ConfigValueType::Uint, Some("")), Ok(()));
        assert_eq!(validate_value(ConfigValueType::Uint, Some("2.5e2")), Ok(()));
        assert_eq!(
            validate_value(ConfigValueType::Uint, Some("-1.5")),
            Err(ValueValidationError::InvalidUnsignedInteger)
        );
        assert_eq!(
            validate_value(ConfigValueType::Uint, Some("-1")),
            Err(ValueValidationError::InvalidUnsignedInteger)
        );
        assert_eq!(
            validate_value(ConfigValueType::Uint, Some("9007199254740992")),
            Err(ValueValidationError::InvalidUnsignedInteger)
        );
    }

    #[test]
    fn bool_requires_exact_literals() {
        assert_eq!(validate_value(ConfigValueType::Bool, Some("true")), Ok(()));
        assert_eq!(validate_value(ConfigValueType::Bool, Some("false")), Ok(()));
        for v in ["True", "FALSE", " true", "1", "yes", ""] {
            assert_eq!(
                validate_value(ConfigValueType::Bool, Some(v)),
                Err(ValueValidationError::InvalidBoolean),
                "{v}"
            );
        }
    }

    #[test]
    fn string_always_passes_and_unknown_type_never_does() {
        assert_eq!(validate_value(ConfigValueType::String, None), Ok(()));
        assert_eq!(validate_value(ConfigValueType::String, Some("anything")), Ok(()));
        assert_eq!(
            validate_value(ConfigValueType::Unrecognized(0), Some("x")),
            Err(ValueValidationError::InvalidValueType)
        );
    }

    #[test]
    fn error_text_is_operator_facing() {
        assert_eq!(
            ValueValidationError::InvalidBoolean.to_string(),
            "Invalid value. Please enter true or false."
        );
        assert_eq!(ValueValidationError::InvalidValueType.to_string(), "Invalid value type");
    }
}
