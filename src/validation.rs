//! Request validation boundary.
//!
//! Turns a raw text and shift parameter into a [`CipherRequest`] the
//! cipher can consume. Checks run in a fixed order: shift parse, shift
//! range, then empty text. A request with both a bad shift and no text
//! reports the shift.

use serde::Deserialize;

use crate::cipher::{transform, Direction};
use crate::error::CaesarError;
use crate::shift::ShiftAmount;

/// Shift as supplied by a caller, before parsing.
///
/// JSON bodies may carry the shift as a number or as a numeric string.
/// Any other JSON value, `null` included, lands in `Other` and is
/// rejected as unparseable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ShiftParam {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl ShiftParam {
    /// Parses the parameter into a validated shift.
    ///
    /// # Errors
    /// [`CaesarError::InvalidShift`] for anything that is not an integer
    /// (including non-integral floats), [`CaesarError::ShiftOutOfRange`]
    /// for integers outside [1, 25].
    pub fn parse(&self) -> Result<ShiftAmount, CaesarError> {
        match self {
            ShiftParam::Integer(value) => ShiftAmount::new(*value),
            ShiftParam::Float(value) => {
                if value.fract() == 0.0 && value.is_finite() {
                    ShiftAmount::new(*value as i64)
                } else {
                    Err(CaesarError::InvalidShift(value.to_string()))
                }
            }
            ShiftParam::Text(text) => text.parse(),
            ShiftParam::Other(value) => Err(CaesarError::InvalidShift(value.to_string())),
        }
    }
}

impl From<i64> for ShiftParam {
    fn from(value: i64) -> Self {
        ShiftParam::Integer(value)
    }
}

impl From<&str> for ShiftParam {
    fn from(value: &str) -> Self {
        ShiftParam::Text(value.to_string())
    }
}

/// Validated input ready for [`transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherRequest {
    pub text: String,
    pub shift: ShiftAmount,
}

impl CipherRequest {
    /// Runs the cipher over the validated text.
    pub fn apply(&self, direction: Direction) -> String {
        transform(&self.text, self.shift, direction)
    }
}

/// Validates a raw request.
///
/// A missing shift falls back to `default_shift`.
///
/// # Errors
/// The first failing check as a [`CaesarError`].
///
/// # Examples
///
/// ```
/// use caesarcrypt::{validate, CaesarError, ShiftAmount, ShiftParam};
///
/// let req = validate("abc", Some(&ShiftParam::from(3)), ShiftAmount::DEFAULT).unwrap();
/// assert_eq!(req.shift.get(), 3);
///
/// assert_eq!(
///     validate("", Some(&ShiftParam::from(3)), ShiftAmount::DEFAULT),
///     Err(CaesarError::EmptyInput)
/// );
/// ```
pub fn validate(
    text: &str,
    shift: Option<&ShiftParam>,
    default_shift: ShiftAmount,
) -> Result<CipherRequest, CaesarError> {
    let shift = match shift {
        Some(param) => param.parse()?,
        None => default_shift,
    };
    if text.is_empty() {
        return Err(CaesarError::EmptyInput);
    }
    Ok(CipherRequest {
        text: text.to_string(),
        shift,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_integer_shift() {
        let req = validate("Hello", Some(&ShiftParam::from(25)), ShiftAmount::DEFAULT).unwrap();
        assert_eq!(req.shift, ShiftAmount::MAX);
        assert_eq!(req.text, "Hello");
    }

    #[test]
    fn test_missing_shift_uses_default() {
        let req = validate("Hello", None, ShiftAmount::new(8).unwrap()).unwrap();
        assert_eq!(req.shift.get(), 8);
    }

    #[test]
    fn test_numeric_string_shift() {
        let req = validate("Hello", Some(&ShiftParam::from("12")), ShiftAmount::DEFAULT).unwrap();
        assert_eq!(req.shift.get(), 12);
    }

    #[test]
    fn test_parse_error() {
        assert_eq!(
            validate("Hello", Some(&ShiftParam::from("five")), ShiftAmount::DEFAULT),
            Err(CaesarError::InvalidShift("five".to_string()))
        );
        assert!(matches!(
            ShiftParam::Float(2.5).parse(),
            Err(CaesarError::InvalidShift(_))
        ));
    }

    #[test]
    fn test_integral_float_accepted() {
        assert_eq!(ShiftParam::Float(4.0).parse().unwrap().get(), 4);
    }

    #[test]
    fn test_range_error_boundaries() {
        for bad in [0, 26, -1, 100] {
            assert_eq!(
                validate("Hello", Some(&ShiftParam::from(bad)), ShiftAmount::DEFAULT),
                Err(CaesarError::ShiftOutOfRange(bad))
            );
        }
        for good in [1, 25] {
            assert!(validate("Hello", Some(&ShiftParam::from(good)), ShiftAmount::DEFAULT).is_ok());
        }
    }

    #[test]
    fn test_empty_text_rejected_with_valid_shift() {
        assert_eq!(
            validate("", Some(&ShiftParam::from(3)), ShiftAmount::DEFAULT),
            Err(CaesarError::EmptyInput)
        );
        assert_eq!(validate("", None, ShiftAmount::DEFAULT), Err(CaesarError::EmptyInput));
    }

    #[test]
    fn test_shift_error_reported_before_empty_text() {
        assert_eq!(
            validate("", Some(&ShiftParam::from(0)), ShiftAmount::DEFAULT),
            Err(CaesarError::ShiftOutOfRange(0))
        );
    }

    #[test]
    fn test_deserialize_untagged() {
        let p: ShiftParam = serde_json::from_str("7").unwrap();
        assert_eq!(p, ShiftParam::Integer(7));
        let p: ShiftParam = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(p, ShiftParam::Text("7".to_string()));
        let p: ShiftParam = serde_json::from_str("7.5").unwrap();
        assert_eq!(p, ShiftParam::Float(7.5));
    }

    #[test]
    fn test_non_scalar_values_are_parse_errors() {
        for raw in ["null", "true", "[3]", "{\"n\":3}"] {
            let p: ShiftParam = serde_json::from_str(raw).unwrap();
            assert!(matches!(p, ShiftParam::Other(_)), "{} not caught", raw);
            assert_eq!(p.parse(), Err(CaesarError::InvalidShift(raw.to_string())));
        }
    }

    #[test]
    fn test_apply() {
        let req = validate("HELLO", Some(&ShiftParam::from(3)), ShiftAmount::DEFAULT).unwrap();
        assert_eq!(req.apply(Direction::Encode), "KHOOR");
        assert_eq!(req.apply(Direction::Decode), "EBIIL");
    }
}
