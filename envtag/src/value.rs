//! Coercion of resolved strings into leaf field types

use crate::duration::parse_duration;
use crate::error::ParseError;
use std::time::Duration;

mod sealed {
    pub trait Sealed {}
}

/// A leaf type that can be assigned from a string.
///
/// Implemented for `String`, `bool`, `f32`, `f64`, signed integers,
/// [`Duration`] and `Option<T>` of any of these, nested to any depth.
/// The set is closed.
pub trait EnvValue: sealed::Sealed {
    /// Parse `value` and store it in `self`.
    ///
    /// On error `self` is left unchanged.
    fn set_env(&mut self, value: &str) -> Result<(), ParseError>;
}

impl sealed::Sealed for String {}

impl EnvValue for String {
    fn set_env(&mut self, value: &str) -> Result<(), ParseError> {
        value.clone_into(self);
        Ok(())
    }
}

impl sealed::Sealed for bool {}

impl EnvValue for bool {
    fn set_env(&mut self, value: &str) -> Result<(), ParseError> {
        *self = match value {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => true,
            "0" | "f" | "F" | "FALSE" | "false" | "False" => false,
            _ => return Err(ParseError::Bool(value.to_string())),
        };
        Ok(())
    }
}

impl sealed::Sealed for Duration {}

impl EnvValue for Duration {
    fn set_env(&mut self, value: &str) -> Result<(), ParseError> {
        *self = parse_duration(value)?;
        Ok(())
    }
}

macro_rules! impl_from_str {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl EnvValue for $ty {
                fn set_env(&mut self, value: &str) -> Result<(), ParseError> {
                    *self = value.parse::<$ty>()?;
                    Ok(())
                }
            }
        )*
    };
}

impl_from_str!(i8, i16, i32, i64, isize);

/// Whether `value` spells infinity or NaN rather than overflowing into it.
fn is_non_finite_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|literal| unsigned.eq_ignore_ascii_case(literal))
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl EnvValue for $ty {
                fn set_env(&mut self, value: &str) -> Result<(), ParseError> {
                    let parsed = value.parse::<$ty>()?;
                    if !parsed.is_finite() && !is_non_finite_literal(value) {
                        return Err(ParseError::OutOfRange(value.to_string()));
                    }
                    *self = parsed;
                    Ok(())
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl<T: EnvValue + Default> sealed::Sealed for Option<T> {}

impl<T: EnvValue + Default> EnvValue for Option<T> {
    /// Populate a fresh inner value and attach it only once it parsed.
    fn set_env(&mut self, value: &str) -> Result<(), ParseError> {
        let mut inner = T::default();
        inner.set_env(value)?;
        *self = Some(inner);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<T: EnvValue + Default>(value: &str) -> Result<T, ParseError> {
        let mut target = T::default();
        target.set_env(value)?;
        Ok(target)
    }

    #[test]
    fn test_string_verbatim() {
        assert_eq!(set::<String>("/home/test").unwrap(), "/home/test");
        assert_eq!(set::<String>("").unwrap(), "");
        assert_eq!(set::<String>(" padded ").unwrap(), " padded ");
    }

    #[test]
    fn test_bool_literals() {
        for literal in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(set::<bool>(literal).unwrap(), "{literal}");
        }
        for literal in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!set::<bool>(literal).unwrap(), "{literal}");
        }
        assert!(matches!(set::<bool>("yes"), Err(ParseError::Bool(_))));
        assert!(matches!(set::<bool>("tRUE"), Err(ParseError::Bool(_))));
    }

    #[test]
    fn test_floats() {
        assert_eq!(set::<f32>("2.3").unwrap(), 2.3f32);
        assert_eq!(set::<f64>("4.5").unwrap(), 4.5);
        assert!(matches!(set::<f64>("four"), Err(ParseError::Float(_))));
    }

    #[test]
    fn test_float_overflow_is_rejected() {
        assert!(matches!(set::<f64>("1e400"), Err(ParseError::OutOfRange(_))));
        assert!(matches!(set::<f32>("1e40"), Err(ParseError::OutOfRange(_))));
        assert!(matches!(set::<f32>("-1e40"), Err(ParseError::OutOfRange(_))));
        // In range for f64, not for f32
        assert_eq!(set::<f64>("1e40").unwrap(), 1e40);
    }

    #[test]
    fn test_float_non_finite_literals() {
        assert_eq!(set::<f64>("inf").unwrap(), f64::INFINITY);
        assert_eq!(set::<f32>("-Infinity").unwrap(), f32::NEG_INFINITY);
        assert!(set::<f64>("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_failed_float_keeps_previous_value() {
        let mut target = 1.5f32;
        assert!(target.set_env("1e40").is_err());
        assert_eq!(target, 1.5);
    }

    #[test]
    fn test_signed_integers() {
        assert_eq!(set::<i64>("-42").unwrap(), -42);
        assert_eq!(set::<isize>("+7").unwrap(), 7);
        assert!(matches!(set::<i32>("1.0"), Err(ParseError::Int(_))));
        assert!(matches!(set::<i8>("128"), Err(ParseError::Int(_))));
    }

    #[test]
    fn test_duration() {
        assert_eq!(set::<Duration>("5s").unwrap(), Duration::from_secs(5));
        assert!(matches!(
            set::<Duration>("notaduration"),
            Err(ParseError::Duration(_))
        ));
    }

    #[test]
    fn test_option_present_but_empty() {
        assert_eq!(set::<Option<String>>("").unwrap(), Some(String::new()));
    }

    #[test]
    fn test_nested_option() {
        assert_eq!(
            set::<Option<Option<String>>>("").unwrap(),
            Some(Some(String::new()))
        );
        assert_eq!(set::<Option<Option<Option<i32>>>>("3").unwrap(), Some(Some(Some(3))));
    }

    #[test]
    fn test_failed_option_stays_unset() {
        let mut target: Option<i32> = None;
        assert!(target.set_env("one").is_err());
        assert_eq!(target, None);
    }

    #[test]
    fn test_failed_scalar_keeps_previous_value() {
        let mut target = 9i32;
        assert!(target.set_env("nine").is_err());
        assert_eq!(target, 9);
    }
}
