//! Reusable field validators
//!
//! Type extractors pull a typed value out of an untyped field. Constraint
//! validators are small closures applied to the typed value afterwards, so a
//! field only gets range or length checks once its type is known.

use super::violation::Violation;
use serde_json::Value;

/// Extract a required number
pub fn number_field(field: &str, value: Option<&Value>) -> Result<f64, Violation> {
    value
        .and_then(Value::as_f64)
        .ok_or_else(|| Violation::invalid_type(field, "number", value))
}

/// Extract a required string
pub fn string_field<'a>(field: &str, value: Option<&'a Value>) -> Result<&'a str, Violation> {
    value
        .and_then(Value::as_str)
        .ok_or_else(|| Violation::invalid_type(field, "string", value))
}

/// Validator: number must be strictly greater than zero
pub fn positive(
    message: &'static str,
) -> impl Fn(&str, f64) -> Result<(), Violation> + Send + Sync + Clone {
    move |field: &str, num: f64| {
        if num > 0.0 {
            Ok(())
        } else {
            Err(Violation::too_small(field, "number", 0.0, false, message))
        }
    }
}

/// Validator: string must have at least `min` characters
pub fn min_length(
    min: usize,
    message: &'static str,
) -> impl Fn(&str, &str) -> Result<(), Violation> + Send + Sync + Clone {
    move |field: &str, s: &str| {
        if s.chars().count() < min {
            Err(Violation::too_small(field, "string", min as f64, true, message))
        } else {
            Ok(())
        }
    }
}

/// Validator: string must have at most `max` characters
pub fn max_length(
    max: usize,
    message: &'static str,
) -> impl Fn(&str, &str) -> Result<(), Violation> + Send + Sync + Clone {
    move |field: &str, s: &str| {
        if s.chars().count() > max {
            Err(Violation::too_big(field, "string", max as f64, true, message))
        } else {
            Ok(())
        }
    }
}

/// Validator: string must have exactly `len` characters
pub fn exact_length(
    len: usize,
    message: &'static str,
) -> impl Fn(&str, &str) -> Result<(), Violation> + Send + Sync + Clone {
    move |field: &str, s: &str| {
        let count = s.chars().count();
        if count < len {
            Err(Violation::too_small(field, "string", len as f64, true, message).exact())
        } else if count > len {
            Err(Violation::too_big(field, "string", len as f64, true, message).exact())
        } else {
            Ok(())
        }
    }
}
