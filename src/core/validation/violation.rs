//! Field-level validation issues
//!
//! Violations serialize in the shape clients already parse from the payment
//! API: a `code`, the offending `path`, a `message`, and the constraint that
//! was broken.

use serde::Serialize;
use serde_json::Value;

/// Kind of constraint that was broken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// Value missing or of the wrong JSON type
    InvalidType,
    /// Number or length under the lower bound
    TooSmall,
    /// Number or length over the upper bound
    TooBig,
}

/// A single field-level validation issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub code: ViolationCode,

    /// Path to the offending field, e.g. `["amount"]`
    pub path: Vec<String>,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,

    /// Bounded value kind: `"number"` or `"string"`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl Violation {
    fn base(code: ViolationCode, field: &str, message: impl Into<String>) -> Self {
        Self {
            code,
            path: vec![field.to_string()],
            message: message.into(),
            expected: None,
            received: None,
            minimum: None,
            maximum: None,
            inclusive: None,
            exact: None,
            kind: None,
        }
    }

    /// The field is absent or has the wrong JSON type
    pub fn invalid_type(field: &str, expected: &'static str, value: Option<&Value>) -> Self {
        let received = received_type(value);
        let message = if value.is_none() {
            "Required".to_string()
        } else {
            format!("Expected {}, received {}", expected, received)
        };

        Self {
            expected: Some(expected.to_string()),
            received: Some(received.to_string()),
            ..Self::base(ViolationCode::InvalidType, field, message)
        }
    }

    /// The value is under `minimum` (`inclusive` tells whether equality passes)
    pub fn too_small(
        field: &str,
        kind: &'static str,
        minimum: f64,
        inclusive: bool,
        message: impl Into<String>,
    ) -> Self {
        Self {
            minimum: Some(minimum),
            inclusive: Some(inclusive),
            exact: Some(false),
            kind: Some(kind),
            ..Self::base(ViolationCode::TooSmall, field, message)
        }
    }

    /// The value is over `maximum` (`inclusive` tells whether equality passes)
    pub fn too_big(
        field: &str,
        kind: &'static str,
        maximum: f64,
        inclusive: bool,
        message: impl Into<String>,
    ) -> Self {
        Self {
            maximum: Some(maximum),
            inclusive: Some(inclusive),
            exact: Some(false),
            kind: Some(kind),
            ..Self::base(ViolationCode::TooBig, field, message)
        }
    }

    /// Mark a length violation as coming from an exact-length rule
    pub fn exact(mut self) -> Self {
        self.exact = Some(true);
        self
    }

    /// The first path segment, which is the field name for flat payloads
    pub fn field(&self) -> &str {
        self.path.first().map(String::as_str).unwrap_or_default()
    }
}

/// JSON type name of a value as reported in `received`
fn received_type(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
