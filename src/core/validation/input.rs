//! Untrusted input as received at the HTTP boundary

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Raw input that has not been checked against any schema
///
/// Request bodies and query strings arrive in this form. Nothing downstream
/// may assume a shape until the validator has produced a typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum UnvalidatedInput {
    /// A JSON object, fields still untyped
    Object(Map<String, Value>),
    /// Well-formed JSON that is not an object
    Other(Value),
    /// Input that could not be parsed as JSON at all
    Malformed(String),
}

impl UnvalidatedInput {
    /// Parse a raw body
    ///
    /// An empty body is treated as `{}`, so it reports missing fields rather
    /// than a parse failure.
    pub fn from_body(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::Object(Map::new());
        }

        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(e) => Self::Malformed(e.to_string()),
        }
    }

    /// Wrap an already-parsed JSON value
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(map),
            other => Self::Other(other),
        }
    }

    /// Build from query-string parameters (values are always strings)
    pub fn from_query(params: HashMap<String, String>) -> Self {
        Self::Object(
            params
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        )
    }

    /// Look up a top-level field; non-object inputs have no fields
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Object(map) => map.get(name),
            Self::Other(_) | Self::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl Default for UnvalidatedInput {
    fn default() -> Self {
        Self::Object(Map::new())
    }
}
