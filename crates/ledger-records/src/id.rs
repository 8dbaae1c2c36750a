//! # Canonical Identifiers
//!
//! [`RecordId`] is the canonical string form of a record's identifier field.
//! All equality comparisons between identifiers go through this form, which
//! lets a store holding a mix of integer- and string-typed identifiers still
//! resolve lookups correctly.

use std::fmt;

use serde_json::Value;

use crate::errors::{json_kind, RecordError};

/// Canonical string form of a record identifier.
///
/// Two identifiers compare equal iff their canonical strings are equal, so
/// the JSON number `1` and the JSON string `"1"` denote the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Canonicalize a scalar JSON value into an identifier.
    ///
    /// Strings pass through unchanged; numbers and booleans use their
    /// display form. Composite values (arrays, objects) and null have no
    /// defined string form and are rejected.
    pub fn canonicalize(value: &Value) -> Result<Self, RecordError> {
        match value {
            Value::String(s) => Ok(Self(s.clone())),
            Value::Number(n) => Ok(Self(n.to_string())),
            Value::Bool(b) => Ok(Self(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => Err(
                RecordError::InvalidIdentifier {
                    kind: json_kind(value),
                },
            ),
        }
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, yielding its canonical string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Parse the canonical form as an integer, when it is one.
    ///
    /// Used by the store's next-id assignment policy; non-numeric
    /// identifiers simply do not participate in that maximum.
    pub fn as_numeric(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
