//! # Record Errors
//!
//! Error types for record construction and identifier canonicalization.

use thiserror::Error;

/// Errors that can occur at the record level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The identifier value has no defined canonical string form
    /// (composite values cannot act as identifiers).
    #[error("identifier has no canonical string form: {kind} value")]
    InvalidIdentifier {
        /// JSON type name of the offending value.
        kind: &'static str,
    },

    /// The record carries no value under the identifier field.
    #[error("record carries no identifier field")]
    MissingIdentifier,

    /// A record must be a JSON object.
    #[error("record must be a JSON object, got {kind}")]
    NotAnObject {
        /// JSON type name of the offending value.
        kind: &'static str,
    },
}

/// JSON type name used in error payloads.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
