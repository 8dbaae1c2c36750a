//! # Transaction Records
//!
//! A [`TransactionRecord`] is an open mapping from field name to JSON value
//! with exactly one designated identifier field. The store reads only the
//! identifier; every other field is opaque payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{json_kind, RecordError};
use crate::id::RecordId;

/// Name of the designated identifier field.
pub const ID_FIELD: &str = "id";

/// A single transaction record: an open field map carrying one identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionRecord {
    fields: Map<String, Value>,
}

impl TransactionRecord {
    /// Wrap a JSON object map as a record.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Convert an arbitrary JSON value into a record.
    ///
    /// Only objects qualify; anything else is rejected at the ingestion
    /// boundary before reaching the store.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(RecordError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }

    /// The raw identifier value, if the record carries one.
    ///
    /// A null identifier counts as absent: the store will assign one on
    /// append.
    pub fn id_value(&self) -> Option<&Value> {
        self.fields.get(ID_FIELD).filter(|v| !v.is_null())
    }

    /// Canonicalize this record's identifier.
    pub fn canonical_id(&self) -> Result<RecordId, RecordError> {
        let value = self.id_value().ok_or(RecordError::MissingIdentifier)?;
        RecordId::canonicalize(value)
    }

    /// Whether this record's identifier canonicalizes to `id`.
    ///
    /// Records without a canonicalizable identifier match nothing.
    pub fn matches(&self, id: &RecordId) -> bool {
        self.canonical_id().map_or(false, |own| own == *id)
    }

    /// Read a payload field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Write a payload field, overwriting any existing value.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// Borrow the underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the record, yielding its field map.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for TransactionRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
