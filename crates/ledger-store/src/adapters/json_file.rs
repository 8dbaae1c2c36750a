//! # Flat-File JSON Repository
//!
//! [`RecordRepository`] implementation over a single JSON document. Accepts
//! both a bare array of records and an object wrapping the array under a
//! `"transactions"` key, matching the two shapes the ingestion pipeline
//! produces.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use ledger_records::TransactionRecord;

use crate::ports::outbound::{RecordRepository, RepositoryError};

/// A record repository backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn entries(document: Value) -> Result<Vec<Value>, RepositoryError> {
        match document {
            Value::Array(entries) => Ok(entries),
            Value::Object(mut map) => match map.remove("transactions") {
                Some(Value::Array(entries)) => Ok(entries),
                _ => Err(RepositoryError::InvalidFormat),
            },
            _ => Err(RepositoryError::InvalidFormat),
        }
    }
}

impl RecordRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<TransactionRecord>, RepositoryError> {
        let text = fs::read_to_string(&self.path)?;
        let document: Value = serde_json::from_str(&text)?;

        let records = Self::entries(document)?
            .into_iter()
            .map(TransactionRecord::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            path = %self.path.display(),
            records = records.len(),
            "loaded record sequence"
        );
        Ok(records)
    }

    fn save(&self, records: &[TransactionRecord]) -> Result<(), RepositoryError> {
        let text = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, text)?;
        debug!(
            path = %self.path.display(),
            records = records.len(),
            "saved record sequence"
        );
        Ok(())
    }
}
