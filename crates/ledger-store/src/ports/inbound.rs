//! # Inbound Ports (Driving Ports)
//!
//! Public API exposed by the record store subsystem.

use serde_json::{Map, Value};

use ledger_records::{RecordId, TransactionRecord};

use crate::domain::{RecordStore, StoreError};

/// Primary API for the record store subsystem.
///
/// This is the seam a serving layer consumes: it translates `None` into its
/// own not-found signaling and [`StoreError`] into its own error responses.
/// All operations are synchronous and non-blocking; callers serialize access
/// to a given store instance.
pub trait RecordStoreApi {
    /// Resolve an identifier by sequential scan (first match).
    fn scan_lookup(&self, id: &RecordId) -> Option<&TransactionRecord>;

    /// Resolve an identifier through the direct-access index (last match
    /// for duplicated identifiers).
    fn indexed_lookup(&self, id: &RecordId) -> Option<&TransactionRecord>;

    /// Append a record, assigning an identifier when it lacks one.
    /// Returns the finalized record.
    fn append(&mut self, record: TransactionRecord) -> Result<TransactionRecord, StoreError>;

    /// Fully replace the record at an identifier, preserving its sequence
    /// position. Fails with [`StoreError::NotFound`] when absent.
    fn replace(
        &mut self,
        id: &RecordId,
        fields: Map<String, Value>,
    ) -> Result<TransactionRecord, StoreError>;

    /// Remove the first record with an identifier. Fails with
    /// [`StoreError::NotFound`] when absent.
    fn remove(&mut self, id: &RecordId) -> Result<TransactionRecord, StoreError>;
}

impl RecordStoreApi for RecordStore {
    fn scan_lookup(&self, id: &RecordId) -> Option<&TransactionRecord> {
        RecordStore::scan_lookup(self, id)
    }

    fn indexed_lookup(&self, id: &RecordId) -> Option<&TransactionRecord> {
        RecordStore::indexed_lookup(self, id)
    }

    fn append(&mut self, record: TransactionRecord) -> Result<TransactionRecord, StoreError> {
        RecordStore::append(self, record)
    }

    fn replace(
        &mut self,
        id: &RecordId,
        fields: Map<String, Value>,
    ) -> Result<TransactionRecord, StoreError> {
        RecordStore::replace(self, id, fields)
    }

    fn remove(&mut self, id: &RecordId) -> Result<TransactionRecord, StoreError> {
        RecordStore::remove(self, id)
    }
}
