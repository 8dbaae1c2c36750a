//! # Footprint Reporting
//!
//! Shallow byte-size figures for the store's two containers. The numbers are
//! container-level estimates (allocated capacity times element size, plus
//! index key heap bytes), mirroring what shallow sizing exposes; record
//! payload heap data is shared by both strategies and deliberately excluded.
//! Informational only: no decision logic consumes these figures.

use std::collections::HashMap;
use std::mem::size_of;

use ledger_records::TransactionRecord;
use ledger_store::RecordStore;

/// Shallow sizes of the sequence and index containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootprintReport {
    /// Records in the sequence.
    pub record_count: usize,
    /// Entries in the index.
    pub index_entries: usize,
    /// Shallow bytes of the sequence container (header plus capacity).
    pub sequence_bytes: usize,
    /// Shallow bytes of the index container (header plus capacity).
    pub index_bytes: usize,
    /// Heap bytes of the canonical identifier keys the index references.
    pub index_key_bytes: usize,
}

impl FootprintReport {
    /// Total extra bytes spent on the direct-access strategy.
    pub fn index_overhead_bytes(&self) -> usize {
        self.index_bytes + self.index_key_bytes
    }
}

/// Describe the store's container footprint.
pub fn describe_footprint(store: &RecordStore) -> FootprintReport {
    let sequence_bytes = size_of::<Vec<TransactionRecord>>()
        + store.sequence_capacity() * size_of::<TransactionRecord>();

    let index_bytes = size_of::<HashMap<String, usize>>()
        + store.index_capacity() * (size_of::<String>() + size_of::<usize>());

    let index_key_bytes = store.index_keys().map(str::len).sum();

    FootprintReport {
        record_count: store.len(),
        index_entries: store.index_len(),
        sequence_bytes,
        index_bytes,
        index_key_bytes,
    }
}
