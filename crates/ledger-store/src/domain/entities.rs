//! # Domain Entities
//!
//! The [`RecordStore`]: an ordered sequence of transaction records plus a
//! derived canonical-id index, kept consistent through every mutation.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

use ledger_records::{RecordId, TransactionRecord, ID_FIELD};

use super::errors::StoreError;

/// A queryable collection of transaction records.
///
/// The store owns both structures exclusively:
///
/// - `records`: insertion-ordered sequence, traversed by the scan strategy.
/// - `index`: canonical id → sequence position, probed by the direct-access
///   strategy.
///
/// ## Invariants
///
/// After any mutation, the index holds exactly one entry per distinct
/// canonical id present in the sequence, pointing at the *last* record in
/// sequence order carrying that id. Duplicate ids silently shadow earlier
/// ones in the index, while [`RecordStore::scan_lookup`] returns the *first*
/// match. The asymmetry is intentional and covered by tests.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<TransactionRecord>,
    index: HashMap<String, usize>,
}

impl RecordStore {
    /// Build a store from an initial sequence, indexing in one pass with
    /// last-wins on duplicate identifiers.
    ///
    /// Fails when a record's identifier does not canonicalize; records are
    /// otherwise assumed already validated by the ingestion boundary.
    pub fn from_records(records: Vec<TransactionRecord>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            let id = record.canonical_id()?;
            index.insert(id.into_string(), pos);
        }
        debug!(
            records = records.len(),
            distinct_ids = index.len(),
            "record store indexed"
        );
        Ok(Self { records, index })
    }

    /// Resolve an identifier by walking the sequence from the front.
    ///
    /// Returns the *first* record whose canonical identifier equals `id`.
    /// Cost is proportional to the position of the first match, worst case
    /// the full store.
    pub fn scan_lookup(&self, id: &RecordId) -> Option<&TransactionRecord> {
        self.records.iter().find(|record| record.matches(id))
    }

    /// Resolve an identifier through the direct-access index.
    ///
    /// Amortized constant time, independent of store size. Agrees with
    /// [`RecordStore::scan_lookup`] for every unique identifier; for
    /// duplicated identifiers it returns the *last* occurrence instead of
    /// the first.
    pub fn indexed_lookup(&self, id: &RecordId) -> Option<&TransactionRecord> {
        self.index.get(id.as_str()).map(|&pos| &self.records[pos])
    }

    /// Append a record, assigning the next identifier when it lacks one.
    ///
    /// The next-id policy is one greater than the maximum numeric canonical
    /// identifier in the store, or 1 when none exists. Returns the finalized
    /// record.
    pub fn append(&mut self, mut record: TransactionRecord) -> Result<TransactionRecord, StoreError> {
        let id = match record.id_value() {
            Some(_) => record.canonical_id()?,
            None => {
                let next = self.next_id();
                record.set(ID_FIELD, Value::from(next));
                debug!(id = next, "assigned identifier to appended record");
                RecordId::from(next)
            }
        };

        let pos = self.records.len();
        self.records.push(record);
        self.index.insert(id.into_string(), pos);
        Ok(self.records[pos].clone())
    }

    /// Replace the record at `id` with a new field set, in place.
    ///
    /// The sequence position is preserved and the existing identifier value
    /// is retained regardless of what `fields` carries. With duplicated
    /// identifiers this operates on the indexed (last) occurrence. Fails
    /// with [`StoreError::NotFound`] when no record matches.
    pub fn replace(
        &mut self,
        id: &RecordId,
        fields: Map<String, Value>,
    ) -> Result<TransactionRecord, StoreError> {
        let pos = *self
            .index
            .get(id.as_str())
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        // Stored records always carry an id; the fallback keeps the
        // canonical form if one ever did not.
        let id_value = self.records[pos]
            .id_value()
            .cloned()
            .unwrap_or_else(|| Value::String(id.as_str().to_owned()));

        let mut replacement = TransactionRecord::new(fields);
        replacement.set(ID_FIELD, id_value);
        self.records[pos] = replacement;
        Ok(self.records[pos].clone())
    }

    /// Remove the *first* record with the given identifier.
    ///
    /// When other records share the identifier, the index entry is
    /// repointed to the last remaining duplicate in sequence order,
    /// preserving the last-wins invariant; otherwise the entry is dropped.
    /// Fails with [`StoreError::NotFound`] when no record matches.
    pub fn remove(&mut self, id: &RecordId) -> Result<TransactionRecord, StoreError> {
        let pos = self
            .records
            .iter()
            .position(|record| record.matches(id))
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        let removed = self.records.remove(pos);

        // Removal shifts every later record down one slot.
        for entry in self.index.values_mut() {
            if *entry > pos {
                *entry -= 1;
            }
        }

        match self.records.iter().rposition(|record| record.matches(id)) {
            Some(last) => {
                self.index.insert(id.as_str().to_owned(), last);
            }
            None => {
                self.index.remove(id.as_str());
            }
        }

        debug!(id = %id, "record removed");
        Ok(removed)
    }

    /// Number of records in the sequence.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the record sequence in insertion order.
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Store statistics.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            record_count: self.records.len(),
            distinct_ids: self.index.len(),
            shadowed_duplicates: self.records.len() - self.index.len(),
        }
    }

    /// Allocated capacity of the sequence container, for footprint reports.
    pub fn sequence_capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Allocated capacity of the index container, for footprint reports.
    pub fn index_capacity(&self) -> usize {
        self.index.capacity()
    }

    /// Number of index entries.
    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    /// The canonical identifier keys held by the index.
    pub fn index_keys(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    fn next_id(&self) -> i64 {
        self.records
            .iter()
            .filter_map(|record| record.canonical_id().ok())
            .filter_map(|id| id.as_numeric())
            .max()
            .map_or(1, |max| max + 1)
    }
}

/// Descriptive counts over the store's two structures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Records in the sequence.
    pub record_count: usize,
    /// Distinct canonical identifiers (index entries).
    pub distinct_ids: usize,
    /// Records shadowed in the index by a later duplicate.
    pub shadowed_duplicates: usize,
}
