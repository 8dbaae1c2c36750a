//! # Domain Errors
//!
//! Error types for record-store operations. All failures are typed and
//! recoverable; no operation aborts the process.

use ledger_records::RecordError;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the given identifier exists in the store.
    #[error("no record with identifier {id}")]
    NotFound {
        /// Canonical form of the missing identifier.
        id: String,
    },

    /// A record-level failure, typically an identifier with no canonical
    /// string form.
    #[error(transparent)]
    Record(#[from] RecordError),
}
