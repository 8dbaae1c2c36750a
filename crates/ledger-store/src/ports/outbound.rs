//! # Outbound Ports (Driven Ports)
//!
//! Contracts the record store expects its persistence collaborators to
//! implement. The store itself gives no durability guarantees; backends are
//! reached through this load/save seam only.

use ledger_records::{RecordError, TransactionRecord};
use thiserror::Error;

/// Synchronous load/save contract over an ordered record sequence.
///
/// Implementations decide the storage medium (flat file, relational engine);
/// the store only requires that `load` yields records in a stable order and
/// that `save` persists the full sequence.
pub trait RecordRepository {
    /// Load the full record sequence.
    fn load(&self) -> Result<Vec<TransactionRecord>, RepositoryError>;

    /// Persist the full record sequence, replacing previous contents.
    fn save(&self, records: &[TransactionRecord]) -> Result<(), RepositoryError>;
}

/// Errors that can occur in a repository implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document is not valid JSON.
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The stored document has an unsupported shape.
    #[error("unsupported document shape: expected an array or an object with a \"transactions\" array")]
    InvalidFormat,

    /// An entry in the document is not a valid record.
    #[error(transparent)]
    Record(#[from] RecordError),
}
