//! # Ledger Records Crate
//!
//! Domain types shared across the ledger workspace: the open-shaped
//! [`TransactionRecord`] and the [`RecordId`] canonical identifier used for
//! every lookup comparison.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: record-level types are defined here and
//!   nowhere else.
//! - **Opaque Payloads**: everything except the identifier field is carried
//!   untouched; the store never interprets amounts, counterparties, or
//!   timestamps.
//! - **Canonical Equality**: identifiers of any scalar type compare through
//!   their canonical string form, so `1` and `"1"` resolve identically.

pub mod errors;
pub mod id;
pub mod record;
pub mod samples;

pub use errors::RecordError;
pub use id::RecordId;
pub use record::{TransactionRecord, ID_FIELD};
