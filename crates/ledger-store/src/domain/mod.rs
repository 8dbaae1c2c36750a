//! # Domain Layer
//!
//! Pure record-store logic: no I/O, no transport, no persistence.

pub mod entities;
pub mod errors;

pub use entities::{RecordStore, StoreStats};
pub use errors::StoreError;
