//! # Record Store Subsystem
//!
//! The store is the system's authority for resolving a transaction record by
//! identifier. It owns an ordered sequence of records plus a derived index
//! from canonical identifier to sequence position, and exposes two competing
//! lookup strategies over the same data:
//!
//! - **Sequential scan**: walk the sequence from the front, comparing each
//!   record's canonical identifier. O(n) worst case, no extra space.
//! - **Direct-access index**: one hash map probe. Amortized O(1), at the cost
//!   of maintaining the index alongside every mutation.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | 1 | Index completeness | One entry per distinct canonical id in the sequence, after every mutation |
//! | 2 | Last-wins index | Each entry points at the *last* record in sequence order with that id |
//! | 3 | Scan-first asymmetry | Scan returns the *first* duplicate while the index returns the last; intentional and tested, never "fixed" |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): the store itself, no I/O dependencies
//! - **Ports Layer** (`ports/`): inbound API trait, outbound load/save contract
//! - **Adapters Layer** (`adapters/`): flat-file JSON repository

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::{RecordStore, StoreError, StoreStats};
pub use ports::{RecordRepository, RecordStoreApi, RepositoryError};

pub use adapters::JsonFileRepository;
