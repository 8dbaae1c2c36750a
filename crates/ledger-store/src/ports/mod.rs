//! # Ports Layer
//!
//! Boundary traits for the record store subsystem:
//!
//! - **Inbound**: [`RecordStoreApi`], the surface a serving layer consumes.
//! - **Outbound**: [`RecordRepository`], the load/save contract persistence
//!   collaborators implement.

pub mod inbound;
pub mod outbound;

pub use inbound::RecordStoreApi;
pub use outbound::{RecordRepository, RepositoryError};
