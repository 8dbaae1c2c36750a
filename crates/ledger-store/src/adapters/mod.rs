//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod json_file;

pub use json_file::JsonFileRepository;
