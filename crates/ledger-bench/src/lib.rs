//! # Lookup Benchmark Subsystem
//!
//! Measures the record store's two lookup strategies against each other and
//! reports structured, comparative results:
//!
//! - [`measure`]: aggregate timing over repeated lookups, yielding totals,
//!   per-operation times, and a speedup factor.
//! - [`compare`]: one timed call of each strategy per probe identifier, for
//!   case-by-case demonstration.
//! - [`describe_footprint`]: shallow byte sizes of the two containers, so
//!   the space cost of maintaining the index can be quantified.
//!
//! Everything here is read-only over the store and strictly sequential;
//! the two strategies' timing loops are never interleaved, keeping each
//! measurement attributable to a single strategy. The reporting layer owns
//! all text formatting; this crate returns data only.

pub mod footprint;
pub mod measure;

pub use footprint::{describe_footprint, FootprintReport};
pub use measure::{compare, measure, representative_ids, BenchmarkResult, LookupCase};
