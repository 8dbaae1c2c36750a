//! # Timing Measurements
//!
//! Wall-clock comparison of the scan and indexed strategies over identical
//! repeated queries.

use std::hint::black_box;
use std::time::{Duration, Instant};

use ledger_records::RecordId;
use ledger_store::RecordStore;

/// Aggregate timing of both strategies over repeated identical lookups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkResult {
    /// Number of lookups timed per strategy.
    pub iterations: u32,
    /// Total wall-clock time across all scan lookups.
    pub scan_total: Duration,
    /// Total wall-clock time across all indexed lookups.
    pub index_total: Duration,
    /// Mean time per scan lookup.
    pub scan_per_op: Duration,
    /// Mean time per indexed lookup.
    pub index_per_op: Duration,
    /// `scan_total / index_total`; infinite when the indexed total is
    /// exactly zero.
    pub speedup_factor: f64,
}

/// Single-call comparison of both strategies for one identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupCase {
    /// The queried identifier.
    pub id: RecordId,
    /// Elapsed time of one scan lookup.
    pub scan_elapsed: Duration,
    /// Elapsed time of one indexed lookup.
    pub index_elapsed: Duration,
    /// `scan_elapsed / index_elapsed`; infinite when the indexed call
    /// measured zero.
    pub ratio: f64,
    /// Whether the scan strategy found a record.
    pub scan_found: bool,
    /// Whether the indexed strategy found a record.
    pub index_found: bool,
}

/// Time `iterations` lookups of `id` per strategy, back-to-back.
///
/// The scan loop runs to completion before the indexed loop starts;
/// interleaving them would pollute the measurement with scheduler and cache
/// noise. Does not mutate the store, and never faults: an empty store or an
/// absent identifier simply measures not-found lookups.
pub fn measure(store: &RecordStore, id: &RecordId, iterations: u32) -> BenchmarkResult {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(store.scan_lookup(black_box(id)));
    }
    let scan_total = start.elapsed();

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(store.indexed_lookup(black_box(id)));
    }
    let index_total = start.elapsed();

    let per_op_divisor = iterations.max(1);
    BenchmarkResult {
        iterations,
        scan_total,
        index_total,
        scan_per_op: scan_total / per_op_divisor,
        index_per_op: index_total / per_op_divisor,
        speedup_factor: ratio_of(scan_total, index_total),
    }
}

/// Run both strategies once per identifier, recording each call's elapsed
/// time and whether it found a record.
pub fn compare(store: &RecordStore, ids: &[RecordId]) -> Vec<LookupCase> {
    ids.iter()
        .map(|id| {
            let start = Instant::now();
            let scan_result = black_box(store.scan_lookup(black_box(id)));
            let scan_elapsed = start.elapsed();
            let scan_found = scan_result.is_some();

            let start = Instant::now();
            let index_result = black_box(store.indexed_lookup(black_box(id)));
            let index_elapsed = start.elapsed();
            let index_found = index_result.is_some();

            LookupCase {
                id: id.clone(),
                scan_elapsed,
                index_elapsed,
                ratio: ratio_of(scan_elapsed, index_elapsed),
                scan_found,
                index_found,
            }
        })
        .collect()
}

/// Representative probe identifiers: the first, middle, and last records in
/// sequence order (deduplicated for small stores; empty for an empty store).
pub fn representative_ids(store: &RecordStore) -> Vec<RecordId> {
    let records = store.records();
    if records.is_empty() {
        return Vec::new();
    }

    let mut ids = Vec::with_capacity(3);
    for pos in [0, records.len() / 2, records.len() - 1] {
        if let Ok(id) = records[pos].canonical_id() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

fn ratio_of(scan: Duration, index: Duration) -> f64 {
    if index.is_zero() {
        f64::INFINITY
    } else {
        scan.as_secs_f64() / index.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_records::samples;

    fn sample_store(count: usize) -> RecordStore {
        RecordStore::from_records(samples::sample_records(count)).unwrap()
    }

    #[test]
    fn test_representative_ids_pick_first_middle_last() {
        let store = sample_store(100);
        let ids = representative_ids(&store);
        assert_eq!(
            ids,
            vec![RecordId::from(1), RecordId::from(51), RecordId::from(100)]
        );
    }

    #[test]
    fn test_representative_ids_deduplicate_small_stores() {
        let store = sample_store(1);
        assert_eq!(representative_ids(&store), vec![RecordId::from(1)]);

        let store = RecordStore::from_records(vec![]).unwrap();
        assert!(representative_ids(&store).is_empty());
    }

    #[test]
    fn test_measure_zero_iterations_is_deterministic() {
        let store = sample_store(10);
        let result = measure(&store, &RecordId::from(5), 0);

        assert_eq!(result.iterations, 0);
        assert_eq!(result.scan_total, Duration::ZERO);
        assert_eq!(result.index_total, Duration::ZERO);
        assert!(result.speedup_factor.is_infinite());
    }

    #[test]
    fn test_compare_reports_found_flags() {
        let store = sample_store(10);
        let cases = compare(&store, &[RecordId::from(3), RecordId::from(99)]);

        assert_eq!(cases.len(), 2);
        assert!(cases[0].scan_found && cases[0].index_found);
        assert!(!cases[1].scan_found && !cases[1].index_found);
    }
}
