//! # Lookup Report
//!
//! Human-readable comparison of the two lookup strategies over a real or
//! generated dataset. This binary is the reporting layer: it formats the
//! structured results the benchmark library returns.
//!
//! Usage:
//!
//! ```text
//! lookup-report [transactions.json]
//! ```
//!
//! When a path is given, records are loaded through the flat-file JSON
//! repository (bare array or `{"transactions": [...]}` wrapper); otherwise a
//! 1000-record sample dataset is generated.

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ledger_bench::{compare, describe_footprint, measure, representative_ids};
use ledger_records::samples;
use ledger_store::{JsonFileRepository, RecordRepository, RecordStore};

const SAMPLE_COUNT: usize = 1000;
const BENCH_ITERATIONS: u32 = 1000;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let records = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading records from file");
            JsonFileRepository::new(&path)
                .load()
                .with_context(|| format!("loading records from {path}"))?
        }
        None => {
            info!(count = SAMPLE_COUNT, "no input file given, generating samples");
            samples::sample_records(SAMPLE_COUNT)
        }
    };

    let store = RecordStore::from_records(records).context("building record store")?;
    let stats = store.stats();

    println!("{:=<76}", "");
    println!("LOOKUP STRATEGIES: SEQUENTIAL SCAN VS DIRECT-ACCESS INDEX");
    println!("{:=<76}", "");
    println!(
        "dataset: {} records, {} distinct identifiers, {} shadowed duplicates",
        stats.record_count, stats.distinct_ids, stats.shadowed_duplicates
    );

    let probes = representative_ids(&store);

    println!();
    println!("CASE-BY-CASE (first / middle / last record)");
    println!("{:-<76}", "");
    for case in compare(&store, &probes) {
        println!(
            "  id {:>10}  scan {:>12?}  index {:>12?}  ratio {:>10.2}x  found {}/{}",
            case.id,
            case.scan_elapsed,
            case.index_elapsed,
            case.ratio,
            case.scan_found,
            case.index_found,
        );
    }

    // Aggregate over the middle probe: the scan strategy's average case.
    if let Some(probe) = probes.get(probes.len() / 2).or_else(|| probes.first()) {
        let result = measure(&store, probe, BENCH_ITERATIONS);

        println!();
        println!("AGGREGATE BENCHMARK ({} iterations, id {})", result.iterations, probe);
        println!("{:-<76}", "");
        println!("  scan total:    {:>14?}   per op: {:>12?}", result.scan_total, result.scan_per_op);
        println!("  index total:   {:>14?}   per op: {:>12?}", result.index_total, result.index_per_op);
        println!("  speedup:       {:>11.2}x", result.speedup_factor);
    }

    let footprint = describe_footprint(&store);
    println!();
    println!("FOOTPRINT (shallow container sizes)");
    println!("{:-<76}", "");
    println!("  sequence:       {:>10} bytes", footprint.sequence_bytes);
    println!("  index:          {:>10} bytes", footprint.index_bytes);
    println!("  index keys:     {:>10} bytes", footprint.index_key_bytes);
    println!(
        "  index overhead: {:>10} bytes for O(1) lookups over {} entries",
        footprint.index_overhead_bytes(),
        footprint.index_entries
    );

    Ok(())
}
