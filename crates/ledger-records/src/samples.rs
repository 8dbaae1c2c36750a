//! # Sample Data
//!
//! Deterministic sample transactions shaped like the production dataset,
//! used by the benchmark harness and integration tests.

use serde_json::json;
use uuid::Uuid;

use crate::record::TransactionRecord;

const TRANSACTION_TYPES: [&str; 4] = ["DEPOSIT", "WITHDRAWAL", "TRANSFER", "PAYMENT"];

/// Generate `count` sample records with sequential integer identifiers
/// starting at 1.
///
/// Payload fields follow the production record shape: type, amount,
/// sender/receiver phone numbers, timestamp, status, and a unique
/// transaction reference.
pub fn sample_records(count: usize) -> Vec<TransactionRecord> {
    (1..=count)
        .map(|i| {
            let fields = json!({
                "id": i,
                "type": TRANSACTION_TYPES[i % TRANSACTION_TYPES.len()],
                "amount": 1000 + (i as i64) * 500,
                "sender": format!("254700{}", 100_000 + i),
                "receiver": format!("254700{}", 200_000 + i),
                "timestamp": format!("2024-01-{:02}T10:00:00Z", (i % 28) + 1),
                "status": "COMPLETED",
                "reference": Uuid::new_v4().to_string(),
            });
            TransactionRecord::from_value(fields).expect("sample records are objects")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::RecordId;

    #[test]
    fn test_sample_records_have_sequential_ids() {
        let records = sample_records(20);
        assert_eq!(records.len(), 20);
        assert_eq!(records[0].canonical_id().unwrap(), RecordId::from(1));
        assert_eq!(records[19].canonical_id().unwrap(), RecordId::from(20));
    }

    #[test]
    fn test_sample_records_carry_payload_fields() {
        let records = sample_records(4);
        for rec in &records {
            assert!(rec.get("amount").is_some());
            assert!(rec.get("sender").is_some());
            assert!(rec.get("reference").is_some());
        }
    }
}
