//! JSON backup format
//!
//! The backup file and the persisted blob share one format: a 2-space
//! pretty-printed JSON array of transactions.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::warn;

use crate::error::{KathaError, KathaResult};
use crate::models::Transaction;
use crate::storage::write_atomic;

/// Prefix of backup file names
pub const BACKUP_PREFIX: &str = "katha-backup";

/// Result of decoding a transaction list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedTransactions {
    pub transactions: Vec<Transaction>,
    /// Elements dropped because they were not valid transactions or repeated an id
    pub skipped: usize,
}

/// Backup file name for a given date, e.g. `katha-backup-2024-03-15.json`
pub fn backup_filename(date: NaiveDate, extension: &str) -> String {
    format!("{}-{}.{}", BACKUP_PREFIX, date.format("%Y-%m-%d"), extension)
}

/// Encode a transaction list in the backup format
pub fn encode(transactions: &[Transaction]) -> KathaResult<String> {
    serde_json::to_string_pretty(transactions)
        .map_err(|e| KathaError::Export(format!("Failed to serialize transactions: {}", e)))
}

/// Decode text in the backup format
///
/// Text that is not a JSON array at all fails with `InvalidFormat`.
/// Array elements that do not have the transaction shape, and elements that
/// repeat an earlier id, are dropped and counted in `skipped`.
pub fn decode(text: &str) -> KathaResult<DecodedTransactions> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(text).map_err(|e| KathaError::InvalidFormat(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut decoded = DecodedTransactions::default();

    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<Transaction>(value) {
            Ok(txn) if seen.insert(txn.id.clone()) => decoded.transactions.push(txn),
            Ok(txn) => {
                warn!("Skipping record {}: duplicate id {}", index, txn.id);
                decoded.skipped += 1;
            }
            Err(e) => {
                warn!("Skipping record {}: {}", index, e);
                decoded.skipped += 1;
            }
        }
    }

    Ok(decoded)
}

/// Write encoded backup text into `dir` under today's backup name
pub fn write_backup(dir: &Path, date: NaiveDate, json: &str) -> KathaResult<PathBuf> {
    let path = dir.join(backup_filename(date, "json"));
    write_backup_to(&path, json)?;
    Ok(path)
}

/// Write encoded backup text to an explicit path, atomically
pub fn write_backup_to(path: &Path, json: &str) -> KathaResult<()> {
    write_atomic(path, json.as_bytes())
        .map_err(|e| KathaError::Export(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionType};
    use tempfile::TempDir;

    fn sample(day: u32, kind: TransactionType, amount: f64) -> Transaction {
        Transaction::from_new(NewTransaction::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            kind,
            amount,
            "General",
            "Entry",
        ))
    }

    #[test]
    fn test_backup_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(backup_filename(date, "json"), "katha-backup-2024-03-05.json");
        assert_eq!(backup_filename(date, "csv"), "katha-backup-2024-03-05.csv");
    }

    #[test]
    fn test_encode_is_two_space_pretty() {
        let json = encode(&[sample(1, TransactionType::Income, 100.0)]).unwrap();
        assert!(json.starts_with("[\n  {\n    \"id\": "));
        assert!(json.contains("\n    \"type\": \"income\",\n"));
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_decode_round_trip() {
        let list = vec![
            sample(1, TransactionType::Income, 100.0),
            sample(15, TransactionType::Expense, 40.0),
        ];

        let decoded = decode(&encode(&list).unwrap()).unwrap();
        assert_eq!(decoded.transactions, list);
        assert_eq!(decoded.skipped, 0);
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode("{not json").unwrap_err();
        assert!(matches!(err, KathaError::InvalidFormat(_)));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode(r#"{"id": "1"}"#).unwrap_err();
        assert!(matches!(err, KathaError::InvalidFormat(_)));
    }

    #[test]
    fn test_decode_skips_malformed_records() {
        let text = r#"[
            {"id": "a", "date": "2024-03-01", "type": "income", "amount": 10, "category": "c", "description": "d"},
            {"id": "b", "date": "2024-02-30", "type": "income", "amount": 10, "category": "c", "description": "d"},
            {"id": "c", "date": "2024-03-02", "type": "transfer", "amount": 10, "category": "c", "description": "d"},
            {"id": "d", "date": "2024-03-02", "type": "expense", "amount": "10", "category": "c", "description": "d"},
            42,
            {"id": "a", "date": "2024-03-03", "type": "expense", "amount": 5, "category": "c", "description": "d"}
        ]"#;

        let decoded = decode(text).unwrap();
        assert_eq!(decoded.transactions.len(), 1);
        assert_eq!(decoded.transactions[0].id.as_str(), "a");
        assert_eq!(decoded.skipped, 5);
    }

    #[test]
    fn test_write_backup() {
        let temp_dir = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let list = vec![sample(2, TransactionType::Expense, 12.5)];

        let path = write_backup(temp_dir.path(), date, &encode(&list).unwrap()).unwrap();
        assert_eq!(path, temp_dir.path().join("katha-backup-2024-03-31.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(decode(&text).unwrap().transactions, list);
        assert!(!temp_dir.path().join("katha-backup-2024-03-31.json.tmp").exists());
    }

    #[test]
    fn test_write_backup_to_missing_directory_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.json");

        write_backup_to(&path, "[]").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
