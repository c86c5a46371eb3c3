//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Store mutations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A transaction was added
    Add,
    /// A transaction was deleted
    Delete,
    /// The whole list was replaced by an import
    Replace,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Replace => write!(f, "REPLACE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Affected transaction, absent for whole-list replacement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// The record as it was added or as it was before deletion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,

    /// Record counts for a replacement: (before, after)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<(usize, usize)>,
}

impl AuditEntry {
    pub fn add(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Add,
            transaction_id: Some(txn.id.to_string()),
            record: serde_json::to_value(txn).ok(),
            counts: None,
        }
    }

    pub fn delete(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            transaction_id: Some(txn.id.to_string()),
            record: serde_json::to_value(txn).ok(),
            counts: None,
        }
    }

    pub fn replace(before: usize, after: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Replace,
            transaction_id: None,
            record: None,
            counts: Some((before, after)),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(id) = &self.transaction_id {
            output.push_str(&format!(" {}", id));
        }

        if let Some((before, after)) = self.counts {
            output.push_str(&format!(" ({} -> {} transactions)", before, after));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionType};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::from_new(NewTransaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            TransactionType::Expense,
            40.0,
            "Food",
            "Groceries",
        ))
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Add.to_string(), "ADD");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(Operation::Replace.to_string(), "REPLACE");
    }

    #[test]
    fn test_add_entry_keeps_record() {
        let txn = sample();
        let entry = AuditEntry::add(&txn);

        assert_eq!(entry.operation, Operation::Add);
        assert_eq!(entry.transaction_id.as_deref(), Some(txn.id.as_str()));
        assert_eq!(entry.record.unwrap()["category"], "Food");
        assert!(entry.counts.is_none());
    }

    #[test]
    fn test_replace_entry_serialization() {
        let entry = AuditEntry::replace(3, 5);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("transaction_id"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Replace);
        assert_eq!(deserialized.counts, Some((3, 5)));
    }

    #[test]
    fn test_human_readable_format() {
        let txn = sample();
        let formatted = AuditEntry::delete(&txn).format_human_readable();
        assert!(formatted.contains("DELETE"));
        assert!(formatted.contains(txn.id.as_str()));

        let formatted = AuditEntry::replace(2, 7).format_human_readable();
        assert!(formatted.contains("REPLACE (2 -> 7 transactions)"));
    }
}
