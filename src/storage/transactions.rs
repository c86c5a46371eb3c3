//! Transaction store
//!
//! Owns the authoritative, insertion-ordered list of transactions and
//! mirrors it to a [`Backend`] after every mutation.

use log::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{KathaError, KathaResult};
use crate::export::json;
use crate::models::{NewTransaction, Transaction, TransactionId};

use super::backend::Backend;

/// Outcome of loading the persisted blob
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records now in the store
    pub imported: usize,
    /// Records dropped for having the wrong shape or a repeated id
    pub skipped: usize,
    /// Records the import replaced
    pub replaced: usize,
}

/// The transaction list and its persistence
pub struct TransactionStore<B: Backend> {
    backend: B,
    transactions: Vec<Transaction>,
    audit: Option<AuditLogger>,
}

impl<B: Backend> TransactionStore<B> {
    /// Create an empty store; call [`load`](Self::load) before the first query
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            transactions: Vec::new(),
            audit: None,
        }
    }

    /// Create a store and load the persisted list
    pub fn open(backend: B) -> KathaResult<Self> {
        let mut store = Self::new(backend);
        store.load()?;
        Ok(store)
    }

    /// Append every mutation to an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Replace the in-memory list with the persisted one
    ///
    /// A missing or blank blob gives an empty list. Elements without the
    /// transaction shape are dropped with a warning.
    pub fn load(&mut self) -> KathaResult<LoadSummary> {
        let bytes = match self.backend.read()? {
            Some(bytes) => bytes,
            None => {
                debug!("No persisted transactions, starting empty");
                self.transactions.clear();
                return Ok(LoadSummary::default());
            }
        };

        let text = String::from_utf8(bytes)
            .map_err(|e| KathaError::Storage(format!("Stored data is not UTF-8: {}", e)))?;

        if text.trim().is_empty() {
            self.transactions.clear();
            return Ok(LoadSummary::default());
        }

        let decoded = json::decode(&text).map_err(|e| match e {
            KathaError::InvalidFormat(msg) => {
                KathaError::Storage(format!("Failed to parse stored transactions: {}", msg))
            }
            other => other,
        })?;

        if decoded.skipped > 0 {
            warn!(
                "Dropped {} malformed stored record(s) while loading",
                decoded.skipped
            );
        }

        self.transactions = decoded.transactions;
        debug!("Loaded {} transactions", self.transactions.len());

        Ok(LoadSummary {
            loaded: self.transactions.len(),
            skipped: decoded.skipped,
        })
    }

    /// Record a new transaction at the end of the list and persist
    pub fn add(&mut self, candidate: NewTransaction) -> KathaResult<TransactionId> {
        let mut txn = Transaction::from_new(candidate);
        while self.get(&txn.id).is_some() {
            txn.id = TransactionId::new();
        }

        let id = txn.id.clone();
        let entry = self.audit.as_ref().map(|_| AuditEntry::add(&txn));

        self.transactions.push(txn);
        self.persist()?;
        self.log_audit(entry);

        debug!("Added transaction {}", id);
        Ok(id)
    }

    /// Remove the transaction with `id` and persist
    ///
    /// Returns `false` and leaves the list untouched when no record matches.
    pub fn delete(&mut self, id: &TransactionId) -> KathaResult<bool> {
        let position = self.transactions.iter().position(|t| &t.id == id);
        let removed = position.map(|index| self.transactions.remove(index));

        self.persist()?;

        match removed {
            Some(txn) => {
                self.log_audit(Some(AuditEntry::delete(&txn)));
                debug!("Deleted transaction {}", id);
                Ok(true)
            }
            None => {
                debug!("Delete of unknown transaction {} ignored", id);
                Ok(false)
            }
        }
    }

    /// Discard the list and install `records` in its place, then persist
    pub fn replace_all(&mut self, records: Vec<Transaction>) -> KathaResult<()> {
        let before = self.transactions.len();
        self.transactions = records;
        self.persist()?;
        self.log_audit(Some(AuditEntry::replace(before, self.transactions.len())));

        info!(
            "Replaced {} transactions with {}",
            before,
            self.transactions.len()
        );
        Ok(())
    }

    /// Replace the list with the contents of a backup file
    ///
    /// Text that does not parse as a JSON array fails with
    /// [`KathaError::InvalidFormat`] and leaves the store unchanged.
    pub fn import_json(&mut self, text: &str) -> KathaResult<ImportSummary> {
        let decoded = json::decode(text)?;
        let replaced = self.transactions.len();
        let imported = decoded.transactions.len();

        if decoded.skipped > 0 {
            warn!("Import dropped {} malformed record(s)", decoded.skipped);
        }

        self.replace_all(decoded.transactions)?;

        Ok(ImportSummary {
            imported,
            skipped: decoded.skipped,
            replaced,
        })
    }

    /// Serialize the list in the backup format
    pub fn export_json(&self) -> KathaResult<String> {
        json::encode(&self.transactions)
    }

    /// Current snapshot, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Look up by full id or by the short form shown in listings
    pub fn find(&self, needle: &str) -> Option<&Transaction> {
        let needle = needle.trim();
        self.transactions.iter().find(|t| t.id.matches(needle))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn persist(&self) -> KathaResult<()> {
        let json = json::encode(&self.transactions)?;
        self.backend.write(json.as_bytes())
    }

    /// Runs after `persist`; a failed audit write is logged, never returned
    fn log_audit(&self, entry: Option<AuditEntry>) {
        if let (Some(logger), Some(entry)) = (&self.audit, entry) {
            if let Err(e) = logger.log(&entry) {
                warn!(
                    "Failed to record {} in {}: {}",
                    entry.operation,
                    logger.path().display(),
                    e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::TransactionType;
    use crate::storage::backend::{FileBackend, MemoryBackend};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn candidate(day: u32, kind: TransactionType, amount: f64) -> NewTransaction {
        NewTransaction::new(date(2024, 3, day), kind, amount, "General", "Entry")
    }

    fn create_test_store() -> (MemoryBackend, TransactionStore<MemoryBackend>) {
        let backend = MemoryBackend::new();
        let store = TransactionStore::open(backend.clone()).unwrap();
        (backend, store)
    }

    #[test]
    fn test_empty_load() {
        let (_backend, store) = create_test_store();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_blank_blob_loads_empty() {
        let mut store = TransactionStore::new(MemoryBackend::with_contents("  \n"));
        assert_eq!(store.load().unwrap(), LoadSummary::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_blob_is_storage_error() {
        let mut store = TransactionStore::new(MemoryBackend::with_contents("{oops"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, KathaError::Storage(_)));
    }

    #[test]
    fn test_load_drops_malformed_records() {
        let blob = r#"[
            {"id": "1", "date": "2024-03-01", "type": "income", "amount": 100, "category": "Pay", "description": "Salary"},
            {"id": "2", "date": "not a date", "type": "income", "amount": 5, "category": "x", "description": "y"},
            {"id": "3", "type": "expense"}
        ]"#;
        let mut store = TransactionStore::new(MemoryBackend::with_contents(blob));

        let summary = store.load().unwrap();
        assert_eq!(summary, LoadSummary { loaded: 1, skipped: 2 });
        assert_eq!(store.transactions()[0].id.as_str(), "1");
    }

    #[test]
    fn test_add_appends_and_persists() {
        let (backend, mut store) = create_test_store();

        let late = store.add(candidate(20, TransactionType::Expense, 5.0)).unwrap();
        let early = store.add(candidate(1, TransactionType::Income, 100.0)).unwrap();

        // Insertion order, not date order
        assert_eq!(store.transactions()[0].id, late);
        assert_eq!(store.transactions()[1].id, early);

        let reloaded = TransactionStore::open(backend).unwrap();
        assert_eq!(reloaded.transactions(), store.transactions());
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let (_backend, mut store) = create_test_store();

        for _ in 0..50 {
            store.add(candidate(2, TransactionType::Expense, 1.0)).unwrap();
        }

        let mut ids: Vec<_> = store.transactions().iter().map(|t| t.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_add_stores_nan_amount() {
        let (backend, mut store) = create_test_store();

        let amount = NewTransaction::parse_amount("lots");
        let id = store.add(candidate(3, TransactionType::Expense, amount)).unwrap();
        assert!(store.get(&id).unwrap().amount.is_nan());

        let reloaded = TransactionStore::open(backend).unwrap();
        assert!(reloaded.get(&id).unwrap().amount.is_nan());
    }

    #[test]
    fn test_add_then_delete_restores_list() {
        let (_backend, mut store) = create_test_store();
        store.add(candidate(1, TransactionType::Income, 100.0)).unwrap();
        store.add(candidate(15, TransactionType::Expense, 40.0)).unwrap();
        let before = store.transactions().to_vec();

        let id = store.add(candidate(10, TransactionType::Expense, 7.5)).unwrap();
        assert_eq!(store.len(), 3);

        assert!(store.delete(&id).unwrap());
        assert_eq!(store.transactions(), before.as_slice());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let (backend, mut store) = create_test_store();
        store.add(candidate(1, TransactionType::Income, 100.0)).unwrap();
        store.add(candidate(2, TransactionType::Expense, 20.0)).unwrap();
        let before = store.transactions().to_vec();

        assert!(!store.delete(&TransactionId::from_raw("missing")).unwrap());
        assert_eq!(store.transactions(), before.as_slice());

        let reloaded = TransactionStore::open(backend).unwrap();
        assert_eq!(reloaded.transactions(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_only_first_match() {
        let (_backend, mut store) = create_test_store();
        let id = store.add(candidate(1, TransactionType::Income, 1.0)).unwrap();
        store.add(candidate(2, TransactionType::Income, 2.0)).unwrap();

        store.delete(&id).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.transactions()[0].amount, 2.0);
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let (_backend, mut store) = create_test_store();
        store.add(candidate(1, TransactionType::Income, 100.0)).unwrap();
        store.add(candidate(15, TransactionType::Expense, 40.25)).unwrap();
        let before = store.transactions().to_vec();

        let exported = store.export_json().unwrap();
        store.replace_all(Vec::new()).unwrap();
        assert!(store.is_empty());

        let summary = store.import_json(&exported).unwrap();
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 0);
        assert_eq!(store.transactions(), before.as_slice());
    }

    #[test]
    fn test_export_matches_persisted_blob() {
        let (backend, mut store) = create_test_store();
        store.add(candidate(1, TransactionType::Income, 100.0)).unwrap();

        assert_eq!(
            backend.contents().unwrap().unwrap(),
            store.export_json().unwrap()
        );
    }

    #[test]
    fn test_import_invalid_json_leaves_store_unchanged() {
        let (backend, mut store) = create_test_store();
        store.add(candidate(1, TransactionType::Income, 100.0)).unwrap();
        let before = store.transactions().to_vec();
        let blob_before = backend.contents().unwrap();

        let err = store.import_json("{not json").unwrap_err();
        assert!(matches!(err, KathaError::InvalidFormat(_)));
        assert_eq!(store.transactions(), before.as_slice());
        assert_eq!(backend.contents().unwrap(), blob_before);
    }

    #[test]
    fn test_import_keeps_ids_and_replaces_wholesale() {
        let (_backend, mut store) = create_test_store();
        store.add(candidate(1, TransactionType::Income, 100.0)).unwrap();

        let text = r#"[
            {"id": "1709251200000", "date": "2024-03-01", "type": "expense", "amount": 3.5, "category": "Tea", "description": "Chai"},
            {"id": "broken"}
        ]"#;
        let summary = store.import_json(text).unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                imported: 1,
                skipped: 1,
                replaced: 1
            }
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.transactions()[0].id.as_str(), "1709251200000");
    }

    #[test]
    fn test_find_by_short_id() {
        let (_backend, mut store) = create_test_store();
        let id = store.add(candidate(1, TransactionType::Income, 100.0)).unwrap();

        assert_eq!(store.find(id.short()).map(|t| &t.id), Some(&id));
        assert_eq!(store.find(id.as_str()).map(|t| &t.id), Some(&id));
        assert!(store.find("nope").is_none());
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let backend = FileBackend::new(temp_dir.path().join("transactions.json"));
        let mut store = TransactionStore::open(backend).unwrap().with_audit(logger.clone());

        let id = store.add(candidate(1, TransactionType::Income, 100.0)).unwrap();
        store.delete(&TransactionId::from_raw("missing")).unwrap();
        store.delete(&id).unwrap();
        store.import_json("[]").unwrap();

        let ops: Vec<_> = logger
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec![Operation::Add, Operation::Delete, Operation::Replace]);
    }

    #[test]
    fn test_unwritable_audit_log_does_not_fail_mutations() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let audit_path = temp_dir.path().join("audit.log");
        std::fs::create_dir(&audit_path).unwrap();

        let backend = MemoryBackend::new();
        let mut store = TransactionStore::open(backend.clone())
            .unwrap()
            .with_audit(AuditLogger::new(audit_path));

        let id = store.add(candidate(4, TransactionType::Expense, 5.0)).unwrap();
        assert!(backend.contents().unwrap().unwrap().contains(id.as_str()));

        assert!(store.delete(&id).unwrap());
        store.replace_all(Vec::new()).unwrap();
        assert!(store.is_empty());
    }
}
