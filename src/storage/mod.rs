//! Storage layer for Katha
//!
//! The transaction list is persisted as one JSON blob behind a [`Backend`].
//! On disk that blob is `data/transactions.json`, written atomically.

pub mod backend;
pub mod file_io;
pub mod transactions;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use file_io::{read_optional, write_atomic};
pub use transactions::{ImportSummary, LoadSummary, TransactionStore};

use log::warn;

use crate::audit::AuditLogger;
use crate::config::{KathaPaths, Settings};
use crate::error::KathaError;

/// Open the on-disk store for `paths`, loaded and ready for queries
pub fn open_file_store(
    paths: &KathaPaths,
    settings: &Settings,
) -> Result<TransactionStore<FileBackend>, KathaError> {
    let mut store = file_store(paths, settings)?;
    store.load()?;
    Ok(store)
}

/// Open the on-disk store ahead of an import
///
/// An import replaces the whole list, so an unreadable stored file is
/// reported and treated as empty instead of blocking the import.
pub fn open_file_store_for_import(
    paths: &KathaPaths,
    settings: &Settings,
) -> Result<TransactionStore<FileBackend>, KathaError> {
    let mut store = file_store(paths, settings)?;
    if let Err(e) = store.load() {
        warn!("Ignoring unreadable stored transactions: {}", e);
    }
    Ok(store)
}

fn file_store(
    paths: &KathaPaths,
    settings: &Settings,
) -> Result<TransactionStore<FileBackend>, KathaError> {
    paths.ensure_directories()?;

    let mut store = TransactionStore::new(FileBackend::new(paths.transactions_file()));
    if settings.audit_enabled {
        store = store.with_audit(AuditLogger::new(paths.audit_log()));
    }

    Ok(store)
}
