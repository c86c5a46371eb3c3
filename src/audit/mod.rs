//! Audit trail of store mutations
//!
//! Every add, delete and whole-list replacement is appended to a
//! line-delimited JSON file (JSONL), one `AuditEntry` per line.
//!
//! ```rust,ignore
//! use katha::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::add(&txn))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
