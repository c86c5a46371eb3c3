//! Export and import of the transaction list
//!
//! - JSON: the backup format, identical to the persisted blob
//! - CSV: spreadsheet-friendly export of the same list

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use self::json::{backup_filename, decode, encode, write_backup, DecodedTransactions};
