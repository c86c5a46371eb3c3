//! Katha - a personal income and expense tracker
//!
//! Transactions are kept in one JSON document and every view (monthly
//! totals, a day's entries, the month's ledger) is recomputed from the
//! current list on demand.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Transactions, ids and calendar months
//! - `storage`: The transaction store and its persistence backends
//! - `reports`: Aggregation over the transaction list
//! - `export`: JSON backups and CSV export
//! - `audit`: Append-only log of store mutations
//! - `display`, `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use katha::config::{KathaPaths, Settings};
//! use katha::reports::monthly_stats;
//! use katha::storage::open_file_store;
//!
//! let paths = KathaPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = open_file_store(&paths, &settings)?;
//! let stats = monthly_stats(store.transactions(), chrono::Local::now().date_naive());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{KathaError, KathaResult};
