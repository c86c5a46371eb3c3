//! CLI command handlers
//!
//! Each area defines a clap subcommand enum and a handler that runs it
//! against an already loaded store.

pub mod audit;
pub mod config;
pub mod data;
pub mod report;
pub mod transaction;

pub use audit::handle_audit_command;
pub use config::{handle_config_command, ConfigArgs};
pub use data::{handle_data_command, DataCommands, ExportFormat};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
