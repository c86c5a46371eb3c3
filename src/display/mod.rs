//! Display formatting for terminal output
//!
//! Plain-text renderings of transactions and reports. Everything here
//! returns a `String`; printing is left to the CLI.

pub mod report;
pub mod transaction;

pub use report::{
    format_category_breakdown, format_day, format_ledger, format_money, format_monthly_stats,
};
pub use transaction::{
    format_transaction_details, format_transaction_register, format_transaction_row,
};
