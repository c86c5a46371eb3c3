//! Aggregation over the transaction list
//!
//! Monthly totals, per-day selection, the month's day-by-day ledger and a
//! per-category breakdown. Every function here reads a snapshot slice and
//! never mutates or persists anything.

pub mod categories;
pub mod ledger;
pub mod monthly;

pub use categories::{CategoryBreakdown, CategoryTotal};
pub use ledger::{LedgerDay, MonthLedger};
pub use monthly::{
    daily_transactions, month_bounds, month_days, month_transactions, monthly_stats, MonthlyStats,
};
