//! Monthly totals and per-day selection
//!
//! Pure queries over a snapshot of the transaction list. Nothing here is
//! cached; callers recompute from the current list whenever they need a view.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Month, Transaction, TransactionType};

/// Income, expense and balance for one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub income: f64,
    pub expense: f64,
    /// Always `income - expense`
    pub balance: f64,
}

impl MonthlyStats {
    /// Sum a set of transactions that has already been filtered
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut income = 0.0;
        let mut expense = 0.0;

        for txn in transactions {
            match txn.kind {
                TransactionType::Income => income += txn.amount,
                TransactionType::Expense => expense += txn.amount,
            }
        }

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// First and last day (inclusive) of the month containing `reference`
pub fn month_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let month = Month::containing(reference);
    (month.first_day(), month.last_day())
}

/// Transactions dated within the month containing `reference`, in list order
pub fn month_transactions(transactions: &[Transaction], reference: NaiveDate) -> Vec<&Transaction> {
    let (start, end) = month_bounds(reference);
    transactions
        .iter()
        .filter(|t| t.date >= start && t.date <= end)
        .collect()
}

/// Totals for the month containing `reference`
pub fn monthly_stats(transactions: &[Transaction], reference: NaiveDate) -> MonthlyStats {
    MonthlyStats::from_transactions(month_transactions(transactions, reference))
}

/// Transactions dated exactly `day`, in list order
pub fn daily_transactions(transactions: &[Transaction], day: NaiveDate) -> Vec<&Transaction> {
    transactions.iter().filter(|t| t.date == day).collect()
}

/// Every date of the month containing `reference`, ascending
///
/// Days without transactions are included; skipping them is up to the caller.
pub fn month_days(reference: NaiveDate) -> Vec<NaiveDate> {
    Month::containing(reference).days().collect()
}
