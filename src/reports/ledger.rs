//! Day-by-day ledger for a month
//!
//! One row per day that has transactions, each with its own subtotals.

use chrono::NaiveDate;

use crate::models::{Month, Transaction};

use super::monthly::{daily_transactions, month_transactions, MonthlyStats};

/// One day of the ledger
#[derive(Debug, Clone)]
pub struct LedgerDay<'a> {
    pub date: NaiveDate,
    /// Transactions of the day in list order
    pub transactions: Vec<&'a Transaction>,
    pub totals: MonthlyStats,
}

/// Ledger for one month
#[derive(Debug, Clone)]
pub struct MonthLedger<'a> {
    pub month: Month,
    /// Days with at least one transaction, ascending
    pub days: Vec<LedgerDay<'a>>,
    pub totals: MonthlyStats,
}

impl<'a> MonthLedger<'a> {
    pub fn generate(transactions: &'a [Transaction], month: Month) -> Self {
        let reference = month.first_day();

        let days = month
            .days()
            .filter_map(|date| {
                let day = daily_transactions(transactions, date);
                if day.is_empty() {
                    return None;
                }
                let totals = MonthlyStats::from_transactions(day.iter().copied());
                Some(LedgerDay {
                    date,
                    transactions: day,
                    totals,
                })
            })
            .collect();

        Self {
            month,
            days,
            totals: MonthlyStats::from_transactions(month_transactions(transactions, reference)),
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.days.iter().map(|d| d.transactions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
