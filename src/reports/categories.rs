//! Category breakdown
//!
//! Totals per category label for one transaction type within a month.
//! Labels are compared exactly as entered; there is no case folding.

use std::collections::HashMap;

use crate::models::{Month, Transaction, TransactionType};

use super::monthly::month_transactions;

/// Total for one category label
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub transaction_count: usize,
    /// Share of the type total, 0-100
    pub percentage: f64,
}

/// Category breakdown report
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    pub month: Month,
    pub kind: TransactionType,
    /// Sorted by total descending, then label
    pub categories: Vec<CategoryTotal>,
    pub total: f64,
}

impl CategoryBreakdown {
    pub fn generate(transactions: &[Transaction], month: Month, kind: TransactionType) -> Self {
        let mut by_category: HashMap<&str, (f64, usize)> = HashMap::new();
        let mut total = 0.0;

        for txn in month_transactions(transactions, month.first_day()) {
            if txn.kind != kind {
                continue;
            }
            let entry = by_category.entry(txn.category.as_str()).or_insert((0.0, 0));
            entry.0 += txn.amount;
            entry.1 += 1;
            total += txn.amount;
        }

        let mut categories: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (sum, count))| CategoryTotal {
                category: category.to_string(),
                total: sum,
                transaction_count: count,
                percentage: if total != 0.0 { sum / total * 100.0 } else { 0.0 },
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            month,
            kind,
            categories,
            total,
        }
    }

    /// Keep only the `n` largest categories
    pub fn top(mut self, n: usize) -> Self {
        self.categories.truncate(n);
        self
    }
}
