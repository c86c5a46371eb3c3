//! Report formatting for terminal output

use chrono::NaiveDate;

use crate::models::{Month, Transaction};
use crate::reports::{CategoryBreakdown, MonthLedger, MonthlyStats};

use super::transaction::{format_transaction_register, format_transaction_row};

const WIDTH: usize = 64;

/// Format an amount with the currency symbol, e.g. `$1234.50` or `-$3.00`
pub fn format_money(amount: f64, symbol: &str) -> String {
    if amount.is_nan() {
        "n/a".to_string()
    } else if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value.is_nan() || value.is_nan() || max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Income, expense and balance block
pub fn format_monthly_stats(month: Month, stats: &MonthlyStats, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", month.label()));
    output.push_str(&separator(32));
    output.push('\n');
    output.push_str(&format!("{:<10} {:>21}\n", "Income", format_money(stats.income, symbol)));
    output.push_str(&format!("{:<10} {:>21}\n", "Expense", format_money(stats.expense, symbol)));
    output.push_str(&format!("{:<10} {:>21}\n", "Balance", format_money(stats.balance, symbol)));

    output
}

/// Transactions of a single day
pub fn format_day(date: NaiveDate, transactions: &[&Transaction], symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", date.format("%A, %B %-d, %Y")));
    output.push_str(&format_transaction_register(transactions, symbol));
    output
}

/// Day-by-day ledger, skipping days without transactions
pub fn format_ledger(ledger: &MonthLedger<'_>, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Ledger for {}\n", ledger.month.label()));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if ledger.is_empty() {
        output.push_str("No transactions this month.\n");
        return output;
    }

    for day in &ledger.days {
        output.push_str(&format!(
            "{}  +{}  -{}\n",
            day.date.format("%a %d"),
            format_money(day.totals.income, symbol),
            format_money(day.totals.expense, symbol)
        ));
        for txn in &day.transactions {
            output.push_str("  ");
            output.push_str(&format_transaction_row(txn, symbol));
            output.push('\n');
        }
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{} transactions  Income {}  Expense {}  Balance {}\n",
        ledger.transaction_count(),
        format_money(ledger.totals.income, symbol),
        format_money(ledger.totals.expense, symbol),
        format_money(ledger.totals.balance, symbol)
    ));

    output
}

/// Per-category table with share bars
pub fn format_category_breakdown(report: &CategoryBreakdown, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} by category, {}\n",
        capitalize(report.kind.as_str()),
        report.month.label()
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if report.categories.is_empty() {
        output.push_str("No transactions this month.\n");
        return output;
    }

    let max = report
        .categories
        .iter()
        .map(|c| c.total)
        .fold(0.0_f64, f64::max);

    for cat in &report.categories {
        output.push_str(&format!(
            "{:<20} {:>12} {:>6} {} ({})\n",
            truncate(&cat.category, 20),
            format_money(cat.total, symbol),
            format_percentage(cat.percentage),
            format_bar(cat.total, max, 12),
            cat.transaction_count
        ));
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!("{:<20} {:>12}\n", "Total", format_money(report.total, symbol)));

    output
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
