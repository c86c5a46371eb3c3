//! Transaction display formatting

use crate::models::Transaction;

use super::report::{format_money, truncate};

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{:12} {} {:>12}  {:16} {}",
        txn.id.short(),
        txn.date.format("%Y-%m-%d"),
        format_money(txn.signed_amount(), symbol),
        truncate(&txn.category, 16),
        truncate(&txn.description, 30)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[&Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:>12}  {:16} {}\n",
        "ID", "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", format_money(txn.amount, symbol)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));

    output
}
