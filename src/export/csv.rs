//! CSV export of the transaction list

use std::io::Write;

use crate::error::{KathaError, KathaResult};
use crate::models::Transaction;

const HEADER: [&str; 6] = ["id", "date", "type", "amount", "category", "description"];

/// Write all transactions as CSV, in list order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> KathaResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| KathaError::Export(e.to_string()))?;

    for txn in transactions {
        let amount = if txn.amount.is_nan() {
            String::new()
        } else {
            format!("{:.2}", txn.amount)
        };
        let date = txn.date.format("%Y-%m-%d").to_string();

        csv_writer
            .write_record([
                txn.id.as_str(),
                date.as_str(),
                txn.kind.as_str(),
                amount.as_str(),
                txn.category.as_str(),
                txn.description.as_str(),
            ])
            .map_err(|e| KathaError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| KathaError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionId, TransactionType};
    use chrono::NaiveDate;

    fn txn(id: &str, amount: f64, description: &str) -> Transaction {
        Transaction {
            id: TransactionId::from_raw(id),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            kind: TransactionType::Expense,
            amount,
            category: "Food".into(),
            description: description.into(),
        }
    }

    fn export(list: &[Transaction]) -> String {
        let mut out = Vec::new();
        export_transactions_csv(list, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_only_for_empty_list() {
        assert_eq!(export(&[]), "id,date,type,amount,category,description\n");
    }

    #[test]
    fn test_rows() {
        let csv = export(&[txn("1", 40.0, "Groceries")]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "1,2024-03-15,expense,40.00,Food,Groceries");
    }

    #[test]
    fn test_quoting_and_nan() {
        let csv = export(&[txn("2", f64::NAN, "Coffee, with cake")]);
        assert!(csv.contains("2,2024-03-15,expense,,Food,\"Coffee, with cake\""));
    }
}
