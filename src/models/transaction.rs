//! Transaction model
//!
//! A transaction is a dated income or expense entry with a free-text
//! category and description. Records have no edit operation; correcting one
//! means deleting it and adding a replacement.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid transaction type: '{}'. Use income or expense",
                other
            )),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Calendar date, local time, no time component
    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Non-negative by convention; NaN when the entered text was not a number
    #[serde(deserialize_with = "amount_or_nan")]
    pub amount: f64,

    pub category: String,

    pub description: String,
}

/// JSON has no NaN, serde_json writes it as `null`; read `null` back as NaN
fn amount_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Transaction {
    /// Build a transaction from an add candidate, minting a fresh id
    pub fn from_new(candidate: NewTransaction) -> Self {
        Self {
            id: TransactionId::new(),
            date: candidate.date,
            kind: candidate.kind,
            amount: candidate.amount,
            category: candidate.category,
            description: candidate.description,
        }
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category,
            self.description
        )
    }
}

/// Input for the store's add operation
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub kind: TransactionType,
    pub amount: f64,
    pub category: String,
    pub description: String,
}

impl NewTransaction {
    pub fn new(
        date: NaiveDate,
        kind: TransactionType,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            kind,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Parse user-entered amount text. Unparsable text becomes NaN and is
    /// stored as-is; there is no sign or range check.
    ///
    /// Infinities ("inf", "1e400") also become NaN, since JSON can only
    /// carry them as `null`.
    pub fn parse_amount(text: &str) -> f64 {
        match text.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() => amount,
            _ => f64::NAN,
        }
    }
}
