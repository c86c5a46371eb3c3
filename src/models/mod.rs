//! Core data models for Katha

pub mod ids;
pub mod month;
pub mod transaction;

pub use ids::TransactionId;
pub use month::{Month, MonthParseError};
pub use transaction::{NewTransaction, Transaction, TransactionType};
