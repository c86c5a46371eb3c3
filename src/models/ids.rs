//! Transaction identity
//!
//! Ids are opaque strings. Imported records keep whatever id they carry;
//! ids minted locally are UUIDv7 strings, which are time-ordered but carry
//! random bits, so two ids minted in the same millisecond still differ.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Mint a fresh id
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Wrap an existing token without checking its format
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for terminal output
    pub fn short(&self) -> &str {
        // v7 ids share their leading timestamp digits, the tail is the random part
        let len = self.0.len();
        if len > 12 && self.0.is_ascii() {
            &self.0[len - 12..]
        } else {
            &self.0
        }
    }

    /// Whether `needle` names this id in full or by its short form
    pub fn matches(&self, needle: &str) -> bool {
        !needle.is_empty() && (self.0 == needle || self.short() == needle)
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransactionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
