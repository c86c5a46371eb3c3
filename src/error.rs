//! Custom error types for Katha
//!
//! This module defines the error hierarchy for the library using thiserror.
//! The binary wraps these in `anyhow` at the top level.

use thiserror::Error;

/// The main error type for Katha operations
#[derive(Error, Debug)]
pub enum KathaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import text could not be parsed as a transaction list
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl KathaError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }
}

impl From<std::io::Error> for KathaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KathaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Katha operations
pub type KathaResult<T> = Result<T, KathaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KathaError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = KathaError::transaction_not_found("0190f0aa");
        assert_eq!(err.to_string(), "Transaction not found: 0190f0aa");
        assert!(matches!(err, KathaError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_format_error() {
        let err = KathaError::InvalidFormat("expected value at line 1 column 2".into());
        assert!(matches!(err, KathaError::InvalidFormat(_)));
        assert_eq!(
            err.to_string(),
            "Invalid file format: expected value at line 1 column 2"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let katha_err: KathaError = io_err.into();
        assert!(matches!(katha_err, KathaError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let katha_err: KathaError = json_err.into();
        assert!(matches!(katha_err, KathaError::Json(_)));
    }
}
