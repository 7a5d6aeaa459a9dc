//! Core error types.

use thiserror::Error;

/// Core catalog errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage layer error.
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    /// CSV decoding error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Champion not found.
    #[error("champion '{0}' not found")]
    NotFound(String),

    /// Malformed import record.
    #[error("invalid record at line {line}: {message}")]
    InvalidRecord {
        /// 1-based line number in the source file.
        line: u64,
        /// What was wrong with the record.
        message: String,
    },

    /// Transaction error.
    #[error("transaction error: {0}")]
    Transaction(String),
}

impl Error {
    /// Whether this error means the requested champion does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
