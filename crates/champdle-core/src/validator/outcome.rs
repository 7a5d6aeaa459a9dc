//! Validation verdicts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single guess was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The champion does not have the expected value.
    #[error("Invalid {kind}. Expected: {expected}, Found: [{}]", .found.join(", "))]
    Mismatch {
        kind: String,
        expected: String,
        found: Vec<String>,
    },

    /// No expected value was supplied.
    #[error("Missing expected value for {kind}")]
    MissingExpected { kind: String },

    /// The attribute kind is not recognized.
    #[error("Unknown attribute kind: {kind}")]
    UnknownKind { kind: String },
}

/// Result of checking one guess.
pub type Verdict = Result<(), GuessError>;

/// Combined verdict for a row/column guess pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub row: Verdict,
    pub col: Verdict,
}

impl ValidationResult {
    /// Both guesses hold.
    pub fn is_valid(&self) -> bool {
        self.row.is_ok() && self.col.is_ok()
    }

    /// Rejection reasons, row first.
    pub fn errors(&self) -> Vec<String> {
        [&self.row, &self.col]
            .into_iter()
            .filter_map(|v| v.as_ref().err())
            .map(ToString::to_string)
            .collect()
    }

    /// Serializable `{valid, errors}` summary.
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            valid: self.is_valid(),
            errors: self.errors(),
        }
    }
}

/// Wire form of a [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub valid: bool,
    pub errors: Vec<String>,
}
