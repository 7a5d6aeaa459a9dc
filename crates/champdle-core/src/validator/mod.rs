//! Attribute validation engine.
//!
//! A guess pairs an attribute kind with an expected value. Tag kinds are
//! checked by set membership, scalar kinds by equality of canonical values,
//! and the region kind additionally accepts a wildcard token.

mod matcher;
mod outcome;

pub use matcher::{AttributeMatcher, ScalarEquality, TagMembership, WildcardRegion};
pub use outcome::{GuessError, ValidationResult, ValidationSummary, Verdict};

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Error;
use crate::model::{
    json_text, normalize_scalar, AttributeKind, AttributeShape, Champion, NotAScalar, TagKind,
};

/// Region token that matches every champion.
pub const DEFAULT_WILDCARD_REGION: &str = "Runeterra";

/// A client-submitted (attribute kind, expected value) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    /// Attribute kind as sent by the client.
    pub kind: String,
    /// Expected value, trimmed. Scalar kinds canonicalize it when checked.
    pub expected: Option<String>,
}

impl Guess {
    /// Create a guess. A blank expected value counts as missing.
    pub fn new(kind: impl Into<String>, expected: &str) -> Self {
        let expected = expected.trim();
        Self {
            kind: kind.into(),
            expected: (!expected.is_empty()).then(|| expected.to_string()),
        }
    }

    /// Create a guess with no expected value.
    pub fn missing(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            expected: None,
        }
    }

    /// Create a guess from a JSON expected value (string, number or null).
    pub fn from_json(kind: impl Into<String>, expected: &Value) -> Result<Self, NotAScalar> {
        Ok(Self {
            kind: kind.into(),
            expected: json_text(expected)?,
        })
    }
}

/// Validator settings.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Region value accepted for every champion; `None` disables the rule.
    pub wildcard_region: Option<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            wildcard_region: Some(DEFAULT_WILDCARD_REGION.to_string()),
        }
    }
}

impl ValidatorConfig {
    /// Use a different wildcard region token.
    pub fn with_wildcard_region(mut self, token: impl Into<String>) -> Self {
        self.wildcard_region = Some(token.into());
        self
    }

    /// Turn the wildcard rule off.
    pub fn without_wildcard(mut self) -> Self {
        self.wildcard_region = None;
        self
    }
}

/// Checks guesses against champion records.
///
/// Holds one matcher per attribute kind, chosen at construction. Stateless
/// otherwise; safe to share across requests.
pub struct Validator {
    matchers: HashMap<AttributeKind, Box<dyn AttributeMatcher>>,
    wildcard_region: Option<String>,
}

impl Validator {
    /// Build a validator from settings.
    pub fn new(config: ValidatorConfig) -> Self {
        let mut matchers: HashMap<AttributeKind, Box<dyn AttributeMatcher>> = HashMap::new();

        for kind in AttributeKind::ALL {
            let matcher: Box<dyn AttributeMatcher> = match (kind, kind.shape()) {
                (AttributeKind::Region, _) => match &config.wildcard_region {
                    Some(token) => Box::new(WildcardRegion::new(token.clone())),
                    None => Box::new(TagMembership(TagKind::Region)),
                },
                (_, AttributeShape::Tags(tag_kind)) => Box::new(TagMembership(tag_kind)),
                (_, AttributeShape::Scalar(field)) => Box::new(ScalarEquality(field)),
            };
            matchers.insert(kind, matcher);
        }

        Self {
            matchers,
            wildcard_region: config.wildcard_region,
        }
    }

    /// The wildcard region token, if enabled.
    pub fn wildcard_region(&self) -> Option<&str> {
        self.wildcard_region.as_deref()
    }

    /// Check one guess.
    pub fn check(&self, champion: &Champion, guess: &Guess) -> Verdict {
        let kind: AttributeKind = guess.kind.parse().map_err(|_| GuessError::UnknownKind {
            kind: guess.kind.clone(),
        })?;

        let matcher = self.matchers.get(&kind).ok_or_else(|| GuessError::UnknownKind {
            kind: guess.kind.clone(),
        })?;

        // Tag names are compared verbatim; only scalars are canonicalized
        let expected = match kind.shape() {
            AttributeShape::Scalar(_) => guess.expected.as_deref().and_then(normalize_scalar),
            AttributeShape::Tags(_) => guess.expected.clone(),
        };
        let expected = expected.ok_or_else(|| GuessError::MissingExpected {
            kind: kind.to_string(),
        })?;
        let expected = expected.as_str();

        if matcher.matches(champion, expected) {
            debug!(champion = %champion.name, %kind, expected, "guess accepted");
            return Ok(());
        }

        let found: Vec<String> = matcher
            .actual(champion)
            .into_iter()
            .map(String::from)
            .collect();
        debug!(champion = %champion.name, %kind, expected, ?found, "guess rejected");

        Err(GuessError::Mismatch {
            kind: kind.to_string(),
            expected: expected.to_string(),
            found,
        })
    }

    /// Check a row and a column guess independently.
    pub fn validate(&self, champion: &Champion, row: &Guess, col: &Guess) -> ValidationResult {
        let result = ValidationResult {
            row: self.check(champion, row),
            col: self.check(champion, col),
        };

        debug!(
            champion = %champion.name,
            valid = result.is_valid(),
            errors = ?result.errors(),
            "validation finished"
        );
        result
    }

    /// Resolve a champion by name, then validate.
    ///
    /// Returns [`Error::NotFound`] when the name does not resolve, which is
    /// distinct from a negative verdict.
    pub fn validate_named(
        &self,
        catalog: &Catalog,
        name: &str,
        row: &Guess,
        col: &Guess,
    ) -> Result<ValidationResult, Error> {
        let champion = catalog.find_by_name(name)?;
        Ok(self.validate(&champion, row, col))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}
