//! Per-kind comparison strategies.

use crate::model::{Champion, ScalarField, TagKind};

/// Decides whether an expected value holds for a champion.
pub trait AttributeMatcher: Send + Sync {
    /// The champion's actual values for this attribute.
    fn actual<'a>(&self, champion: &'a Champion) -> Vec<&'a str>;

    /// Whether `expected` (already normalized) holds for `champion`.
    fn matches(&self, champion: &Champion, expected: &str) -> bool {
        self.actual(champion).contains(&expected)
    }
}

/// Membership in one of the champion's tag sets.
pub struct TagMembership(pub TagKind);

impl AttributeMatcher for TagMembership {
    fn actual<'a>(&self, champion: &'a Champion) -> Vec<&'a str> {
        champion.tags(self.0).iter().collect()
    }

    fn matches(&self, champion: &Champion, expected: &str) -> bool {
        champion.tags(self.0).contains(expected)
    }
}

/// Equality with a single scalar field. A null field matches nothing.
pub struct ScalarEquality(pub ScalarField);

impl AttributeMatcher for ScalarEquality {
    fn actual<'a>(&self, champion: &'a Champion) -> Vec<&'a str> {
        champion.scalar(self.0).into_iter().collect()
    }

    fn matches(&self, champion: &Champion, expected: &str) -> bool {
        champion.scalar(self.0) == Some(expected)
    }
}

/// Region membership where one token stands for every region.
///
/// One champion in the roster has no fixed home and is tagged with the
/// wildcard region, so a guess naming the wildcard is always accepted.
pub struct WildcardRegion {
    token: String,
    inner: TagMembership,
}

impl WildcardRegion {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            inner: TagMembership(TagKind::Region),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl AttributeMatcher for WildcardRegion {
    fn actual<'a>(&self, champion: &'a Champion) -> Vec<&'a str> {
        self.inner.actual(champion)
    }

    fn matches(&self, champion: &Champion, expected: &str) -> bool {
        expected == self.token || self.inner.matches(champion, expected)
    }
}
