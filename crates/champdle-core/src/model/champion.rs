//! Champion records.

use serde::{Deserialize, Serialize};

use super::kind::{AttributeKind, AttributeShape, ScalarField, TagKind};
use super::scalar::normalize_scalar;

/// A set of tag names that remembers first-insertion order.
///
/// Membership is what matters; the order only keeps listings stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list, trimming entries and dropping empties.
    pub fn parse_list(raw: &str) -> Self {
        raw.split(',').collect()
    }

    /// Add a tag. Returns false if it was empty or already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Check membership (exact match).
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Iterate tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Tags as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// A playable champion and its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    /// Display name (unique, matched case-insensitively).
    pub name: String,
    pub release_year: Option<String>,
    pub resource_type: Option<String>,
    pub range: Option<String>,
    pub gender: Option<String>,
    pub champion_type: Option<String>,
    #[serde(default)]
    pub regions: TagSet,
    #[serde(default)]
    pub roles: TagSet,
    #[serde(default)]
    pub subclasses: TagSet,
    #[serde(default)]
    pub species: TagSet,
}

impl Champion {
    /// Create a champion with no attributes set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            release_year: None,
            resource_type: None,
            range: None,
            gender: None,
            champion_type: None,
            regions: TagSet::new(),
            roles: TagSet::new(),
            subclasses: TagSet::new(),
            species: TagSet::new(),
        }
    }

    /// Catalog key for a champion name.
    pub fn key_for(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// This champion's catalog key.
    pub fn key(&self) -> String {
        Self::key_for(&self.name)
    }

    /// Set a scalar attribute. The value is normalized; blanks clear it.
    pub fn with_scalar(mut self, field: ScalarField, value: &str) -> Self {
        *self.scalar_mut(field) = normalize_scalar(value);
        self
    }

    /// Add tags of one kind.
    pub fn with_tags<'a>(mut self, kind: TagKind, tags: impl IntoIterator<Item = &'a str>) -> Self {
        let set = self.tags_mut(kind);
        for tag in tags {
            set.insert(tag);
        }
        self
    }

    /// Scalar value for a field.
    pub fn scalar(&self, field: ScalarField) -> Option<&str> {
        match field {
            ScalarField::ReleaseYear => self.release_year.as_deref(),
            ScalarField::ResourceType => self.resource_type.as_deref(),
            ScalarField::Range => self.range.as_deref(),
            ScalarField::Gender => self.gender.as_deref(),
            ScalarField::ChampionType => self.champion_type.as_deref(),
        }
    }

    fn scalar_mut(&mut self, field: ScalarField) -> &mut Option<String> {
        match field {
            ScalarField::ReleaseYear => &mut self.release_year,
            ScalarField::ResourceType => &mut self.resource_type,
            ScalarField::Range => &mut self.range,
            ScalarField::Gender => &mut self.gender,
            ScalarField::ChampionType => &mut self.champion_type,
        }
    }

    /// Tag set for a kind.
    pub fn tags(&self, kind: TagKind) -> &TagSet {
        match kind {
            TagKind::Region => &self.regions,
            TagKind::Role => &self.roles,
            TagKind::Subclass => &self.subclasses,
            TagKind::Specie => &self.species,
        }
    }

    pub(crate) fn tags_mut(&mut self, kind: TagKind) -> &mut TagSet {
        match kind {
            TagKind::Region => &mut self.regions,
            TagKind::Role => &mut self.roles,
            TagKind::Subclass => &mut self.subclasses,
            TagKind::Specie => &mut self.species,
        }
    }

    /// Actual values for any attribute kind: the tag names for tag kinds,
    /// zero or one value for scalars.
    pub fn values(&self, kind: AttributeKind) -> Vec<&str> {
        match kind.shape() {
            AttributeShape::Tags(tag_kind) => self.tags(tag_kind).iter().collect(),
            AttributeShape::Scalar(field) => self.scalar(field).into_iter().collect(),
        }
    }

    /// Attribute snapshot in the shape served to clients.
    pub fn snapshot(&self) -> ChampionSnapshot {
        ChampionSnapshot::from(self)
    }
}

/// Flat view of a champion's attributes, one name list per tag kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionSnapshot {
    pub name: String,
    pub release_year: Option<String>,
    pub resource_type: Option<String>,
    pub range: Option<String>,
    pub gender: Option<String>,
    pub champion_type: Option<String>,
    pub region: Vec<String>,
    pub role: Vec<String>,
    pub subclass: Vec<String>,
    pub specie: Vec<String>,
}

impl From<&Champion> for ChampionSnapshot {
    fn from(champion: &Champion) -> Self {
        Self {
            name: champion.name.clone(),
            release_year: champion.release_year.clone(),
            resource_type: champion.resource_type.clone(),
            range: champion.range.clone(),
            gender: champion.gender.clone(),
            champion_type: champion.champion_type.clone(),
            region: champion.regions.as_slice().to_vec(),
            role: champion.roles.as_slice().to_vec(),
            subclass: champion.subclasses.as_slice().to_vec(),
            specie: champion.species.as_slice().to_vec(),
        }
    }
}
