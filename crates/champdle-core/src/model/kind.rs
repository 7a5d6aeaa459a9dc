//! Attribute kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A multi-valued tag attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// Region of origin.
    Region,
    /// Lane role.
    Role,
    /// Class subdivision.
    Subclass,
    /// Species.
    Specie,
}

impl TagKind {
    /// All tag kinds, in display order.
    pub const ALL: [TagKind; 4] = [
        TagKind::Region,
        TagKind::Role,
        TagKind::Subclass,
        TagKind::Specie,
    ];

    /// Stable lowercase name, also used as the storage namespace.
    pub fn as_str(self) -> &'static str {
        match self {
            TagKind::Region => "region",
            TagKind::Role => "role",
            TagKind::Subclass => "subclass",
            TagKind::Specie => "specie",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-valued scalar attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    /// Year the champion was released.
    ReleaseYear,
    /// Resource bar (Mana, Energy, ...).
    ResourceType,
    /// Melee or ranged.
    Range,
    /// Gender.
    Gender,
    /// Broad class.
    ChampionType,
}

impl ScalarField {
    /// All scalar fields.
    pub const ALL: [ScalarField; 5] = [
        ScalarField::ReleaseYear,
        ScalarField::ResourceType,
        ScalarField::Range,
        ScalarField::Gender,
        ScalarField::ChampionType,
    ];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarField::ReleaseYear => "release_year",
            ScalarField::ResourceType => "resource_type",
            ScalarField::Range => "range",
            ScalarField::Gender => "gender",
            ScalarField::ChampionType => "champion_type",
        }
    }
}

/// Every attribute a guess can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Region,
    Role,
    Subclass,
    Specie,
    ReleaseYear,
    ResourceType,
    Range,
    Gender,
    ChampionType,
}

impl AttributeKind {
    /// All recognized kinds.
    pub const ALL: [AttributeKind; 9] = [
        AttributeKind::Region,
        AttributeKind::Role,
        AttributeKind::Subclass,
        AttributeKind::Specie,
        AttributeKind::ReleaseYear,
        AttributeKind::ResourceType,
        AttributeKind::Range,
        AttributeKind::Gender,
        AttributeKind::ChampionType,
    ];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self.shape() {
            AttributeShape::Tags(kind) => kind.as_str(),
            AttributeShape::Scalar(field) => field.as_str(),
        }
    }

    /// Whether the attribute holds a set of tags rather than one value.
    pub fn is_multi_valued(self) -> bool {
        matches!(self.shape(), AttributeShape::Tags(_))
    }

    /// Which storage shape backs this attribute.
    pub fn shape(self) -> AttributeShape {
        match self {
            AttributeKind::Region => AttributeShape::Tags(TagKind::Region),
            AttributeKind::Role => AttributeShape::Tags(TagKind::Role),
            AttributeKind::Subclass => AttributeShape::Tags(TagKind::Subclass),
            AttributeKind::Specie => AttributeShape::Tags(TagKind::Specie),
            AttributeKind::ReleaseYear => AttributeShape::Scalar(ScalarField::ReleaseYear),
            AttributeKind::ResourceType => AttributeShape::Scalar(ScalarField::ResourceType),
            AttributeKind::Range => AttributeShape::Scalar(ScalarField::Range),
            AttributeKind::Gender => AttributeShape::Scalar(ScalarField::Gender),
            AttributeKind::ChampionType => AttributeShape::Scalar(ScalarField::ChampionType),
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage shape of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeShape {
    /// Multi-valued tag set.
    Tags(TagKind),
    /// Single optional scalar.
    Scalar(ScalarField),
}

/// Returned when a kind name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAttributeKind(pub String);

impl fmt::Display for UnknownAttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown attribute kind: {}", self.0)
    }
}

impl std::error::Error for UnknownAttributeKind {}

impl FromStr for AttributeKind {
    type Err = UnknownAttributeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "region" | "regions" => AttributeKind::Region,
            "role" | "roles" => AttributeKind::Role,
            "subclass" | "subclasses" => AttributeKind::Subclass,
            "specie" | "species" => AttributeKind::Specie,
            "release_year" => AttributeKind::ReleaseYear,
            "resource_type" | "resources" => AttributeKind::ResourceType,
            "range" => AttributeKind::Range,
            "gender" => AttributeKind::Gender,
            "champion_type" => AttributeKind::ChampionType,
            _ => return Err(UnknownAttributeKind(s.to_string())),
        };
        Ok(kind)
    }
}
