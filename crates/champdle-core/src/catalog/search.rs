//! Name search modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a search query is matched against champion names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Name contains the query anywhere.
    #[default]
    Contains,
    /// Name starts with the query.
    Prefix,
}

impl SearchMode {
    /// Match an already lower-cased name against a lower-cased query.
    pub(crate) fn matches(self, name_lower: &str, query_lower: &str) -> bool {
        match self {
            SearchMode::Contains => name_lower.contains(query_lower),
            SearchMode::Prefix => name_lower.starts_with(query_lower),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Contains => write!(f, "contains"),
            SearchMode::Prefix => write!(f, "prefix"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contains" | "substring" => Ok(SearchMode::Contains),
            "prefix" | "starts_with" => Ok(SearchMode::Prefix),
            other => Err(format!("unknown search mode '{}'. Use: contains, prefix", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes() {
        assert!(SearchMode::Contains.matches("miss fortune", "fort"));
        assert!(!SearchMode::Prefix.matches("miss fortune", "fort"));
        assert!(SearchMode::Prefix.matches("miss fortune", "miss"));
    }

    #[test]
    fn test_parse() {
        assert_eq!("Prefix".parse::<SearchMode>().unwrap(), SearchMode::Prefix);
        assert_eq!("contains".parse::<SearchMode>().unwrap(), SearchMode::Contains);
        assert!("fuzzy".parse::<SearchMode>().is_err());
    }
}
