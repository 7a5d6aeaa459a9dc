//! Table output using comfy-table.

use champdle_core::{ChampionSnapshot, Guess, TagKind, ValidationResult};
use comfy_table::{Cell, Table};

/// One-column table of names.
pub fn names_table(names: &[String]) -> String {
    if names.is_empty() {
        return "No results".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Champion"]);
    for name in names {
        table.add_row(vec![name]);
    }
    table.to_string()
}

/// Attribute/value table for one champion.
pub fn champion_table(snapshot: &ChampionSnapshot) -> String {
    let scalar = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let tags = |values: &[String]| {
        if values.is_empty() {
            "-".to_string()
        } else {
            values.join(", ")
        }
    };

    let mut table = Table::new();
    table.set_header(vec!["Attribute", "Value"]);
    let rows = [
        ("name", snapshot.name.clone()),
        ("region", tags(&snapshot.region)),
        ("role", tags(&snapshot.role)),
        ("subclass", tags(&snapshot.subclass)),
        ("specie", tags(&snapshot.specie)),
        ("release_year", scalar(&snapshot.release_year)),
        ("resource_type", scalar(&snapshot.resource_type)),
        ("range", scalar(&snapshot.range)),
        ("gender", scalar(&snapshot.gender)),
        ("champion_type", scalar(&snapshot.champion_type)),
    ];
    for (attribute, value) in rows {
        table.add_row(vec![Cell::new(attribute), Cell::new(value)]);
    }
    table.to_string()
}

/// Per-guess verdicts followed by the overall result.
pub fn validation_table(
    champion: &str,
    row: &Guess,
    col: &Guess,
    result: &ValidationResult,
) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Guess", "Kind", "Expected", "Verdict"]);

    for (label, guess, verdict) in [("row", row, &result.row), ("col", col, &result.col)] {
        let verdict = match verdict {
            Ok(()) => "ok".to_string(),
            Err(e) => e.to_string(),
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(&guess.kind),
            Cell::new(guess.expected.as_deref().unwrap_or("-")),
            Cell::new(verdict),
        ]);
    }

    let overall = if result.is_valid() { "valid" } else { "invalid" };
    format!("{}\n{}: {}", table, champion, overall)
}

/// Catalog statistics.
pub fn stats_table(champions: usize, tag_counts: &[(TagKind, usize)]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Count"]);
    table.add_row(vec![Cell::new("champions"), Cell::new(champions)]);
    for (kind, count) in tag_counts {
        table.add_row(vec![Cell::new(format!("{} tags", kind)), Cell::new(count)]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use champdle_core::Champion;

    #[test]
    fn test_empty_names() {
        assert_eq!(names_table(&[]), "No results");
    }

    #[test]
    fn test_champion_table_placeholders() {
        let snapshot = Champion::new("Nobody").snapshot();
        let output = champion_table(&snapshot);
        assert!(output.contains("Nobody"));
        assert!(output.contains("champion_type"));
        assert!(output.contains('-'));
    }

    #[test]
    fn test_stats_rows() {
        let output = stats_table(3, &[(TagKind::Region, 2), (TagKind::Role, 4)]);
        assert!(output.contains("region tags"));
        assert!(output.contains("role tags"));
    }
}
