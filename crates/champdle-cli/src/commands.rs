//! Subcommand implementations. Each returns the text to print.

use std::path::Path;

use champdle_core::{
    import_csv_path, Catalog, Guess, ImportOptions, SearchMode, TagKind, Validator,
};
use tracing::debug;

use crate::formatter;

/// Import a CSV roster.
pub fn import(catalog: &Catalog, path: &Path, replace: bool) -> anyhow::Result<String> {
    let options = ImportOptions::new().replace(replace);
    let report = import_csv_path(catalog, path, &options)?;
    Ok(format!(
        "Imported {} row(s): {} created, {} updated, {} new tag(s). Catalog now holds {} champion(s).",
        report.rows,
        report.champions_created,
        report.champions_updated,
        report.tags_created,
        catalog.len()
    ))
}

/// Search champion names.
pub fn search(catalog: &Catalog, query: &str, mode: SearchMode, limit: usize) -> String {
    let names = catalog.search_limited(query, mode, limit);
    debug!(query, %mode, results = names.len(), "search");
    formatter::names_table(&names)
}

/// Show one champion.
pub fn show(catalog: &Catalog, name: &str, json: bool) -> anyhow::Result<String> {
    let snapshot = catalog.attributes(name)?;
    if json {
        Ok(serde_json::to_string_pretty(&snapshot)?)
    } else {
        Ok(formatter::champion_table(&snapshot))
    }
}

/// Validate a guess pair; the flag is the overall verdict.
pub fn validate(
    catalog: &Catalog,
    validator: &Validator,
    name: &str,
    row: &Guess,
    col: &Guess,
) -> anyhow::Result<(String, bool)> {
    let champion = catalog.find_by_name(name)?;
    let result = validator.validate(&champion, row, col);
    let report = formatter::validation_table(&champion.name, row, col, &result);
    Ok((report, result.is_valid()))
}

/// Catalog size and tag counts.
pub fn stats(catalog: &Catalog) -> String {
    let counts: Vec<(TagKind, usize)> = TagKind::ALL
        .into_iter()
        .map(|kind| (kind, catalog.tag_values(kind).len()))
        .collect();
    formatter::stats_table(catalog.len(), &counts)
}
