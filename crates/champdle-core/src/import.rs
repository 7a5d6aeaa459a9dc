//! Bulk champion import from CSV.
//!
//! Expected header: `name, region, role, subclass, specie, release_year,
//! resources, range, gender[, champion_type]`. Tag columns hold
//! comma-separated lists. The whole file is parsed before anything is
//! written, and the write is a single catalog transaction, so a bad row
//! leaves the catalog untouched.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::catalog::Catalog;
use crate::error::Error;
use crate::model::{Champion, ScalarField, TagKind, TagSet};

/// Import settings.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Clear the catalog before loading.
    pub replace: bool,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the existing catalog as part of the import.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }
}

/// Summary of a completed import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Data rows read.
    pub rows: usize,
    pub champions_created: usize,
    pub champions_updated: usize,
    pub tags_created: usize,
}

/// One CSV row as written by the roster spreadsheet.
#[derive(Debug, Deserialize)]
struct ChampionRow {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    subclass: String,
    #[serde(default)]
    specie: String,
    #[serde(default)]
    release_year: String,
    #[serde(default, alias = "resource_type")]
    resources: String,
    #[serde(default)]
    range: String,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    champion_type: String,
}

impl ChampionRow {
    fn into_champion(self, line: u64) -> Result<Champion, Error> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidRecord {
                line,
                message: "champion name is empty".to_string(),
            });
        }

        let mut champion = Champion::new(self.name)
            .with_scalar(ScalarField::ReleaseYear, &self.release_year)
            .with_scalar(ScalarField::ResourceType, &self.resources)
            .with_scalar(ScalarField::Range, &self.range)
            .with_scalar(ScalarField::Gender, &self.gender)
            .with_scalar(ScalarField::ChampionType, &self.champion_type);

        for (kind, raw) in [
            (TagKind::Region, &self.region),
            (TagKind::Role, &self.role),
            (TagKind::Subclass, &self.subclass),
            (TagKind::Specie, &self.specie),
        ] {
            *champion.tags_mut(kind) = TagSet::parse_list(raw);
        }

        Ok(champion)
    }
}

/// Parse every row of a CSV source into champions.
pub fn parse_csv<R: Read>(source: R) -> Result<Vec<Champion>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    let headers = reader.headers()?.clone();

    let mut champions = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: ChampionRow =
            record
                .deserialize(Some(&headers))
                .map_err(|e| Error::InvalidRecord {
                    line,
                    message: e.to_string(),
                })?;
        let champion = row.into_champion(line)?;
        debug!(line, champion = %champion.name, "parsed champion row");
        champions.push(champion);
    }

    Ok(champions)
}

/// Import champions from a CSV source into the catalog.
pub fn import_csv<R: Read>(
    catalog: &Catalog,
    source: R,
    options: &ImportOptions,
) -> Result<ImportReport, Error> {
    let result = parse_csv(source).and_then(|champions| {
        let outcome = catalog.upsert_batch(&champions, options.replace)?;
        catalog.flush()?;
        Ok(ImportReport {
            rows: champions.len(),
            champions_created: outcome.champions_created,
            champions_updated: outcome.champions_updated,
            tags_created: outcome.tags_created,
        })
    });

    match &result {
        Ok(report) => info!(
            rows = report.rows,
            created = report.champions_created,
            updated = report.champions_updated,
            tags_created = report.tags_created,
            replace = options.replace,
            "champion import committed"
        ),
        Err(e) => error!(error = %e, "champion import failed; nothing was written"),
    }

    result
}

/// Import champions from a CSV file.
pub fn import_csv_path(
    catalog: &Catalog,
    path: impl AsRef<Path>,
    options: &ImportOptions,
) -> Result<ImportReport, Error> {
    let path = path.as_ref();
    info!(path = %path.display(), "importing champions");
    let file = File::open(path)?;
    import_csv(catalog, file, options)
}
