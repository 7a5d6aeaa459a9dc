//! Champdle Core - champion catalog, attribute validation, and bulk import.
//!
//! This crate holds everything behind the guessing game's HTTP surface: the
//! persistent champion catalog, the validator that decides whether a champion
//! satisfies a (kind, expected value) guess, and the CSV importer that
//! populates the catalog.

pub mod catalog;
pub mod error;
pub mod import;
pub mod model;
pub mod validator;

pub use catalog::{BatchOutcome, Catalog, SearchMode};
pub use error::Error;
pub use import::{import_csv, import_csv_path, parse_csv, ImportOptions, ImportReport};
pub use model::{
    json_text, normalize_json, normalize_scalar, AttributeKind, Champion, ChampionSnapshot,
    ScalarField, TagKind, TagSet,
};
pub use validator::{
    Guess, GuessError, ValidationResult, ValidationSummary, Validator, ValidatorConfig,
    DEFAULT_WILDCARD_REGION,
};
