//! Champion catalog.
//!
//! The catalog stores champions and their tags in sled and answers lookups
//! and name searches from an in-memory snapshot.

mod catalog;
mod search;

pub use catalog::{BatchOutcome, Catalog};
pub use search::SearchMode;
