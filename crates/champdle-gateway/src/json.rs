//! JSON request and response types for the HTTP gateway.

use std::collections::BTreeMap;

use champdle_core::SearchMode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Gateway version.
    pub version: String,
    /// Champions in the catalog.
    pub champions: usize,
}

/// Query string for `/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Name fragment.
    #[serde(default)]
    pub query: Option<String>,
    /// Match mode; the gateway default applies when absent.
    #[serde(default)]
    pub mode: Option<SearchMode>,
    /// Result cap; clamped to the configured limit.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query string for `/champion` and `/getChampData`.
#[derive(Debug, Default, Deserialize)]
pub struct ChampionParams {
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `POST /validate`.
///
/// Every field is optional at the serde level so that missing fields can
/// be reported together. Older clients send the attribute kinds as
/// `row_a`/`col_a`; those take precedence over `row_attr`/`col_attr`.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub champion_name: Option<String>,
    #[serde(default)]
    pub row_attr: Option<Value>,
    #[serde(default)]
    pub col_attr: Option<Value>,
    #[serde(default)]
    pub row_a: Option<String>,
    #[serde(default)]
    pub col_a: Option<String>,
    #[serde(default)]
    pub expected_value_row: Option<Value>,
    #[serde(default)]
    pub expected_value_col: Option<Value>,
}

impl ValidateRequest {
    /// Trimmed champion name, if one was sent.
    pub fn champion(&self) -> Option<&str> {
        non_blank(self.champion_name.as_deref())
    }

    /// Row attribute kind.
    pub fn row_kind(&self) -> Option<&str> {
        non_blank(self.row_a.as_deref()).or_else(|| kind_text(self.row_attr.as_ref()))
    }

    /// Column attribute kind.
    pub fn col_kind(&self) -> Option<&str> {
        non_blank(self.col_a.as_deref()).or_else(|| kind_text(self.col_attr.as_ref()))
    }

    /// Names of required fields that are absent, in request order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.champion().is_none() {
            missing.push("champion_name");
        }
        if self.row_kind().is_none() {
            missing.push("row_attr");
        }
        if self.col_kind().is_none() {
            missing.push("col_attr");
        }
        missing
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|s| !s.is_empty())
}

fn kind_text(value: Option<&Value>) -> Option<&str> {
    non_blank(value.and_then(Value::as_str))
}

/// `GET /attributes` response.
#[derive(Debug, Serialize)]
pub struct AttributesResponse {
    /// Every accepted attribute kind.
    pub kinds: Vec<&'static str>,
    /// Region token that matches every champion.
    pub wildcard_region: Option<String>,
    /// Known tag names per tag kind.
    pub tags: BTreeMap<&'static str, Vec<String>>,
}
