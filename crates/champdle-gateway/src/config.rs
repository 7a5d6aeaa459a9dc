//! Gateway configuration.

use std::path::PathBuf;

use champdle_core::{SearchMode, ValidatorConfig, DEFAULT_WILDCARD_REGION};
use clap::Parser;

/// Champdle HTTP/JSON gateway command line arguments.
#[derive(Debug, Parser)]
#[command(name = "champdle-gateway")]
#[command(about = "HTTP/JSON API for the Champdle guessing game")]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = "0.0.0.0:5000")]
    pub listen: String,

    /// Directory holding the champion catalog.
    #[arg(short, long, default_value = "./champdle-data")]
    pub data_dir: PathBuf,

    /// CSV roster to import before serving.
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Clear the catalog before importing the seed roster.
    #[arg(long, requires = "seed")]
    pub replace: bool,

    /// Region value that matches every champion.
    #[arg(long, default_value = DEFAULT_WILDCARD_REGION)]
    pub wildcard_region: String,

    /// Disable the wildcard region rule.
    #[arg(long)]
    pub no_wildcard: bool,

    /// Default search mode when a request does not name one.
    #[arg(long, default_value = "contains")]
    pub search_mode: SearchMode,

    /// Upper bound on search results per request.
    #[arg(long, default_value_t = 50)]
    pub search_limit: usize,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Catalog directory.
    pub data_dir: PathBuf,
    /// Roster imported at startup.
    pub seed: Option<PathBuf>,
    /// Replace the catalog with the seed roster.
    pub replace: bool,
    /// Wildcard region token; `None` when disabled.
    pub wildcard_region: Option<String>,
    pub search_mode: SearchMode,
    pub search_limit: usize,
}

impl GatewayConfig {
    /// Validator settings derived from this configuration.
    pub fn validator_config(&self) -> ValidatorConfig {
        match &self.wildcard_region {
            Some(token) => ValidatorConfig::default().with_wildcard_region(token.clone()),
            None => ValidatorConfig::default().without_wildcard(),
        }
    }
}

impl From<&Args> for GatewayConfig {
    fn from(args: &Args) -> Self {
        let wildcard_region = if args.no_wildcard || args.wildcard_region.trim().is_empty() {
            None
        } else {
            Some(args.wildcard_region.trim().to_string())
        };

        Self {
            listen_addr: args.listen.clone(),
            data_dir: args.data_dir.clone(),
            seed: args.seed.clone(),
            replace: args.replace,
            wildcard_region,
            search_mode: args.search_mode,
            search_limit: args.search_limit,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            data_dir: PathBuf::from("./champdle-data"),
            seed: None,
            replace: false,
            wildcard_region: Some(DEFAULT_WILDCARD_REGION.to_string()),
            search_mode: SearchMode::Contains,
            search_limit: 50,
        }
    }
}
