//! Champdle command-line tool.
//!
//! Loads rosters into the catalog and inspects it offline, without the
//! gateway running.

mod commands;
mod formatter;

use std::path::PathBuf;

use champdle_core::{Catalog, Guess, SearchMode, Validator, ValidatorConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Champdle catalog tool
#[derive(Parser, Debug)]
#[command(name = "champdle")]
#[command(version, about = "Champdle catalog maintenance tool")]
pub struct Args {
    /// Directory holding the champion catalog
    #[arg(short, long, default_value = "./champdle-data", global = true)]
    pub data_dir: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import champions from a CSV roster
    Import {
        /// Path to the CSV file
        path: PathBuf,
        /// Clear the catalog first
        #[arg(long)]
        replace: bool,
    },
    /// Search champion names
    Search {
        query: String,
        /// Match from the start of the name only
        #[arg(long)]
        prefix: bool,
        /// Maximum number of results
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Show a champion's attributes
    Show {
        name: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Check a champion against a row and a column guess
    Validate {
        name: String,
        row_kind: String,
        row_value: String,
        col_kind: String,
        col_value: String,
        /// Region value that matches every champion
        #[arg(long)]
        wildcard_region: Option<String>,
        /// Disable the wildcard region rule
        #[arg(long, conflicts_with = "wildcard_region")]
        no_wildcard: bool,
    },
    /// Catalog statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("champdle={level},champdle_core={level}", level = args.log_level).into()
            }),
        )
        .init();

    let catalog = Catalog::open_path(&args.data_dir)?;

    match args.command {
        Command::Import { path, replace } => {
            println!("{}", commands::import(&catalog, &path, replace)?);
        }
        Command::Search {
            query,
            prefix,
            limit,
        } => {
            let mode = if prefix {
                SearchMode::Prefix
            } else {
                SearchMode::Contains
            };
            println!("{}", commands::search(&catalog, &query, mode, limit));
        }
        Command::Show { name, json } => {
            println!("{}", commands::show(&catalog, &name, json)?);
        }
        Command::Validate {
            name,
            row_kind,
            row_value,
            col_kind,
            col_value,
            wildcard_region,
            no_wildcard,
        } => {
            let mut config = ValidatorConfig::default();
            if let Some(token) = wildcard_region {
                config = config.with_wildcard_region(token);
            }
            if no_wildcard {
                config = config.without_wildcard();
            }
            let validator = Validator::new(config);
            let row = Guess::new(row_kind, &row_value);
            let col = Guess::new(col_kind, &col_value);

            let (report, valid) = commands::validate(&catalog, &validator, &name, &row, &col)?;
            println!("{}", report);
            if !valid {
                std::process::exit(1);
            }
        }
        Command::Stats => {
            println!("{}", commands::stats(&catalog));
        }
    }

    Ok(())
}
