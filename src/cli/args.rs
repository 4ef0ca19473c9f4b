//! Command line argument parsing for the curio CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::document::Locale;

/// Curio - fuzzy search and related-item ranking for museum artifact catalogs
#[derive(Parser, Debug, Clone)]
#[command(name = "curio")]
#[command(about = "Fuzzy search and related-item ranking for museum artifact catalogs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CurioArgs {
    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Search configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "CURIO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Category catalog file (JSON); the builtin catalog is used otherwise
    #[arg(long, value_name = "CATALOG_FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CurioArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n.saturating_add(1),
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search artifacts by text and categories
    Search(SearchArgs),

    /// List artifacts related to one artifact
    Similar(SimilarArgs),

    /// Score a text against a query and show the components
    Score(ScoreArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Search(_) => "search",
            Command::Similar(_) => "similar",
            Command::Score(_) => "score",
        }
    }
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Artifact data file (JSON array or JSON Lines)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Query string; omit to list artifacts in the fallback order
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Category id to filter by (repeatable or comma-separated)
    #[arg(short = 'c', long = "category", value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Page number (1-based)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Results per page (default from configuration)
    #[arg(short = 's', long)]
    pub page_size: Option<usize>,

    /// Locale of the category names matched by the query
    #[arg(short, long, default_value = "vi")]
    pub locale: Locale,
}

/// Arguments for related-item suggestions
#[derive(Parser, Debug, Clone)]
pub struct SimilarArgs {
    /// Artifact data file (JSON array or JSON Lines)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Id of the artifact to compare against
    #[arg(value_name = "ID")]
    pub id: String,

    /// Number of related artifacts (default from configuration)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Locale of the category names shown
    #[arg(short, long, default_value = "vi")]
    pub locale: Locale,
}

/// Arguments for scoring a single text
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Text to score
    #[arg(value_name = "TEXT")]
    pub text: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Json,
}
