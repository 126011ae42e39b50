//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Specforge CLI - Normalize laptop datasheets into structured specifications.
#[derive(Debug, Parser)]
#[command(name = "specforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Database file path (overrides config)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => Self::Table,
            CliFormat::Json => Self::Json,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ingest a datasheet text file into the store
    Ingest(IngestArgs),

    /// Structure unprocessed specifications with the field extractor
    Structure(StructureArgs),

    /// Merge battery life tests into battery option records
    Consolidate,

    /// Recompute processor frequency fields from raw text
    FixProcessors,

    /// Report structured data completeness
    Validate,

    /// Show a sample of stored specifications
    Preview(PreviewArgs),
}

/// Arguments for the ingest command.
#[derive(Debug, Parser)]
pub struct IngestArgs {
    /// Datasheet text file
    pub file: PathBuf,

    /// Datasheet family profile (thinkpad, probook)
    #[arg(short, long)]
    pub profile: String,

    /// Laptop brand
    #[arg(short, long)]
    pub brand: String,

    /// Laptop model
    #[arg(short, long)]
    pub model: String,

    /// Laptop variant (e.g. "Intel")
    #[arg(long)]
    pub variant: Option<String>,
}

/// Arguments for the structure command.
#[derive(Debug, Parser)]
pub struct StructureArgs {
    /// Records per transaction (overrides the default of 20)
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Provider name (overrides config)
    #[arg(long)]
    pub provider: Option<String>,

    /// Model identifier (overrides config)
    #[arg(long)]
    pub model: Option<String>,

    /// API key; falls back to the environment variable named in config
    #[arg(long, env = "SPECFORGE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-specification extraction timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Arguments for the preview command.
#[derive(Debug, Parser)]
pub struct PreviewArgs {
    /// Number of rows to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Show the category distribution with sample specification names
    #[arg(long)]
    pub categories: bool,
}
