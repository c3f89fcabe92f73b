//! CLI argument definitions for the Layerstack binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Output format flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Textual representations, one per line
    Human,
    /// A single JSON document
    Json,
}

impl From<Format> for OutputFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Layerstack demonstration driver
#[derive(Parser, Debug)]
#[command(name = "layerstack")]
#[command(about = "Layerstack: generated record types and layered maps")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "human", env = "LAYERSTACK_FORMAT")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate record types and exercise their instances
    Records,
    /// Build layered maps and exercise set, delete and concatenation
    Layers,
    /// Run every demonstration (default)
    All,
}
