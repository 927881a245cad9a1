//! CLI command definitions and argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Clinex CLI - Extract categorized clinical entities from free text.
#[derive(Debug, Parser)]
#[command(name = "clinex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File containing clinical text; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub format: CliFormat,

    /// Force demo mode (local keyword matching, no vendor call)
    #[arg(long)]
    pub demo: bool,

    /// Configuration file path (defaults to ~/.clinex/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable per-category summary (default)
    Summary,
    /// JSON format
    Json,
}
