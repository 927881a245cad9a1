//! Clinex CLI library.
//!
//! Provides the core functionality for the clinex command-line interface:
//! configuration management, extraction invocation and output formatting.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
