//! CLI parse: clap types for confview. No behavior; definitions only.

use crate::types::Format;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Confview CLI - show, query and complete configuration instances
#[derive(Parser)]
#[command(name = "confview")]
#[command(about = "Render and complete running, candidate and startup configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Store directory (overrides store.path)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Command-replay style (none, vars, all)
    #[arg(long)]
    pub style: Option<String>,

    /// Live variable as NAME=VALUE; repeatable, order is kept
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show configuration in one of the output formats
    Show {
        #[arg(value_enum)]
        format: Format,
        /// Instance: running, candidate or startup
        instance: String,
        /// Query path; may hold one %s filled from the variable named by ATTR
        query: String,
        /// Name of the live variable substituted into the query
        attr: Option<String>,
        /// CSV columns
        #[arg(long, value_delimiter = ',')]
        fields: Option<Vec<String>>,
        /// Prefix for command-replay lines
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Print the nodes matching the live variable "xpath"
    Xpath {
        instance: String,
    },
    /// Expand completion candidates for key-format templates
    Complete {
        instance: String,
        /// Key-format templates; %s slots are filled from the live variables
        #[arg(required = true)]
        keyfmt: Vec<String>,
        /// Accumulate into one buffer, as the legacy completion form does
        #[arg(long)]
        legacy: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: ListFormat,
    },
    /// List directory entries for completion
    Files {
        dir: PathBuf,
        /// Octal mask tested against each entry's mode bits
        #[arg(long, default_value = "100000", value_parser = parse_octal)]
        mode: u32,
    },
    /// Replace an instance with the contents of a JSON or TOML document
    Import {
        instance: String,
        file: PathBuf,
    },
    /// Print a whole instance as JSON
    Export {
        instance: String,
    },
}

/// Output format for candidate and file lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
    Table,
}

fn parse_octal(raw: &str) -> Result<u32, String> {
    let digits = raw.trim_start_matches("0o");
    u32::from_str_radix(digits, 8).map_err(|e| format!("invalid octal mode '{}': {}", raw, e))
}
