//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Extracts berray component documentation from Java sources as JSON
#[derive(Parser, Debug)]
#[command(name = "berray-doc")]
#[command(about = "Extracts documentation of berray game objects, components and actions as JSON")]
#[command(version)]
pub struct Cli {
    /// Root directory of the Java sources
    #[arg(value_name = "SOURCE_ROOT")]
    pub source_root: PathBuf,

    /// Output file (`-` for stdout) [default: doc/doc.json]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "BERRAY_DOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interesting base type (repeatable); replaces the configured set
    #[arg(short, long = "interesting", value_name = "FQN")]
    pub interesting: Vec<String>,

    /// JSON layout
    #[arg(long, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Print the syntax tree of every parsed file to stderr
    #[arg(long)]
    pub print_ast: bool,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON
    #[default]
    Pretty,
    /// Single-line JSON
    Compact,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
