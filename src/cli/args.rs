//! CLI argument definitions using clap.
//!
//! Every option overrides the matching `.localeauditrc.json` setting, which
//! in turn overrides the built-in defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to start looking for the config file from
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Directory holding the locale JSON files (overrides config file)
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,

    /// Reference locale every other locale is compared against (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Path of the markdown report to write (overrides config file)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Compare nested keys joined with dots instead of top-level keys only
    #[arg(long)]
    pub flatten_nested: bool,

    /// Console output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Audit result as pretty-printed JSON
    Json,
}
