//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::severity::Severity;

/// A pattern-driven code review assistant that suggests targeted improvements
#[derive(Parser)]
#[command(name = "kibitz")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "KIBITZ_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan files and report improvement suggestions
    Scan(ScanArgs),
    /// Scan files and rewrite lines per configured fix rules
    Fix(FixArgs),
    /// Write a starter kibitz.toml and pattern set
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Files or directories to scan (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Pattern set files (override config)
    #[arg(short = 'p', long = "patterns", value_name = "FILE")]
    pub patterns: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Minimum severity to report
    #[arg(short, long, value_name = "LEVEL")]
    pub severity: Option<Severity>,

    /// Only report records carrying one of these tags
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Worker count (0 = one per logical CPU)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Maximum directory depth to traverse
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Match comment lines too
    #[arg(long)]
    pub no_skip_comments: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct FixArgs {
    /// Files or directories to fix (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Pattern set files (override config)
    #[arg(short = 'p', long = "patterns", value_name = "FILE")]
    pub patterns: Vec<PathBuf>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Worker count (0 = one per logical CPU)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
