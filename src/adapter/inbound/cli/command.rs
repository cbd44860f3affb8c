//! Command-line interface definitions.
//!
//! Defines the CLI structure for the edgematch application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;
use crate::infrastructure::config::source::SourceKind;

/// Cross-venue prediction market unification and arbitrage CLI
#[derive(Parser, Debug)]
#[command(name = "edgematch")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the edgematch CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch listings, unify them across venues and report arbitrage
    Run(Box<RunArgs>),

    /// Score the name similarity of two product titles
    Similarity(SimilarityArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `edgematch config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `similarity` subcommand.
#[derive(Parser, Debug)]
pub struct SimilarityArgs {
    /// First product name.
    pub left: String,
    /// Second product name.
    pub right: String,
    /// Path to the configuration file (for the threshold).
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
    /// Override the clustering threshold.
    #[arg(long)]
    pub threshold: Option<f64>,
}

/// Arguments for the `run` subcommand.
///
/// All optional fields override the corresponding configuration file values.
/// A missing configuration file is not an error; defaults apply.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Listing source to read from.
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// JSON listings file (implies `--source file`).
    #[arg(long, conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// JSON listings endpoint (implies `--source http`).
    #[arg(long)]
    pub url: Option<String>,

    /// Override the clustering similarity threshold (0-1).
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Override the confidence bonus (0-1).
    #[arg(long)]
    pub confidence_bonus: Option<f64>,

    /// Directory for exported reports.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Skip writing report files.
    #[arg(long)]
    pub no_export: bool,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}
