//! CLI argument definitions for the category fixture transpiler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use catfix_render::DEFAULT_MAX_PER_CHUNK;

#[derive(Parser)]
#[command(
    name = "catfix",
    version,
    about = "Category fixture transpiler - Convert catalogue CSV exports to Kotlin fixtures",
    long_about = "Convert a category catalogue CSV export into Kotlin\n\
                  CategoryLaunchDataProviderModel test fixture declarations.\n\n\
                  Reads the export described by a YAML configuration (or an\n\
                  in-process default for ad hoc use), derives typed per-category\n\
                  attributes, and renders one declarative entry per category."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the Kotlin fixture document from a catalogue export.
    Generate(GenerateArgs),

    /// Split a previously generated document into bounded fragments.
    Split(SplitArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// YAML configuration file describing source, columns, and mappings.
    #[arg(long = "config", value_name = "YAML")]
    pub config: Option<PathBuf>,

    /// Catalogue CSV export (overrides the configured path; with no
    /// configuration file, the built-in column defaults are used).
    #[arg(long = "csv", value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Output Kotlin file (overrides the configured path).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Drop non-leaf categories at extraction time instead of relying on
    /// the rendered leafCategories() accessor.
    #[arg(long = "leaf-only")]
    pub leaf_only: bool,

    /// Render category levels as CategoryLevel constants instead of raw
    /// integers.
    #[arg(long = "level-names")]
    pub level_names: bool,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Previously generated Kotlin fixture document.
    #[arg(value_name = "DOCUMENT")]
    pub input: PathBuf,

    /// Directory for fragment files (default: alongside the document).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Maximum entries per fragment.
    #[arg(long = "max-per-chunk", value_name = "N", default_value_t = DEFAULT_MAX_PER_CHUNK)]
    pub max_per_chunk: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
