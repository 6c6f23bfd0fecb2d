//! CLI argument definitions for Measure Report Studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "measure-report-studio",
    version,
    about = "Measure Report Studio - review grouped measurements and prepare reports",
    long_about = "Import grouped measurement batches, exclude individual measures,\n\
                  browse past imports and inspect report inputs against a referential."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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

    /// History file (default: platform data directory).
    #[arg(long = "history-file", value_name = "PATH", global = true)]
    pub history_file: Option<PathBuf>,

    /// Configuration file (default: platform config directory).
    #[arg(long = "config-file", value_name = "PATH", global = true)]
    pub config_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive session.
    Session(SessionArgs),

    /// Print the stored history, most recent first.
    History(HistoryArgs),

    /// Print the configuration file location and effective values.
    Config,
}

#[derive(Parser)]
pub struct SessionArgs {
    /// Import this batch (JSON) before reading commands.
    #[arg(long = "import", value_name = "FILE")]
    pub import: Option<PathBuf>,
}

#[derive(Parser)]
pub struct HistoryArgs {
    /// Show at most this many entries.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
