//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "retab",
    version,
    about = "Re-project tabular data through named column-mapping templates",
    long_about = "Re-project CSV data into a normalized, typed output table.\n\n\
                  A template names the output columns, the spreadsheet-style\n\
                  source column each one reads from, and the declared value\n\
                  type (string, number, date) its cells are coerced to."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Process an input file with a named template.
    Process(ProcessArgs),

    /// List the templates available in a template file.
    Templates(TemplatesArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the CSV file to process.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to the template collection (JSON).
    #[arg(long = "templates", value_name = "FILE")]
    pub templates: PathBuf,

    /// Name of the template to apply (exact, case-sensitive).
    #[arg(long = "template", value_name = "NAME")]
    pub template: String,

    /// Output file (default: <INPUT> with a .processed.csv extension).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the first N processed rows as a table.
    #[arg(long = "preview", value_name = "ROWS", default_value_t = 0)]
    pub preview: usize,

    /// Process and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct TemplatesArgs {
    /// Path to the template collection (JSON).
    #[arg(long = "templates", value_name = "FILE")]
    pub templates: PathBuf,
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
