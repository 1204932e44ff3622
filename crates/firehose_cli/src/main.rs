//! Firehose CLI: classifies analysis diagnostics and turns recorded event logs
//! into structured reports.
//!
//! Provides `firehose classify` for looking up the identifier of individual
//! messages and `firehose report` for replaying a tool's event log through a
//! reporter.

#![warn(missing_docs)]

mod classify;
mod config;
mod event_log;
mod report;

use std::{process, str::FromStr};

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, LevelFilter};

/// Firehose: structured reports from analysis diagnostics.
#[derive(Parser, Debug)]
#[command(name = "firehose", version, about = "Firehose report generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to a custom `firehose.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the identifier and class of each message.
    Classify {
        /// Diagnostic message texts to classify.
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// Replay a recorded event log into a report.
    Report(ReportArgs),
}

/// Arguments for the `firehose report` subcommand.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Path of the recorded event log.
    pub event_log: String,

    /// Stream the report document to this path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format of the final report tree.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Collect failures and infos into the report tree as well as issues.
    #[arg(long)]
    pub aggregate: bool,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Nested markup.
    Xml,
    /// Machine-readable JSON output.
    Json,
}

impl From<firehose_config::OutputFormat> for ReportFormat {
    fn from(format: firehose_config::OutputFormat) -> Self {
        match format {
            firehose_config::OutputFormat::Xml => Self::Xml,
            firehose_config::OutputFormat::Json => Self::Json,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let log_level = resolve_log_level(&cli);
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(log_level:?; "Starting firehose");

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Classify { ref messages } => classify::run(messages),
        Command::Report(ref args) => report::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Picks the log level: `--quiet` and `--verbose` win over `--log-level`.
fn resolve_log_level(cli: &Cli) -> LevelFilter {
    if cli.quiet {
        return LevelFilter::Error;
    }
    if cli.verbose {
        return LevelFilter::Debug;
    }
    LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            cli.log_level
        );
        LevelFilter::Warn
    })
}
