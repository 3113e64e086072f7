//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use moodline_core::types::DecisionPolicy;
use std::path::PathBuf;

/// Moodline — chat transcript sentiment analysis.
#[derive(Debug, Parser)]
#[command(name = "moodline", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a chat transcript file and print the sentiment report.
    Analyze(AnalyzeArgs),
    /// Start the HTTP API server.
    Serve(ServeArgs),
}

/// Arguments for the `analyze` command.
#[derive(Debug, clap::Args)]
pub struct AnalyzeArgs {
    /// Path to the exported chat transcript.
    pub file: PathBuf,

    /// Decision policy converting probabilities into labels.
    #[arg(long, value_enum, default_value_t = PolicyArg::Threshold)]
    pub policy: PolicyArg,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Also write per-message results to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Directory holding the model artifacts, overriding the configuration.
    #[arg(long)]
    pub model_dir: Option<PathBuf>,
}

/// Arguments for the `serve` command.
#[derive(Debug, clap::Args)]
pub struct ServeArgs {
    /// Host to bind to, overriding the configuration.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to, overriding the configuration.
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory holding the model artifacts, overriding the configuration.
    #[arg(long)]
    pub model_dir: Option<PathBuf>,
}

/// Decision policy choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Hard confidence thresholds (reference policy).
    Threshold,
    /// Positive-boost heuristic.
    PositiveBoost,
}

impl From<PolicyArg> for DecisionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Threshold => DecisionPolicy::Threshold,
            PolicyArg::PositiveBoost => DecisionPolicy::PositiveBoost,
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// The full report as JSON.
    Json,
}
