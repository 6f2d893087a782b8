// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "covsum",
    version = crate::VERSION,
    about = "Summarise a Jest --json --coverage report as a per-file coverage table"
)]
pub struct Args {
    /// Report to read (takes precedence over --report)
    #[arg(value_name = "REPORT", value_hint = ValueHint::FilePath)]
    pub report: Option<PathBuf>,

    /// Report to read
    #[arg(long = "report", value_name = "PATH", env = "COVSUM_REPORT", value_hint = ValueHint::FilePath)]
    pub report_path: Option<PathBuf>,

    /// Pass/fail threshold, an integer percentage
    #[arg(long, short = 't', env = "COVSUM_THRESHOLD", default_value = "80", allow_hyphen_values = true)]
    pub threshold: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "markdown")]
    pub format: CliOutputFormat,

    /// Write the summary to this file instead of stdout
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Append the test-run counts below the table
    #[arg(long)]
    pub test_summary: bool,

    /// Exit with status 2 when an overall metric is below the threshold
    #[arg(long)]
    pub strict: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
