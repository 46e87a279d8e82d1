//! Monitoring run: the glue between a log file on disk and findings on stdout.
//!
//! The data processing architecture is:
//!
//! log file
//! parse_log (all lines must be valid)
//! LogRecord
//! group_by_endpoint / group_by_subnet
//! TimeoutDetector / OverloadDetector / SubnetFaultCorrelator
//! Finding
//! render_findings
//!

mod render;
mod run;


use clap::{Args, ValueEnum};
use std::path::PathBuf;

pub use render::{error_hint, print_error, render_findings};
pub use run::{RunSummary, run_monitor, run_to};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `IP : ...` line per finding
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MonitorArgs {
    /// Server health log (`YYYYMMDDHHMMSS,IP/PREFIX,MILLIS|-` per line)
    #[arg(value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// NOT_ACCEPTABLE_COUNT [AVERAGE_COUNT NOT_ACCEPTABLE_MILLIS]
    #[arg(value_name = "THRESHOLD", allow_negative_numbers = true)]
    pub thresholds: Vec<String>,

    /// Also report faults shared by every server of a /8, /16 or /24 subnet
    #[arg(long)]
    pub subnets: bool,

    /// Findings output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}
