use logmonitor_core::MonitorError;
use logmonitor_core::cli::{MonitorArgs, OutputFormat, run_to};
use std::path::PathBuf;

/// Run with positional thresholds and text output; returns stdout.
pub fn run_monitor(path: PathBuf, thresholds: &[&str]) -> Result<String, MonitorError> {
    run_monitor_with(path, thresholds, false, OutputFormat::Text)
}

pub fn run_monitor_with(
    path: PathBuf,
    thresholds: &[&str],
    subnets: bool,
    output: OutputFormat,
) -> Result<String, MonitorError> {
    let args = MonitorArgs {
        log_file: Some(path),
        thresholds: thresholds.iter().map(|s| s.to_string()).collect(),
        subnets,
        output,
    };

    let mut out = Vec::new();
    run_to(&args, &mut out)?;
    Ok(String::from_utf8(out).expect("findings are UTF-8"))
}
