use crate::analysis::analyze;
use crate::cli::MonitorArgs;
use crate::cli::render::render_findings;
use crate::conf::Thresholds;
use crate::error::MonitorError;
use crate::record::parse_log;
use std::fs;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub findings: usize,
}

/// Run a monitoring pass and print findings to stdout.
pub fn run_monitor(args: &MonitorArgs) -> Result<RunSummary, MonitorError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(args, &mut out)
}

/// Like [`run_monitor`], writing findings to `out`.
///
/// Arguments and the whole file are validated before anything is written, so
/// a failed run produces no findings.
pub fn run_to<W: Write>(args: &MonitorArgs, out: &mut W) -> Result<RunSummary, MonitorError> {
    let path = args.log_file.as_ref().ok_or(MonitorError::MissingArgument)?;
    let thresholds = Thresholds::from_args(args.thresholds.as_slice())?.with_subnets(args.subnets);

    let text = fs::read_to_string(path).map_err(|e| MonitorError::file_unreadable(path, e))?;
    let records = parse_log(&text)?;

    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        ?thresholds,
        "log parsed"
    );

    let findings = analyze(&records, &thresholds)?;
    render_findings(&findings, args.output, out).map_err(|source| MonitorError::Output { source })?;

    let summary = RunSummary {
        records: records.len(),
        findings: findings.len(),
    };
    tracing::info!(
        records = summary.records,
        findings = summary.findings,
        "monitoring run complete"
    );

    Ok(summary)
}
