use crate::cli::OutputFormat;
use crate::error::MonitorError;
use crate::finding::Finding;
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn render_findings<W: Write>(
    findings: &[Finding],
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    for finding in findings {
        match format {
            OutputFormat::Text => writeln!(out, "{finding}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, finding)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()
}

pub fn print_error(err: &MonitorError, plain: bool) {
    if plain {
        eprintln!("error: {err}");
    } else {
        eprintln!("{} {}", "error:".red().bold(), err);
    }

    if let Some(hint) = error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn error_hint(err: &MonitorError) -> Option<&'static str> {
    match err {
        MonitorError::MissingArgument | MonitorError::InvalidArgumentCount { .. } => Some(
            "Usage:\n\
             \n\
             logmonitor <LOG_FILE> <NOT_ACCEPTABLE_COUNT>\n\
             logmonitor <LOG_FILE> <NOT_ACCEPTABLE_COUNT> <AVERAGE_COUNT> <NOT_ACCEPTABLE_MILLIS>",
        ),

        MonitorError::NonNumericThreshold { .. } | MonitorError::ThresholdOutOfRange { .. } => {
            Some("Thresholds are whole numbers; counts must be at least 1.")
        }

        MonitorError::MalformedLine { .. } => Some(
            "Every line must look like:\n\
             \n\
             20201019133124,10.20.30.1/16,2\n\
             20201019133125,10.20.30.1/16,-",
        ),

        _ => None,
    }
}
