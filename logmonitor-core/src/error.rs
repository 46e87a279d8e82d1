use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    //-------------------------------------------------------------------------
    // Arguments
    //-------------------------------------------------------------------------
    #[error("log file and NOT_ACCEPTABLE_COUNT are required")]
    MissingArgument,

    #[error("invalid number of thresholds: expected 1 or 3, got {got}")]
    InvalidArgumentCount { got: usize },

    #[error("threshold '{value}' for {label} must be a non-negative integer")]
    NonNumericThreshold { label: &'static str, value: String },

    #[error("invalid {label}: {value} (must be between {min} and {max})")]
    ThresholdOutOfRange {
        label: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    //-------------------------------------------------------------------------
    // Input
    //-------------------------------------------------------------------------
    #[error("failed to read log file {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_number} does not match the log format ({reason}): {line}")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: LineError,
    },

    //-------------------------------------------------------------------------
    // Output
    //-------------------------------------------------------------------------
    #[error("failed to write findings: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl MonitorError {
    pub fn file_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            source,
        }
    }
}

/// Why a single log line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected 3 comma-separated fields, found {0}")]
    FieldCount(usize),

    #[error("timestamp must be 14 digits")]
    TimestampFormat,

    #[error("timestamp is not a valid date and time")]
    TimestampValue,

    #[error("endpoint must be IPv4/prefix")]
    Endpoint,

    #[error("response must be milliseconds or '-'")]
    Outcome,
}
