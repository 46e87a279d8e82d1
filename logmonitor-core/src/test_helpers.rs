use crate::record::{LogRecord, Timestamp, parse_log};
use chrono::NaiveDateTime;

/// Build records from log lines, panicking on malformed input.
pub fn records(lines: &[&str]) -> Vec<LogRecord> {
    parse_log(&lines.join("\n")).expect("test fixture must be well-formed")
}

pub fn ts(s: &str) -> Timestamp {
    Timestamp(NaiveDateTime::parse_from_str(s, "%Y%m%d%H%M%S").unwrap())
}
