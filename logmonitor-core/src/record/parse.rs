use crate::error::{LineError, MonitorError};
use crate::record::types::{
    Endpoint, LogRecord, Outcome, TIMEOUT_SENTINEL, TIMESTAMP_FORMAT, Timestamp,
};
use chrono::NaiveDateTime;

const FIELD_DELIMITER: char = ',';
const TIMESTAMP_DIGITS: usize = 14;

fn is_digits(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_timestamp(s: &str) -> Result<Timestamp, LineError> {
    if !is_digits(s, TIMESTAMP_DIGITS, TIMESTAMP_DIGITS) {
        return Err(LineError::TimestampFormat);
    }
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map(Timestamp)
        .map_err(|_| LineError::TimestampValue)
}

fn parse_endpoint(s: &str) -> Result<Endpoint, LineError> {
    let (address, prefix) = s.split_once('/').ok_or(LineError::Endpoint)?;

    let octets: Vec<&str> = address.split('.').collect();
    if octets.len() != 4 || !octets.iter().all(|o| is_digits(o, 1, 3)) {
        return Err(LineError::Endpoint);
    }
    if !is_digits(prefix, 1, 3) {
        return Err(LineError::Endpoint);
    }

    let prefix_len = prefix.parse::<u16>().map_err(|_| LineError::Endpoint)?;
    Ok(Endpoint::new(s.to_string(), prefix_len))
}

fn parse_outcome(s: &str) -> Result<Outcome, LineError> {
    if s == TIMEOUT_SENTINEL {
        return Ok(Outcome::TimedOut);
    }
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LineError::Outcome);
    }
    s.parse::<u64>()
        .map(|response_ms| Outcome::Success { response_ms })
        .map_err(|_| LineError::Outcome)
}

/// Parse one `TIMESTAMP,ENDPOINT,OUTCOME` line.
pub fn parse_line(line: &str) -> Result<LogRecord, LineError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let [timestamp, endpoint, outcome] = fields.as_slice() else {
        return Err(LineError::FieldCount(fields.len()));
    };

    Ok(LogRecord {
        timestamp: parse_timestamp(timestamp)?,
        endpoint: parse_endpoint(endpoint)?,
        outcome: parse_outcome(outcome)?,
    })
}

/// Parse a whole log. A single bad line rejects the entire input.
pub fn parse_log(text: &str) -> Result<Vec<LogRecord>, MonitorError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            parse_line(line).map_err(|reason| MonitorError::MalformedLine {
                line_number: i + 1,
                line: line.to_string(),
                reason,
            })
        })
        .collect()
}
