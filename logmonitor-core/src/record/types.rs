use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
pub const TIMEOUT_SENTINEL: &str = "-";

/// Probe time with second precision, as written in the log (`YYYYMMDDHHMMSS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub NaiveDateTime);

impl Timestamp {
    /// Whole seconds from `self` to `later`, truncated.
    pub fn seconds_until(&self, later: &Timestamp) -> i64 {
        (later.0 - self.0).num_seconds()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A monitored server: IPv4 address plus CIDR prefix, e.g. `1.1.1.1/24`.
///
/// Octets are kept verbatim (the log grammar allows up to three digits per
/// octet, leading zeros included), so the raw text is what identifies the
/// endpoint and what gets printed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Endpoint {
    raw: String,
    prefix_len: u16,
}

impl Endpoint {
    pub(crate) fn new(raw: String, prefix_len: u16) -> Self {
        Self { raw, prefix_len }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn prefix_len(&self) -> u16 {
        self.prefix_len
    }

    /// The four dotted octets, as written.
    pub fn octets(&self) -> Vec<&str> {
        self.address().split('.').collect()
    }

    pub fn address(&self) -> &str {
        self.raw.split_once('/').map_or(self.raw.as_str(), |(ip, _)| ip)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success { response_ms: u64 },
    TimedOut,
}

impl Outcome {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Outcome::TimedOut)
    }

    pub fn response_ms(&self) -> Option<u64> {
        match self {
            Outcome::Success { response_ms } => Some(*response_ms),
            Outcome::TimedOut => None,
        }
    }
}

/// One parsed line of the health log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: Timestamp,
    pub endpoint: Endpoint,
    pub outcome: Outcome,
}
