use crate::grouping::SubnetLabel;
use crate::record::{Endpoint, Timestamp};
use serde::Serialize;
use std::fmt;

/// Inclusive wall-clock span, rendered `YYYYMMDDHHMMSS-YYYYMMDDHHMMSS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Serialize for Period {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    Recovery {
        endpoint: Endpoint,
        recovery_seconds: u64,
    },
    Overload {
        endpoint: Endpoint,
        overload_period: Period,
    },
    SubnetFault {
        subnet: SubnetLabel,
        fault_period: Period,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Recovery {
                endpoint,
                recovery_seconds,
            } => write!(f, "IP : {endpoint}, SECONDS_TO_RETURN : {recovery_seconds}"),
            Finding::Overload {
                endpoint,
                overload_period,
            } => write!(f, "IP : {endpoint}, OVERLOAD_PERIOD : {overload_period}"),
            Finding::SubnetFault {
                subnet,
                fault_period,
            } => write!(f, "SUBNET_IP : {subnet}, FAULT_PERIOD : {fault_period}"),
        }
    }
}
