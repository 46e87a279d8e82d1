mod range;


use crate::error::MonitorError;
use serde::Serialize;

pub use range::{
    AVERAGE_COUNT, NOT_ACCEPTABLE_COUNT, NOT_ACCEPTABLE_MILLIS, RangeConstraint, parse_threshold,
    validate_range,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverloadThresholds {
    /// Number of successful probes averaged per window.
    pub average_count: usize,
    /// Average response time above which the endpoint is overloaded.
    pub not_acceptable_millis: u64,
}

/// Numeric knobs for a monitoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    /// Consecutive timeouts that make an endpoint (or subnet) faulty.
    pub not_acceptable_count: u32,
    /// Overload detection is off unless both knobs are given.
    pub overload: Option<OverloadThresholds>,
    /// Correlate timeouts per /8, /16 or /24 subnet.
    pub subnets: bool,
}

impl Thresholds {
    pub fn new(not_acceptable_count: u32) -> Self {
        Self {
            not_acceptable_count,
            overload: None,
            subnets: false,
        }
    }

    pub fn with_overload(mut self, average_count: usize, not_acceptable_millis: u64) -> Self {
        self.overload = Some(OverloadThresholds {
            average_count,
            not_acceptable_millis,
        });
        self
    }

    pub fn with_subnets(mut self, subnets: bool) -> Self {
        self.subnets = subnets;
        self
    }

    /// Build from positional threshold arguments:
    /// `N` or `N AVERAGE_COUNT NOT_ACCEPTABLE_MILLIS`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, MonitorError> {
        match args {
            [] => Err(MonitorError::MissingArgument),
            [count] => Ok(Self::new(parse_count(count.as_ref())?)),
            [count, average, millis] => {
                let count = parse_count(count.as_ref())?;
                let average = parse_threshold(average.as_ref(), &AVERAGE_COUNT)?;
                let millis = parse_threshold(millis.as_ref(), &NOT_ACCEPTABLE_MILLIS)?;
                Ok(Self::new(count).with_overload(average as usize, millis))
            }
            other => Err(MonitorError::InvalidArgumentCount { got: other.len() }),
        }
    }

    /// Range-check values that did not come through `from_args`.
    pub fn validate(&self) -> Result<(), MonitorError> {
        validate_range(u64::from(self.not_acceptable_count), &NOT_ACCEPTABLE_COUNT)?;
        if let Some(overload) = &self.overload {
            validate_range(overload.average_count as u64, &AVERAGE_COUNT)?;
            validate_range(overload.not_acceptable_millis, &NOT_ACCEPTABLE_MILLIS)?;
        }
        Ok(())
    }
}

fn parse_count(raw: &str) -> Result<u32, MonitorError> {
    let value = parse_threshold(raw, &NOT_ACCEPTABLE_COUNT)?;
    // range-checked above
    Ok(value as u32)
}
