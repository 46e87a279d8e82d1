//! Episode detectors.
//!
//! Each detector is a small state machine instantiated once per group and fed
//! that group's records in order. All three share the same shape:
//!
//! Idle
//! Accumulating (timeouts / over-threshold averages being observed)
//! Qualified or Unqualified when the episode closes
//! Idle
//!
//! An episode that is still accumulating when the input ends never produces a
//! finding.

mod overload;
mod subnet_fault;
mod timeout;


use crate::record::LogRecord;

pub use overload::{OverloadDetector, SlidingWindow};
pub use subnet_fault::SubnetFaultCorrelator;
pub use timeout::{TimeoutDetector, TimeoutEpisode};

pub trait Detector {
    type Finding;

    /// Feed the next record; returns a finding when an episode closes on it.
    fn observe(&mut self, record: &LogRecord) -> Option<Self::Finding>;
}

/// Fold a detector over a record sequence, collecting closed episodes.
pub fn scan<'a, D, I>(mut detector: D, records: I) -> Vec<D::Finding>
where
    D: Detector,
    I: IntoIterator<Item = &'a LogRecord>,
{
    records
        .into_iter()
        .filter_map(|record| detector.observe(record))
        .collect()
}
