use crate::detect::Detector;
use crate::finding::Period;
use crate::grouping::SubnetGroup;
use crate::record::{Endpoint, LogRecord, Outcome, Timestamp};
use std::collections::HashMap;

/// Correlates timeout runs across every endpoint of a subnet.
///
/// The subnet is at fault while *all* member endpoints have at least
/// `not_acceptable_count` consecutive timeouts. Records must arrive sorted by
/// `(timestamp, endpoint)`.
#[derive(Debug, Clone)]
pub struct SubnetFaultCorrelator {
    not_acceptable_count: u32,

    // consecutive timeouts per member endpoint
    runs: HashMap<Endpoint, u32>,

    // members whose run is still below `not_acceptable_count`; the subnet is
    // at fault exactly when this reaches zero
    below_threshold: usize,

    // start of the most recently started endpoint-level run
    latest_run_start: Option<Timestamp>,

    fault_start: Option<Timestamp>,
    previous: Option<Timestamp>,
}

impl SubnetFaultCorrelator {
    pub fn new<I>(members: I, not_acceptable_count: u32) -> Self
    where
        I: IntoIterator<Item = Endpoint>,
    {
        debug_assert!(not_acceptable_count >= 1);
        let runs: HashMap<Endpoint, u32> = members.into_iter().map(|e| (e, 0)).collect();

        Self {
            not_acceptable_count,
            below_threshold: runs.len(),
            runs,
            latest_run_start: None,
            fault_start: None,
            previous: None,
        }
    }

    /// Correlator whose membership is every endpoint appearing in `group`.
    pub fn for_group(group: &SubnetGroup<'_>, not_acceptable_count: u32) -> Self {
        Self::new(
            group.records.iter().map(|r| r.endpoint.clone()),
            not_acceptable_count,
        )
    }

    pub fn is_fault(&self) -> bool {
        self.fault_start.is_some()
    }

    pub fn members(&self) -> usize {
        self.runs.len()
    }
}

impl Detector for SubnetFaultCorrelator {
    type Finding = Period;

    fn observe(&mut self, record: &LogRecord) -> Option<Period> {
        let previous = self.previous.replace(record.timestamp);

        if !self.runs.contains_key(&record.endpoint) {
            // Unknown member: it has not been timing out so far.
            self.below_threshold += 1;
            self.runs.insert(record.endpoint.clone(), 0);
        }
        let run = self.runs.get_mut(&record.endpoint)?;

        match record.outcome {
            Outcome::TimedOut => {
                if *run == 0 {
                    self.latest_run_start = Some(record.timestamp);
                }
                *run = run.saturating_add(1);
                if *run == self.not_acceptable_count {
                    self.below_threshold -= 1;
                }
            }

            Outcome::Success { .. } => {
                if *run >= self.not_acceptable_count {
                    self.below_threshold += 1;
                }
                *run = 0;
            }
        }

        if self.below_threshold == 0 {
            if self.fault_start.is_none() {
                self.fault_start = self.latest_run_start;
                tracing::debug!(
                    endpoint = %record.endpoint,
                    members = self.runs.len(),
                    "subnet fault started"
                );
            }
            return None;
        }

        // Some member is below the threshold again; an open fault ends at the
        // record before this one.
        self.fault_start
            .take()
            .zip(previous)
            .map(|(start, end)| Period { start, end })
    }
}
