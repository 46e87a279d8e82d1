use crate::detect::Detector;
use crate::finding::Period;
use crate::record::{LogRecord, Timestamp};
use std::collections::VecDeque;

/// Fixed-capacity FIFO of the most recent response samples with a running sum.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    capacity: usize,
    samples: VecDeque<(Timestamp, u64)>,
    sum: u128,
}

impl SlidingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: VecDeque::new(),
            sum: 0,
        }
    }

    pub fn push(&mut self, timestamp: Timestamp, response_ms: u64) {
        self.samples.push_back((timestamp, response_ms));
        self.sum += u128::from(response_ms);
    }

    pub fn evict_oldest(&mut self) {
        if let Some((_, ms)) = self.samples.pop_front() {
            self.sum -= u128::from(ms);
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            None
        } else {
            Some(self.sum as f64 / self.samples.len() as f64)
        }
    }

    /// Timestamp of the oldest retained sample.
    pub fn oldest(&self) -> Option<Timestamp> {
        self.samples.front().map(|(ts, _)| *ts)
    }
}

/// Moving-average overload detection for one endpoint.
///
/// Timed-out probes never enter the window and never reset it. The average is
/// only evaluated once `average_count` samples are present; the window then
/// slides by one after every evaluation.
#[derive(Debug, Clone)]
pub struct OverloadDetector {
    not_acceptable_millis: u64,
    window: SlidingWindow,

    // Accumulating
    overload_start: Option<Timestamp>,

    // Timestamp of the record seen just before the current one, timeouts
    // included. An overload period ends there.
    previous: Option<Timestamp>,
}

impl OverloadDetector {
    pub fn new(average_count: usize, not_acceptable_millis: u64) -> Self {
        debug_assert!(average_count >= 1);
        Self {
            not_acceptable_millis,
            window: SlidingWindow::new(average_count),
            overload_start: None,
            previous: None,
        }
    }

    pub fn in_overload(&self) -> bool {
        self.overload_start.is_some()
    }

    pub fn overload_start(&self) -> Option<Timestamp> {
        self.overload_start
    }

    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }
}

impl Detector for OverloadDetector {
    type Finding = Period;

    fn observe(&mut self, record: &LogRecord) -> Option<Period> {
        let previous = self.previous.replace(record.timestamp);

        let response_ms = record.outcome.response_ms()?;
        self.window.push(record.timestamp, response_ms);

        if !self.window.is_full() {
            return None;
        }

        let mean = self.window.mean()?;
        let mut closed = None;

        if mean > self.not_acceptable_millis as f64 {
            if self.overload_start.is_none() {
                // The episode is attributed to the whole window, so it starts
                // at the earliest sample behind the first bad average.
                self.overload_start = self.window.oldest();
                tracing::trace!(endpoint = %record.endpoint, mean, "overload started");
            }
        } else {
            closed = self
                .overload_start
                .take()
                .zip(previous)
                .map(|(start, end)| Period { start, end });
        }

        self.window.evict_oldest();
        closed
    }
}
