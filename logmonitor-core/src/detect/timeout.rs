use crate::detect::Detector;
use crate::record::{LogRecord, Outcome, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutEpisode {
    pub start: Timestamp,
    pub consecutive: u32,
}

/// Tracks runs of consecutive timeouts for one endpoint and reports how many
/// seconds it took to come back.
#[derive(Debug, Clone)]
pub struct TimeoutDetector {
    not_acceptable_count: u32,

    // Accumulating
    open: Option<TimeoutEpisode>,
}

impl TimeoutDetector {
    /// `not_acceptable_count` is the minimum run length that counts as a
    /// failure, at least 1.
    pub fn new(not_acceptable_count: u32) -> Self {
        debug_assert!(not_acceptable_count >= 1);
        Self {
            not_acceptable_count,
            open: None,
        }
    }

    pub fn open_episode(&self) -> Option<&TimeoutEpisode> {
        self.open.as_ref()
    }
}

impl Detector for TimeoutDetector {
    /// Recovery time in whole seconds.
    type Finding = u64;

    fn observe(&mut self, record: &LogRecord) -> Option<u64> {
        match record.outcome {
            Outcome::TimedOut => {
                match &mut self.open {
                    Some(episode) => episode.consecutive = episode.consecutive.saturating_add(1),
                    None => {
                        self.open = Some(TimeoutEpisode {
                            start: record.timestamp,
                            consecutive: 1,
                        })
                    }
                }
                None
            }

            Outcome::Success { .. } => {
                let episode = self.open.take()?;

                if episode.consecutive < self.not_acceptable_count {
                    tracing::trace!(
                        endpoint = %record.endpoint,
                        consecutive = episode.consecutive,
                        "timeout run below threshold"
                    );
                    return None;
                }

                // Out-of-order input can close an episode before it started.
                let seconds = episode.start.seconds_until(&record.timestamp).max(0);
                Some(seconds as u64)
            }
        }
    }
}
