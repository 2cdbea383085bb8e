use std::time::{Duration, Instant};

use crate::contract::Problem;
use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use crate::stats::SearchStats;

/// A monitor that stops the search after a wall-clock duration.
///
/// Reads the clock only every `check_interval` loop iterations, so the limit
/// may be overshot by that many iterations.
#[derive(Debug, Clone)]
pub struct TimeLimitMonitor {
    time_limit: Duration,
    start_time: Option<Instant>,
    check_interval: u64,
    ops_since_last_check: u64,
}

impl TimeLimitMonitor {
    #[must_use]
    pub fn new(time_limit: Duration, check_interval: u64) -> Self {
        Self {
            time_limit,
            start_time: None,
            check_interval: check_interval.max(1),
            ops_since_last_check: 0,
        }
    }

    /// Limit with a check every 1,024 iterations.
    #[must_use]
    pub fn with_default_check_interval(time_limit: Duration) -> Self {
        Self::new(time_limit, 1024)
    }

    #[must_use]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl<P: Problem> SearchMonitor<P> for TimeLimitMonitor {
    fn on_enter_search(&mut self, _problem: &P) {
        self.start_time = Some(Instant::now());
        self.ops_since_last_check = 0;
    }

    fn check_termination(&mut self, _stats: &SearchStats) -> SearchCommand {
        self.ops_since_last_check += 1;
        if self.ops_since_last_check < self.check_interval {
            return SearchCommand::Continue;
        }
        self.ops_since_last_check = 0;
        match self.start_time {
            Some(start) if start.elapsed() >= self.time_limit => {
                ::log::debug!("time limit of {:?} reached", self.time_limit);
                SearchCommand::Stop
            }
            _ => SearchCommand::Continue,
        }
    }

    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }
}
