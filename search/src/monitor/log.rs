use std::time::{Duration, Instant};

use crate::contract::{Cost, Problem};
use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use crate::node::SearchNode;
use crate::stats::SearchStats;

/// Periodic progress logging through the `log` facade.
///
/// Progress lines go out at `info` level at most once per `log_interval`;
/// the clock is read every `clock_check_mask + 1` iterations.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    iterations: u64,
    problem_id: String,
}

impl LogMonitor {
    /// `clock_check_mask` should be `2^k - 1`.
    #[must_use]
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_log_time: now,
            log_interval,
            clock_check_mask,
            iterations: 0,
            problem_id: String::new(),
        }
    }

    fn log_progress(&mut self, stats: &SearchStats) {
        let now = Instant::now();
        ::log::info!(
            "[{}] {:.1}s {}",
            self.problem_id,
            now.duration_since(self.start_time).as_secs_f32(),
            stats
        );
        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<P: Problem> SearchMonitor<P> for LogMonitor {
    fn on_enter_search(&mut self, problem: &P) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.iterations = 0;
        self.problem_id = problem.problem_id().to_string();
        ::log::info!("[{}] search started", self.problem_id);
    }

    fn on_pass_start(&mut self, bound: Cost, stats: &SearchStats) {
        ::log::debug!(
            "[{}] pass {} with depth bound {bound}",
            self.problem_id,
            stats.passes
        );
    }

    fn check_termination(&mut self, stats: &SearchStats) -> SearchCommand {
        self.iterations += 1;
        if self.iterations & self.clock_check_mask == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_progress(stats);
        }
        SearchCommand::Continue
    }

    fn on_solution(&mut self, node: &SearchNode<P::State, P::Rule>, _stats: &SearchStats) {
        ::log::info!(
            "[{}] goal reached at g={} depth={}",
            self.problem_id,
            node.g(),
            node.depth()
        );
    }

    fn on_exit_search(&mut self, stats: &SearchStats) {
        self.log_progress(stats);
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}
