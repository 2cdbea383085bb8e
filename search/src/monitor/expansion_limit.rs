use crate::contract::Problem;
use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use crate::stats::SearchStats;

/// Stops the search once `max_expansions` nodes have been expanded.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionLimitMonitor {
    max_expansions: u64,
}

impl ExpansionLimitMonitor {
    #[must_use]
    pub fn new(max_expansions: u64) -> Self {
        Self { max_expansions }
    }
}

impl<P: Problem> SearchMonitor<P> for ExpansionLimitMonitor {
    fn check_termination(&mut self, stats: &SearchStats) -> SearchCommand {
        if stats.expansions >= self.max_expansions {
            SearchCommand::Stop
        } else {
            SearchCommand::Continue
        }
    }

    fn name(&self) -> &str {
        "ExpansionLimitMonitor"
    }
}
