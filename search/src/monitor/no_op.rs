use crate::contract::Problem;
use crate::monitor::search_monitor::SearchMonitor;

/// Monitor that observes nothing and never stops the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl<P: Problem> SearchMonitor<P> for NoOpMonitor {
    fn name(&self) -> &str {
        "NoOpMonitor"
    }
}
