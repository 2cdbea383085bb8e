use std::fmt;

use crate::contract::{Cost, Problem};
use crate::node::SearchNode;
use crate::stats::SearchStats;

/// Command returned by a monitor to control the search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCommand {
    /// Keep searching.
    Continue,
    /// Stop now and report `Interrupted`.
    Stop,
}

impl fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Stop => write!(f, "Stop"),
        }
    }
}

/// Hooks observed by the search driver.
///
/// Every hook except [`SearchMonitor::name`] has a no-op default, so a
/// monitor only implements the events it cares about.
pub trait SearchMonitor<P: Problem> {
    /// Called once before the first pass.
    fn on_enter_search(&mut self, _problem: &P) {}

    /// Called at the start of each pass with its depth bound.
    fn on_pass_start(&mut self, _bound: Cost, _stats: &SearchStats) {}

    /// Called at the top of every pop-loop iteration.
    fn check_termination(&mut self, _stats: &SearchStats) -> SearchCommand {
        SearchCommand::Continue
    }

    /// Called when a node passes the pop-time check, before its children are
    /// generated.
    fn on_expansion(&mut self, _node: &SearchNode<P::State, P::Rule>, _stats: &SearchStats) {}

    /// Called when a goal node is popped.
    fn on_solution(&mut self, _node: &SearchNode<P::State, P::Rule>, _stats: &SearchStats) {}

    /// Called once when the search ends, however it ends.
    fn on_exit_search(&mut self, _stats: &SearchStats) {}

    /// Name used in logs and debug output.
    fn name(&self) -> &str;
}

impl<P: Problem> fmt::Debug for dyn SearchMonitor<P> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
