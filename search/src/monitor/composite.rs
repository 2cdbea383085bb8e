//! Fan-out monitor.
//!
//! - Events are dispatched to child monitors in insertion order.
//! - `check_termination` short-circuits on the first `Stop`; put stricter
//!   stop conditions first.
//! - Other callbacks always reach every child.

use crate::contract::{Cost, Problem};
use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use crate::node::SearchNode;
use crate::stats::SearchStats;

/// A monitor that forwards every event to a list of monitors.
pub struct CompositeMonitor<'a, P: Problem> {
    monitors: Vec<Box<dyn SearchMonitor<P> + 'a>>,
}

impl<'a, P: Problem> CompositeMonitor<'a, P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<P> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[must_use]
    pub fn with<M>(mut self, monitor: M) -> Self
    where
        M: SearchMonitor<P> + 'a,
    {
        self.add_monitor(monitor);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<P: Problem> Default for CompositeMonitor<'_, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Problem> SearchMonitor<P> for CompositeMonitor<'_, P> {
    fn on_enter_search(&mut self, problem: &P) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(problem);
        }
    }

    fn on_pass_start(&mut self, bound: Cost, stats: &SearchStats) {
        for monitor in &mut self.monitors {
            monitor.on_pass_start(bound, stats);
        }
    }

    fn check_termination(&mut self, stats: &SearchStats) -> SearchCommand {
        for monitor in &mut self.monitors {
            if monitor.check_termination(stats) == SearchCommand::Stop {
                return SearchCommand::Stop;
            }
        }
        SearchCommand::Continue
    }

    fn on_expansion(&mut self, node: &SearchNode<P::State, P::Rule>, stats: &SearchStats) {
        for monitor in &mut self.monitors {
            monitor.on_expansion(node, stats);
        }
    }

    fn on_solution(&mut self, node: &SearchNode<P::State, P::Rule>, stats: &SearchStats) {
        for monitor in &mut self.monitors {
            monitor.on_solution(node, stats);
        }
    }

    fn on_exit_search(&mut self, stats: &SearchStats) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(stats);
        }
    }

    fn name(&self) -> &str {
        "CompositeMonitor"
    }
}
