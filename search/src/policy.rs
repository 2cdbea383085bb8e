//! Search policy types.
//!
//! A strategy is nothing more than a pair of independent settings: how the
//! frontier orders nodes, and how the depth bound evolves between passes.
//! DFS and IDDFS share an ordering and differ only in depth control.

use std::fmt;
use std::str::FromStr;

use crate::contract::Cost;
use crate::error::SearchError;

/// The five supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
    Iddfs,
    Greedy,
    AStar,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Iddfs,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// Frontier ordering used by this strategy.
    #[must_use]
    pub const fn ordering(self) -> NodeOrdering {
        match self {
            Strategy::Bfs => NodeOrdering::ShallowestFirst,
            Strategy::Dfs | Strategy::Iddfs => NodeOrdering::DeepestFirst,
            Strategy::Greedy => NodeOrdering::LowestHeuristic,
            Strategy::AStar => NodeOrdering::LowestEstimate,
        }
    }

    /// Depth control used by this strategy.
    #[must_use]
    pub const fn depth_control(self) -> DepthControl {
        match self {
            Strategy::Iddfs => DepthControl::IterativeDeepening { start: 0, step: 1 },
            Strategy::Bfs | Strategy::Dfs | Strategy::Greedy | Strategy::AStar => {
                DepthControl::Fixed
            }
        }
    }

    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Iddfs => "IDDFS",
            Strategy::Greedy => "GREEDY",
            Strategy::AStar => "ASTAR",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BFS" => Ok(Strategy::Bfs),
            "DFS" => Ok(Strategy::Dfs),
            "IDDFS" => Ok(Strategy::Iddfs),
            "GREEDY" => Ok(Strategy::Greedy),
            "ASTAR" | "A*" | "A_STAR" => Ok(Strategy::AStar),
            _ => Err(SearchError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// How the frontier orders nodes. Lower keys are popped first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeOrdering {
    /// Key `g`.
    ShallowestFirst,
    /// Key `-g`.
    DeepestFirst,
    /// Key `h`.
    LowestHeuristic,
    /// Key `f = g + h`.
    LowestEstimate,
}

impl NodeOrdering {
    /// Primary frontier key for a node with the given costs.
    #[must_use]
    pub fn key(self, g: Cost, h: Cost) -> i64 {
        match self {
            NodeOrdering::ShallowestFirst => i64::from(g),
            NodeOrdering::DeepestFirst => -i64::from(g),
            NodeOrdering::LowestHeuristic => i64::from(h),
            NodeOrdering::LowestEstimate => i64::from(g) + i64::from(h),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeOrdering::ShallowestFirst => "shallowest_first",
            NodeOrdering::DeepestFirst => "deepest_first",
            NodeOrdering::LowestHeuristic => "lowest_heuristic",
            NodeOrdering::LowestEstimate => "lowest_estimate",
        }
    }
}

/// How the path-cost bound evolves between passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthControl {
    /// One pass with bound = `max_depth`.
    Fixed,
    /// Passes with bounds `start, start + step, ...` up to `max_depth`.
    IterativeDeepening { start: Cost, step: Cost },
}

impl DepthControl {
    /// Bound of the first pass.
    #[must_use]
    pub fn initial_bound(self, max_depth: Cost) -> Cost {
        match self {
            DepthControl::Fixed => max_depth,
            DepthControl::IterativeDeepening { start, .. } => start,
        }
    }

    /// Bound of the pass after `current`, or `None` when no pass remains.
    #[must_use]
    pub fn next_bound(self, current: Cost, max_depth: Cost) -> Option<Cost> {
        match self {
            DepthControl::Fixed => None,
            DepthControl::IterativeDeepening { step, .. } => current
                .checked_add(step)
                .filter(|&bound| bound <= max_depth),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DepthControl::Fixed => "fixed",
            DepthControl::IterativeDeepening { .. } => "iterative_deepening",
        }
    }
}

/// Search configuration: ordering, depth control and the global depth bound.
///
/// The bound applies to `g`, the accumulated rule cost. With unit-cost rules
/// this is the tree depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    pub ordering: NodeOrdering,
    pub depth_control: DepthControl,
    pub max_depth: Cost,
}

impl SearchPolicy {
    /// Policy for one of the five standard strategies.
    #[must_use]
    pub const fn for_strategy(strategy: Strategy, max_depth: Cost) -> Self {
        Self {
            ordering: strategy.ordering(),
            depth_control: strategy.depth_control(),
            max_depth,
        }
    }

    /// Validate that this policy can be run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if iterative deepening would
    /// never advance (`step == 0`) or starts above `max_depth`.
    pub fn validate(&self) -> Result<(), SearchError> {
        if let DepthControl::IterativeDeepening { start, step } = self.depth_control {
            if step == 0 {
                return Err(SearchError::InvalidPolicy {
                    detail: "iterative deepening step must be positive".into(),
                });
            }
            if start > self.max_depth {
                return Err(SearchError::InvalidPolicy {
                    detail: format!(
                        "iterative deepening starts at {start}, above max_depth {}",
                        self.max_depth
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::for_strategy(Strategy::AStar, 100)
    }
}
