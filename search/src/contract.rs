//! Problem, state and rule contracts consumed by the search driver.

use std::fmt::Debug;
use std::hash::Hash;

/// Path cost and heuristic unit. Non-negative by construction.
pub type Cost = u32;

/// An immutable, costed transition descriptor.
pub trait Rule: Clone + Debug {
    /// Non-negative cost of applying this rule.
    fn cost(&self) -> Cost;

    /// Human-readable name, used in reports.
    fn name(&self) -> String;
}

/// An immutable snapshot of a problem.
///
/// Equality and hashing must be structural: two states that describe the same
/// configuration must compare equal and hash identically, because the
/// best-cost table is keyed by state.
pub trait State<R: Rule>: Clone + Eq + Hash + Debug {
    /// Apply `rule`, producing a new state.
    ///
    /// Returns `None` when the rule does not apply here. This is a normal
    /// outcome, not an error, and must never panic.
    fn apply(&self, rule: &R) -> Option<Self>;
}

/// A search problem: initial state, rule set, goal test and heuristic.
///
/// # Contract
///
/// - `rules` is fixed for the lifetime of the problem; its order only
///   affects tie-breaking.
/// - `is_goal` and `heuristic` are total. A panic inside them propagates
///   to the caller of `solve` untouched.
/// - `heuristic` should be 0 for goal states. Admissibility is the problem
///   author's responsibility; the engine does not check it.
pub trait Problem {
    type Rule: Rule;
    type State: State<Self::Rule>;

    /// Stable identifier echoed into search reports.
    fn problem_id(&self) -> &str;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Ordered, problem-global rule set.
    fn rules(&self) -> &[Self::Rule];

    /// Whether `state` solves the problem.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimated remaining cost from `state` to a goal.
    fn heuristic(&self, state: &Self::State) -> Cost;
}
