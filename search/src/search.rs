//! Search entry points and the pass loop.
//!
//! # Pass state machine
//!
//! ```text
//! Init:  fresh best-cost table, fresh frontier, push root
//! Loop:  monitor check -> pop -> analyzed += 1 -> goal? -> pop-time check
//!        -> expand (apply each rule, bound check, generation-time check, push)
//! End:   frontier empty -> next bound (iterative deepening) or Failure
//! ```
//!
//! Statistics are cumulative across passes.

use log::{debug, trace};

use crate::best_cost::BestCostTable;
use crate::contract::{Cost, Problem, Rule, State};
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::monitor::{NoOpMonitor, SearchCommand, SearchMonitor};
use crate::node::{NodeArena, NodeId};
use crate::policy::{NodeOrdering, SearchPolicy, Strategy};
use crate::stats::SearchStats;

/// A goal-reaching path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S, R> {
    rules: Vec<R>,
    state: S,
    cost: Cost,
    heuristic: Cost,
}

impl<S, R> Solution<S, R> {
    /// Rules from the initial state to the goal, in application order.
    #[must_use]
    pub fn rules(&self) -> &[R] {
        &self.rules
    }

    /// The goal state.
    #[must_use]
    pub fn final_state(&self) -> &S {
        &self.state
    }

    /// `g` of the goal node: the summed rule cost along the path.
    #[must_use]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Heuristic value the problem assigned to the goal state.
    #[must_use]
    pub fn heuristic(&self) -> Cost {
        self.heuristic
    }

    /// Number of rules on the path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<R>, S) {
        (self.rules, self.state)
    }
}

/// Why a search ended without a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Every pass emptied its frontier without reaching a goal.
    Exhausted,
    /// A monitor requested termination.
    Interrupted,
}

impl FailureReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureReason::Exhausted => "exhausted",
            FailureReason::Interrupted => "interrupted",
        }
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<S, R> {
    Solved(Solution<S, R>),
    Failed(FailureReason),
}

/// Result of a search: the outcome plus cumulative statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<S, R> {
    pub outcome: SearchOutcome<S, R>,
    pub stats: SearchStats,
    /// Policy the search ran under.
    pub policy: SearchPolicy,
    /// Depth bound of the last pass.
    pub final_bound: Cost,
}

impl<S, R> SearchResult<S, R> {
    /// Returns `true` if the search reached a goal.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Solved(_))
    }

    #[must_use]
    pub fn solution(&self) -> Option<&Solution<S, R>> {
        match &self.outcome {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<FailureReason> {
        match self.outcome {
            SearchOutcome::Solved(_) => None,
            SearchOutcome::Failed(reason) => Some(reason),
        }
    }
}

/// Solve `problem` with one of the standard strategies and a depth bound.
///
/// Standard strategies always produce a valid policy, so this cannot fail.
pub fn solve<P: Problem>(
    problem: &P,
    strategy: Strategy,
    max_depth: Cost,
) -> SearchResult<P::State, P::Rule> {
    let policy = SearchPolicy::for_strategy(strategy, max_depth);
    run(problem, &policy, &mut NoOpMonitor)
}

/// Solve `problem` under an explicit policy, reporting to `monitor`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
/// No node is created in that case.
pub fn solve_with<P, M>(
    problem: &P,
    policy: &SearchPolicy,
    monitor: &mut M,
) -> Result<SearchResult<P::State, P::Rule>, SearchError>
where
    P: Problem,
    M: SearchMonitor<P> + ?Sized,
{
    policy.validate()?;
    Ok(run(problem, policy, monitor))
}

fn run<P, M>(problem: &P, policy: &SearchPolicy, monitor: &mut M) -> SearchResult<P::State, P::Rule>
where
    P: Problem,
    M: SearchMonitor<P> + ?Sized,
{
    let mut stats = SearchStats::default();
    let mut best_costs = BestCostTable::new();
    let mut bound = policy.depth_control.initial_bound(policy.max_depth);

    monitor.on_enter_search(problem);
    let outcome = loop {
        stats.on_pass_start();
        debug!(
            "[{}] pass {} ordering={} bound={bound}",
            problem.problem_id(),
            stats.passes,
            policy.ordering.as_str()
        );
        monitor.on_pass_start(bound, &stats);

        best_costs.clear();
        let pass = run_pass(
            problem,
            policy.ordering,
            bound,
            &mut best_costs,
            &mut stats,
            monitor,
        );
        match pass {
            PassOutcome::Solved(solution) => break SearchOutcome::Solved(solution),
            PassOutcome::Interrupted => break SearchOutcome::Failed(FailureReason::Interrupted),
            PassOutcome::Exhausted => {
                match policy.depth_control.next_bound(bound, policy.max_depth) {
                    Some(next) => bound = next,
                    None => break SearchOutcome::Failed(FailureReason::Exhausted),
                }
            }
        }
    };
    monitor.on_exit_search(&stats);

    debug!(
        "[{}] search finished ({}) {stats}",
        problem.problem_id(),
        match &outcome {
            SearchOutcome::Solved(_) => "solved",
            SearchOutcome::Failed(reason) => reason.as_str(),
        }
    );

    SearchResult {
        outcome,
        stats,
        policy: *policy,
        final_bound: bound,
    }
}

enum PassOutcome<S, R> {
    Solved(Solution<S, R>),
    Exhausted,
    Interrupted,
}

/// One pass under a fixed depth bound. Owns its arena and frontier; the
/// caller hands in an empty best-cost table.
fn run_pass<P, M>(
    problem: &P,
    ordering: NodeOrdering,
    bound: Cost,
    best_costs: &mut BestCostTable<P::State>,
    stats: &mut SearchStats,
    monitor: &mut M,
) -> PassOutcome<P::State, P::Rule>
where
    P: Problem,
    M: SearchMonitor<P> + ?Sized,
{
    let mut arena: NodeArena<P::State, P::Rule> = NodeArena::new();
    let mut frontier = Frontier::new(ordering);

    let initial = problem.initial_state();
    let initial_h = problem.heuristic(&initial);
    let root = arena.push_root(initial, initial_h);
    frontier.push(arena.get(root));

    let outcome = loop {
        if monitor.check_termination(stats) == SearchCommand::Stop {
            break PassOutcome::Interrupted;
        }
        let Some(id) = frontier.pop() else {
            break PassOutcome::Exhausted;
        };
        stats.on_analyzed();

        let node = arena.get(id);
        if problem.is_goal(node.state()) {
            monitor.on_solution(node, stats);
            break PassOutcome::Solved(Solution {
                rules: arena.rule_path(id),
                state: node.state().clone(),
                cost: node.g(),
                heuristic: node.h(),
            });
        }

        // Pop-time check: a settled state is only reopened when strictly cheaper.
        if !best_costs.improves(node.state(), node.g()) {
            stats.on_dominated_on_pop();
            trace!("dominated on pop: node {} g={}", id.index(), node.g());
            continue;
        }
        best_costs.record(node.state().clone(), node.g());
        stats.on_expansion();
        monitor.on_expansion(node, stats);

        let children = expand(problem, &arena, id, bound, best_costs, stats);
        for (rule, state, g, h) in children {
            let child = arena.push_child(id, rule, state, g, h);
            frontier.push(arena.get(child));
            stats.on_generated();
        }
    };

    stats.on_frontier_size(frontier.high_water());
    outcome
}

/// Children of `id` that survive the bound and generation-time checks, as
/// `(rule, state, g, h)` in rule order.
fn expand<P: Problem>(
    problem: &P,
    arena: &NodeArena<P::State, P::Rule>,
    id: NodeId,
    bound: Cost,
    best_costs: &BestCostTable<P::State>,
    stats: &mut SearchStats,
) -> Vec<(P::Rule, P::State, Cost, Cost)> {
    let node = arena.get(id);
    let mut children = Vec::new();
    for rule in problem.rules() {
        let Some(state) = node.state().apply(rule) else {
            stats.on_inapplicable_rule();
            continue;
        };
        let Some(g) = node.g().checked_add(rule.cost()).filter(|&g| g <= bound) else {
            stats.on_depth_discard();
            continue;
        };
        if !best_costs.improves(&state, g) {
            stats.on_dominated_on_generation();
            continue;
        }
        let h = problem.heuristic(&state);
        children.push((rule.clone(), state, g, h));
    }
    children
}
