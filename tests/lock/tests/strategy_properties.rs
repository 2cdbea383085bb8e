//! Cross-strategy properties: termination, optimality, determinism,
//! best-cost pruning and counter accounting.

use gps_harness::runner::{run_named, RunConfig};
use gps_harness::worlds::{lookup, CatalogWorld, CATALOG};
use gps_search::contract::{Cost, Problem, Rule, State};
use gps_search::policy::Strategy;
use gps_search::search::{solve, SearchResult};
use gps_search::stats::SearchStats;

/// Depth bounds small enough for DFS and IDDFS on every catalog world.
fn bound_for(name: &str) -> Cost {
    if name.starts_with("calcudoku") {
        6
    } else {
        8
    }
}

/// Every pop is a goal hit, a pop-time rejection, or an expansion.
fn assert_pop_accounting(stats: &SearchStats, solved: bool) {
    assert_eq!(
        stats.analyzed,
        stats.expansions + stats.dominated_on_pop + u64::from(solved),
        "{stats}"
    );
}

fn check_accounting<S, R>(result: &SearchResult<S, R>) {
    assert_pop_accounting(&result.stats, result.is_solved());
    assert!(result.stats.passes >= 1);
}

#[test]
fn every_strategy_terminates_on_every_catalog_world() {
    for name in CATALOG {
        let world = lookup(name).unwrap().unwrap();
        for strategy in Strategy::ALL {
            match &world {
                CatalogWorld::SlidingTile(p) => check_accounting(&solve(p, strategy, bound_for(name))),
                CatalogWorld::Calcudoku(p) => check_accounting(&solve(p, strategy, bound_for(name))),
            }
        }
    }
}

#[test]
fn astar_and_iddfs_match_bfs_cost_on_unit_cost_worlds() {
    for name in CATALOG {
        let world = lookup(name).unwrap().unwrap();
        let costs: Vec<Option<Cost>> = [Strategy::Bfs, Strategy::AStar, Strategy::Iddfs]
            .into_iter()
            .map(|strategy| match &world {
                CatalogWorld::SlidingTile(p) => solve(p, strategy, 12).solution().map(|s| s.cost()),
                CatalogWorld::Calcudoku(p) => solve(p, strategy, 6).solution().map(|s| s.cost()),
            })
            .collect();
        assert!(costs[0].is_some(), "{name}: BFS found nothing");
        assert_eq!(costs[0], costs[2], "{name}: IDDFS depth differs from BFS");
        if name.starts_with("eight_puzzle") {
            // Manhattan distance is admissible.
            assert_eq!(costs[0], costs[1], "{name}: A* cost differs from BFS");
        }
    }
}

#[test]
fn repeated_runs_produce_identical_reports() {
    for name in CATALOG {
        for strategy in Strategy::ALL {
            let config = RunConfig::new(strategy, bound_for(name));
            let first = run_named(name, &config).unwrap();
            let second = run_named(name, &config).unwrap();
            assert_eq!(first.canonical_json, second.canonical_json, "{name} {strategy}");
            assert_eq!(first.digest, second.digest);
            assert_eq!(first.report, second.report);
        }
    }
}

#[test]
fn policy_digest_differs_between_strategies() {
    let dfs = run_named("eight_puzzle:two_moves", &RunConfig::new(Strategy::Dfs, 5)).unwrap();
    let iddfs = run_named("eight_puzzle:two_moves", &RunConfig::new(Strategy::Iddfs, 5)).unwrap();
    assert_ne!(dfs.policy_digest, iddfs.policy_digest);
}

// ---------------------------------------------------------------------------
// Best-cost pruning through the public problem contract
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
struct Edge(char, char, Cost);

impl Rule for Edge {
    fn cost(&self) -> Cost {
        self.2
    }

    fn name(&self) -> String {
        format!("{}{}", self.0, self.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Node(char);

impl State<Edge> for Node {
    fn apply(&self, rule: &Edge) -> Option<Self> {
        (rule.0 == self.0).then_some(Node(rule.1))
    }
}

struct Weighted {
    edges: Vec<Edge>,
    goal: char,
}

impl Problem for Weighted {
    type Rule = Edge;
    type State = Node;

    fn problem_id(&self) -> &str {
        "weighted"
    }

    fn initial_state(&self) -> Node {
        Node('A')
    }

    fn rules(&self) -> &[Edge] {
        &self.edges
    }

    fn is_goal(&self, state: &Node) -> bool {
        state.0 == self.goal
    }

    fn heuristic(&self, _state: &Node) -> Cost {
        0
    }
}

#[test]
fn costlier_rediscovery_is_dropped_at_generation() {
    // B is settled at g=5 via A->B; A->C->B reaches it again at g=7.
    let problem = Weighted {
        edges: vec![Edge('A', 'B', 5), Edge('A', 'C', 6), Edge('C', 'B', 1)],
        goal: 'Z',
    };
    let result = solve(&problem, Strategy::Bfs, 100);
    assert!(!result.is_solved());
    assert_eq!(result.stats.dominated_on_generation, 1);
    assert_eq!(result.stats.generated, 2);
    assert_pop_accounting(&result.stats, false);
}

#[test]
fn shared_state_is_settled_at_its_cheapest_cost() {
    // D is reachable at g=2 via B and at g=3 via C and E.
    let problem = Weighted {
        edges: vec![
            Edge('A', 'B', 1),
            Edge('A', 'C', 1),
            Edge('C', 'E', 1),
            Edge('E', 'D', 1),
            Edge('B', 'D', 1),
            Edge('D', 'Z', 1),
        ],
        goal: 'Z',
    };
    let bfs = solve(&problem, Strategy::Bfs, 10);
    assert_eq!(bfs.solution().unwrap().cost(), 3);
    let astar = solve(&problem, Strategy::AStar, 10);
    assert_eq!(astar.solution().unwrap().cost(), 3);
    let dfs = solve(&problem, Strategy::Dfs, 10);
    assert!(dfs.solution().unwrap().cost() >= 3);
    assert_pop_accounting(&dfs.stats, true);
}
