//! Sliding-tile acceptance: path shape, optimality and heuristic benefit on
//! the 8-puzzle.

use gps_harness::worlds::eight_puzzle::{SlidingPuzzle, TileHeuristic, BLANK};
use gps_search::contract::{Problem, Rule, State};
use gps_search::policy::Strategy;
use gps_search::search::{solve, SearchResult};

fn two_moves() -> SlidingPuzzle {
    SlidingPuzzle::new(
        "two_moves",
        &[vec![1, 2, 3], vec![4, BLANK, 5], vec![7, 8, 6]],
    )
    .unwrap()
}

fn scrambled() -> SlidingPuzzle {
    SlidingPuzzle::new(
        "scrambled",
        &[vec![4, 1, 3], vec![7, 2, 6], vec![BLANK, 5, 8]],
    )
    .unwrap()
}

type PuzzleResult = SearchResult<
    <SlidingPuzzle as Problem>::State,
    <SlidingPuzzle as Problem>::Rule,
>;

fn rule_names(result: &PuzzleResult) -> Vec<String> {
    result
        .solution()
        .expect("expected a solution")
        .rules()
        .iter()
        .map(Rule::name)
        .collect()
}

/// Re-apply the solution path from the initial state and check it lands on
/// the reported goal.
fn assert_path_replays(puzzle: &SlidingPuzzle, result: &PuzzleResult) {
    let solution = result.solution().expect("expected a solution");
    let mut state = puzzle.initial_state();
    for rule in solution.rules() {
        state = state.apply(rule).expect("rule on solution path must apply");
    }
    assert_eq!(&state, solution.final_state());
    assert!(puzzle.is_goal(&state));
}

#[test]
fn bfs_finds_right_then_down() {
    let puzzle = two_moves();
    let result = solve(&puzzle, Strategy::Bfs, 5);
    assert_eq!(
        rule_names(&result),
        vec!["Move blank space Right", "Move blank space Down"]
    );
    assert_eq!(result.solution().unwrap().cost(), 2);
    assert_path_replays(&puzzle, &result);
}

#[test]
fn astar_matches_bfs_with_fewer_expansions() {
    let puzzle = two_moves();
    let bfs = solve(&puzzle, Strategy::Bfs, 5);
    let astar = solve(&puzzle, Strategy::AStar, 5);
    assert_eq!(rule_names(&astar), rule_names(&bfs));
    assert!(
        astar.stats.expansions <= bfs.stats.expansions,
        "A* expanded {} nodes, BFS {}",
        astar.stats.expansions,
        bfs.stats.expansions
    );
    assert_eq!(astar.stats.expansions, 2);
    assert_eq!(astar.stats.analyzed, 3);
}

#[test]
fn iddfs_runs_three_passes_to_depth_two() {
    let puzzle = two_moves();
    let result = solve(&puzzle, Strategy::Iddfs, 5);
    assert_eq!(result.stats.passes, 3);
    assert_eq!(result.final_bound, 2);
    assert_eq!(result.solution().unwrap().depth(), 2);
    // Earlier passes are re-explored, so IDDFS analyzes more than one pass would.
    assert!(result.stats.analyzed > 6, "analyzed={}", result.stats.analyzed);
    assert_path_replays(&puzzle, &result);
}

#[test]
fn every_strategy_solves_within_bound() {
    let puzzle = two_moves();
    for strategy in Strategy::ALL {
        let result = solve(&puzzle, strategy, 5);
        let solution = result.solution().expect("solvable within bound");
        assert!(solution.cost() <= 5, "{strategy}: cost {}", solution.cost());
        assert_path_replays(&puzzle, &result);
    }
}

#[test]
fn scrambled_board_optimal_cost_is_six() {
    let puzzle = scrambled();
    for strategy in [Strategy::Bfs, Strategy::AStar, Strategy::Iddfs] {
        let result = solve(&puzzle, strategy, 12);
        assert_eq!(result.solution().unwrap().cost(), 6, "{strategy}");
        assert_path_replays(&puzzle, &result);
    }
}

#[test]
fn informed_heuristics_beat_uniform_cost() {
    let manhattan = solve(&scrambled(), Strategy::AStar, 12);
    let misplaced = solve(
        &scrambled().with_heuristic(TileHeuristic::MisplacedTiles),
        Strategy::AStar,
        12,
    );
    let zero = solve(
        &scrambled().with_heuristic(TileHeuristic::Zero),
        Strategy::AStar,
        12,
    );
    for result in [&manhattan, &misplaced, &zero] {
        assert_eq!(result.solution().unwrap().cost(), 6);
    }
    assert!(manhattan.stats.expansions < zero.stats.expansions);
    assert!(misplaced.stats.expansions < zero.stats.expansions);
}

#[test]
fn greedy_solution_is_valid_but_not_necessarily_optimal() {
    let puzzle = scrambled();
    let result = solve(&puzzle, Strategy::Greedy, 30);
    assert!(result.solution().unwrap().cost() >= 6);
    assert_path_replays(&puzzle, &result);
}

#[test]
fn unreachable_goal_exhausts_under_tight_bound() {
    let result = solve(&scrambled(), Strategy::Bfs, 5);
    assert!(!result.is_solved());
    assert!(result.stats.depth_discards > 0);
}
