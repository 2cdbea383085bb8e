//! Calcudoku acceptance: board validation and swap-based solving.

use gps_harness::worlds::calcudoku::{Calcudoku, Group, Operation};
use gps_harness::worlds::{lookup, CatalogWorld};
use gps_search::contract::{Problem, State};
use gps_search::policy::Strategy;
use gps_search::search::solve;

fn catalog_board(name: &str) -> Calcudoku {
    match lookup(name).unwrap() {
        Some(CatalogWorld::Calcudoku(board)) => board,
        other => panic!("{name} is not a calcudoku world: {other:?}"),
    }
}

fn givens_2x2(rows: &[Vec<u8>]) -> Calcudoku {
    Calcudoku::new(
        "givens",
        rows,
        vec![
            Group::new(Operation::Given, 1, vec![(0, 0)]),
            Group::new(Operation::Given, 1, vec![(1, 1)]),
        ],
    )
    .unwrap()
}

#[test]
fn latin_square_with_matching_givens_is_valid() {
    let world = givens_2x2(&[vec![1, 2], vec![2, 1]]);
    assert!(world.check(&world.initial_state()).is_valid());
}

#[test]
fn repeated_value_is_invalid() {
    let world = givens_2x2(&[vec![1, 2], vec![1, 2]]);
    let check = world.check(&world.initial_state());
    assert!(!check.is_valid());
    assert_eq!(check.invalid_columns, 2);
}

#[test]
fn incomplete_grid_is_invalid() {
    let world = givens_2x2(&[vec![1, 0], vec![0, 1]]);
    let check = world.check(&world.initial_state());
    assert!(!check.complete);
    assert!(!check.is_valid());
}

#[test]
fn two_by_two_needs_a_single_swap() {
    let world = catalog_board("calcudoku:2x2");
    let result = solve(&world, Strategy::Bfs, 4);
    let solution = result.solution().unwrap();
    assert_eq!(solution.depth(), 1);
    assert_eq!(solution.final_state().rows(), vec![vec![1, 2], vec![2, 1]]);
}

#[test]
fn three_by_three_bfs_finds_three_swap_solution() {
    let world = catalog_board("calcudoku:3x3");
    let result = solve(&world, Strategy::Bfs, 6);
    let solution = result.solution().unwrap();
    assert_eq!(solution.cost(), 3);
    assert_eq!(
        solution.final_state().rows(),
        vec![vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]]
    );
}

#[test]
fn three_by_three_solves_under_every_strategy() {
    let world = catalog_board("calcudoku:3x3");
    for strategy in Strategy::ALL {
        let result = solve(&world, strategy, 8);
        let solution = result
            .solution()
            .unwrap_or_else(|| panic!("{strategy} failed: {:?}", result.stats));

        let mut state = world.initial_state();
        for rule in solution.rules() {
            state = state.apply(rule).expect("swap on solution path must apply");
        }
        assert!(world.check(&state).is_valid(), "{strategy}");
    }
}

#[test]
fn heuristic_counts_violations_of_start_board() {
    let world = catalog_board("calcudoku:3x3");
    let check = world.check(&world.initial_state());
    assert_eq!(check.invalid_rows, 0);
    assert_eq!(check.invalid_columns, 3);
    assert_eq!(check.invalid_groups, 3);
    assert_eq!(world.heuristic(&world.initial_state()), 6);
}
