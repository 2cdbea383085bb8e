//! Shared helpers for GPS benchmark suites.

use gps_harness::worlds::calcudoku::Calcudoku;
use gps_harness::worlds::eight_puzzle::SlidingPuzzle;
use gps_harness::worlds::{lookup, CatalogWorld};

/// Sliding-tile world from the catalog.
///
/// # Panics
///
/// Panics if `name` is not a sliding-tile catalog entry. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn sliding_tile(name: &str) -> SlidingPuzzle {
    match lookup(name) {
        Ok(Some(CatalogWorld::SlidingTile(puzzle))) => puzzle,
        other => panic!("{name} is not a sliding-tile world: {other:?}"),
    }
}

/// Calcudoku world from the catalog.
///
/// # Panics
///
/// Panics if `name` is not a calcudoku catalog entry.
#[must_use]
pub fn calcudoku(name: &str) -> Calcudoku {
    match lookup(name) {
        Ok(Some(CatalogWorld::Calcudoku(board))) => board,
        other => panic!("{name} is not a calcudoku world: {other:?}"),
    }
}
