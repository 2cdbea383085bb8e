//! Concrete problems for the search engine, plus a catalog of named
//! instances used by the fixture binary, tests and benchmarks.

pub mod calcudoku;
pub mod eight_puzzle;

use gps_kernel::carrier::bitgrid::BitGridError;

use self::calcudoku::{Calcudoku, Group, Operation};
use self::eight_puzzle::{SlidingPuzzle, BLANK};

/// Invalid world layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("unsupported board side {side}")]
    UnsupportedSide { side: usize },
    #[error("row {row} has {len} cells, expected {side}")]
    RaggedRow { row: usize, len: usize, side: usize },
    #[error("tile {value} is out of range for a {side}x{side} board")]
    TileOutOfRange { value: i32, side: usize },
    #[error("tile {value} appears more than once")]
    DuplicateTile { value: i32 },
    #[error("board has no blank")]
    MissingBlank,
    #[error("group {index}: {detail}")]
    InvalidGroup { index: usize, detail: String },
    #[error(transparent)]
    Grid(#[from] BitGridError),
}

/// Names accepted by [`lookup`], in catalog order.
pub const CATALOG: [&str; 4] = [
    "eight_puzzle:two_moves",
    "eight_puzzle:scrambled",
    "calcudoku:3x3",
    "calcudoku:2x2",
];

/// A named catalog instance.
#[derive(Debug, Clone)]
pub enum CatalogWorld {
    SlidingTile(SlidingPuzzle),
    Calcudoku(Calcudoku),
}

/// Build the catalog instance called `name`, or `None` if unknown.
///
/// # Errors
///
/// Returns a [`WorldError`] if a built-in layout fails validation.
pub fn lookup(name: &str) -> Result<Option<CatalogWorld>, WorldError> {
    let world = match name {
        "eight_puzzle:two_moves" => CatalogWorld::SlidingTile(SlidingPuzzle::new(
            name,
            &[vec![1, 2, 3], vec![4, BLANK, 5], vec![7, 8, 6]],
        )?),
        "eight_puzzle:scrambled" => CatalogWorld::SlidingTile(SlidingPuzzle::new(
            name,
            &[vec![4, 1, 3], vec![7, 2, 6], vec![BLANK, 5, 8]],
        )?),
        "calcudoku:3x3" => CatalogWorld::Calcudoku(Calcudoku::new(
            name,
            &[vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]],
            vec![
                Group::new(Operation::Add, 3, vec![(0, 0), (1, 0)]),
                Group::new(Operation::Multiply, 6, vec![(0, 1), (0, 2)]),
                Group::new(Operation::Add, 6, vec![(1, 1), (1, 2), (2, 2)]),
                Group::new(Operation::Subtract, 2, vec![(2, 0), (2, 1)]),
            ],
        )?),
        "calcudoku:2x2" => CatalogWorld::Calcudoku(Calcudoku::new(
            name,
            &[vec![1, 1], vec![2, 2]],
            vec![
                Group::new(Operation::Given, 1, vec![(0, 0)]),
                Group::new(Operation::Given, 1, vec![(1, 1)]),
            ],
        )?),
        _ => return Ok(None),
    };
    Ok(Some(world))
}
