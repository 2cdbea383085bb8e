//! Sliding-tile puzzle (the 8-puzzle when `n = 3`).
//!
//! Rules move the blank one cell. The goal has tiles `1..n*n-1` in row-major
//! order with the blank in the bottom-right corner.

use std::fmt;

use gps_search::contract::{Cost, Problem, Rule, State};

use crate::worlds::WorldError;

/// Blank marker in row input and output.
pub const BLANK: i32 = -1;

/// Largest supported side (tiles must fit in a byte).
pub const MAX_SIDE: usize = 15;

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Rule order used by [`SlidingPuzzle::rules`].
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` offset of the blank.
    const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

/// Move the blank one cell in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveBlank {
    pub direction: Direction,
}

impl Rule for MoveBlank {
    fn cost(&self) -> Cost {
        1
    }

    fn name(&self) -> String {
        format!("Move blank space {}", self.direction.as_str())
    }
}

/// Board contents, row-major. `0` is the blank internally.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    side: usize,
    tiles: Box<[u8]>,
    blank: usize,
}

impl PuzzleState {
    /// Build a board from rows using [`BLANK`] for the empty cell.
    ///
    /// # Errors
    ///
    /// Returns a [`WorldError`] if the board is not square, the side is out
    /// of range, or the tiles are not exactly `1..n*n-1` plus one blank.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, WorldError> {
        let side = rows.len();
        if !(2..=MAX_SIDE).contains(&side) {
            return Err(WorldError::UnsupportedSide { side });
        }
        let cell_count = side * side;
        let mut tiles = Vec::with_capacity(cell_count);
        let mut seen = vec![false; cell_count];
        let mut blank = None;

        for (row, values) in rows.iter().enumerate() {
            if values.len() != side {
                return Err(WorldError::RaggedRow {
                    row,
                    len: values.len(),
                    side,
                });
            }
            for &value in values {
                if value == BLANK {
                    if blank.is_some() {
                        return Err(WorldError::DuplicateTile { value });
                    }
                    blank = Some(tiles.len());
                    tiles.push(0);
                    continue;
                }
                let tile = usize::try_from(value)
                    .ok()
                    .filter(|&t| (1..cell_count).contains(&t))
                    .ok_or(WorldError::TileOutOfRange { value, side })?;
                if seen[tile] {
                    return Err(WorldError::DuplicateTile { value });
                }
                seen[tile] = true;
                let tile =
                    u8::try_from(tile).map_err(|_| WorldError::TileOutOfRange { value, side })?;
                tiles.push(tile);
            }
        }

        let blank = blank.ok_or(WorldError::MissingBlank)?;
        Ok(Self {
            side,
            tiles: tiles.into_boxed_slice(),
            blank,
        })
    }

    /// The solved board of side `side`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnsupportedSide`] if `side` is out of range.
    pub fn solved(side: usize) -> Result<Self, WorldError> {
        if !(2..=MAX_SIDE).contains(&side) {
            return Err(WorldError::UnsupportedSide { side });
        }
        let cell_count = side * side;
        let tiles: Vec<u8> = (1..cell_count)
            .map(|t| u8::try_from(t).unwrap_or(u8::MAX))
            .chain(std::iter::once(0))
            .collect();
        Ok(Self {
            side,
            tiles: tiles.into_boxed_slice(),
            blank: cell_count - 1,
        })
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// `(row, col)` of the blank.
    #[must_use]
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.side, self.blank % self.side)
    }

    /// Board rows with [`BLANK`] for the empty cell.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<i32>> {
        self.tiles
            .chunks(self.side)
            .map(|row| {
                row.iter()
                    .map(|&t| if t == 0 { BLANK } else { i32::from(t) })
                    .collect()
            })
            .collect()
    }

    fn tiles(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.tiles
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, t)| t != 0)
    }
}

impl State<MoveBlank> for PuzzleState {
    fn apply(&self, rule: &MoveBlank) -> Option<Self> {
        let (row, col) = self.blank();
        let (dr, dc) = rule.direction.delta();
        let row = row.checked_add_signed(dr).filter(|&r| r < self.side)?;
        let col = col.checked_add_signed(dc).filter(|&c| c < self.side)?;
        let target = row * self.side + col;

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Self {
            side: self.side,
            tiles,
            blank: target,
        })
    }
}

impl fmt::Debug for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

/// Heuristic used by [`SlidingPuzzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileHeuristic {
    /// Sum of each tile's row and column distance from its goal cell.
    #[default]
    Manhattan,
    /// Number of tiles not on their goal cell.
    MisplacedTiles,
    /// Always 0: A* degrades to uniform-cost search.
    Zero,
}

impl TileHeuristic {
    fn estimate(self, state: &PuzzleState) -> Cost {
        let side = state.side;
        let total: usize = match self {
            TileHeuristic::Manhattan => state
                .tiles()
                .map(|(index, tile)| {
                    let goal = usize::from(tile) - 1;
                    (index / side).abs_diff(goal / side) + (index % side).abs_diff(goal % side)
                })
                .sum(),
            TileHeuristic::MisplacedTiles => state
                .tiles()
                .filter(|&(index, tile)| usize::from(tile) != index + 1)
                .count(),
            TileHeuristic::Zero => 0,
        };
        Cost::try_from(total).unwrap_or(Cost::MAX)
    }
}

/// A sliding-tile instance: an initial board and a heuristic.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    id: String,
    initial: PuzzleState,
    goal: PuzzleState,
    rules: Vec<MoveBlank>,
    heuristic: TileHeuristic,
}

impl SlidingPuzzle {
    /// # Errors
    ///
    /// Returns a [`WorldError`] if `rows` is not a valid board.
    pub fn new(id: impl Into<String>, rows: &[Vec<i32>]) -> Result<Self, WorldError> {
        let initial = PuzzleState::from_rows(rows)?;
        let goal = PuzzleState::solved(initial.side())?;
        Ok(Self {
            id: id.into(),
            initial,
            goal,
            rules: Direction::ALL
                .iter()
                .map(|&direction| MoveBlank { direction })
                .collect(),
            heuristic: TileHeuristic::default(),
        })
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: TileHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[must_use]
    pub fn goal(&self) -> &PuzzleState {
        &self.goal
    }
}

impl Problem for SlidingPuzzle {
    type Rule = MoveBlank;
    type State = PuzzleState;

    fn problem_id(&self) -> &str {
        &self.id
    }

    fn initial_state(&self) -> PuzzleState {
        self.initial.clone()
    }

    fn rules(&self) -> &[MoveBlank] {
        &self.rules
    }

    fn is_goal(&self, state: &PuzzleState) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &PuzzleState) -> Cost {
        self.heuristic.estimate(state)
    }
}
