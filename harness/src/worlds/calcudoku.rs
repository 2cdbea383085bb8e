//! Calcudoku: a Latin square with arithmetic cages.
//!
//! The board is a kernel [`BitGrid`]. Search starts from a filled board and
//! swaps pairs of cells until every row, column and group is valid, so the
//! multiset of values never changes.

use std::fmt;

use gps_kernel::carrier::bitgrid::BitGrid;
use gps_search::contract::{Cost, Problem, Rule, State};

use crate::worlds::WorldError;

/// `(row, col)`.
pub type Cell = (usize, usize);

/// Arithmetic constraint of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Single cell holding exactly the target.
    Given,
    Add,
    /// Largest value minus the sum of the others.
    Subtract,
    Multiply,
    /// Largest value divided by the product of the others, exactly.
    Divide,
}

/// A cage: cells plus the operation their values must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    cells: Vec<Cell>,
    operation: Operation,
    target: u32,
}

impl Group {
    #[must_use]
    pub fn new(operation: Operation, target: u32, cells: Vec<Cell>) -> Self {
        Self {
            cells,
            operation,
            target,
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Whether `values` (one per cell, all present) satisfy the group.
    #[must_use]
    pub fn is_satisfied(&self, values: &[u8]) -> bool {
        let values: Vec<u64> = values.iter().map(|&v| u64::from(v)).collect();
        let target = u64::from(self.target);
        let Some(&largest) = values.iter().max().filter(|&&v| v > 0) else {
            return false;
        };
        match self.operation {
            Operation::Given => values.len() == 1 && largest == target,
            Operation::Add => values.iter().sum::<u64>() == target,
            Operation::Multiply => checked_product(&values) == Some(target),
            Operation::Subtract => {
                let rest: u64 = values.iter().sum::<u64>() - largest;
                largest.checked_sub(rest) == Some(target)
            }
            Operation::Divide => {
                let mut rest = values;
                if let Some(at) = rest.iter().position(|&v| v == largest) {
                    rest.swap_remove(at);
                }
                // An overflowing divisor exceeds `largest`, so it cannot divide it.
                checked_product(&rest).is_some_and(|rest| {
                    rest != 0 && largest % rest == 0 && largest / rest == target
                })
            }
        }
    }
}

/// Product of `values`, or `None` once it leaves `u64`.
fn checked_product(values: &[u64]) -> Option<u64> {
    values.iter().try_fold(1u64, |acc, &v| acc.checked_mul(v))
}

/// Validation summary of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardCheck {
    /// Every cell holds a value.
    pub complete: bool,
    pub invalid_rows: u32,
    pub invalid_columns: u32,
    /// Complete groups whose values fail the operation.
    pub invalid_groups: u32,
}

impl BoardCheck {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.complete
            && self.invalid_rows == 0
            && self.invalid_columns == 0
            && self.invalid_groups == 0
    }

    /// Rows + columns + groups in violation.
    #[must_use]
    pub fn violations(&self) -> u32 {
        self.invalid_rows + self.invalid_columns + self.invalid_groups
    }
}

/// Swap the values of two cells. `from` precedes `to` in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapCells {
    pub from: Cell,
    pub to: Cell,
}

impl Rule for SwapCells {
    fn cost(&self) -> Cost {
        1
    }

    fn name(&self) -> String {
        format!(
            "Swap ({}, {}) with ({}, {})",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// Board contents.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CalcudokuState {
    grid: BitGrid,
}

impl CalcudokuState {
    #[must_use]
    pub fn grid(&self) -> &BitGrid {
        &self.grid
    }

    /// Board rows with `0` for empty cells.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u8>> {
        let side = self.grid.side();
        (0..side)
            .map(|row| {
                (0..side)
                    .map(|col| self.grid.value(row, col).unwrap_or(0))
                    .collect()
            })
            .collect()
    }
}

impl State<SwapCells> for CalcudokuState {
    fn apply(&self, rule: &SwapCells) -> Option<Self> {
        let a = self.grid.value(rule.from.0, rule.from.1)?;
        let b = self.grid.value(rule.to.0, rule.to.1)?;
        if a == b {
            return None;
        }
        let mut grid = self.grid.clone();
        grid.swap(rule.from, rule.to);
        Some(Self { grid })
    }
}

impl fmt::Debug for CalcudokuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

/// A calcudoku instance.
#[derive(Debug, Clone)]
pub struct Calcudoku {
    id: String,
    initial: CalcudokuState,
    groups: Vec<Group>,
    rules: Vec<SwapCells>,
}

impl Calcudoku {
    /// Build an instance from its starting rows (`0` = empty) and groups.
    ///
    /// # Errors
    ///
    /// Returns a [`WorldError`] if the grid is invalid, a group is empty, a
    /// group cell is off the board, or a `Given` group has more than one cell.
    pub fn new(
        id: impl Into<String>,
        rows: &[Vec<u8>],
        groups: Vec<Group>,
    ) -> Result<Self, WorldError> {
        let grid = BitGrid::from_rows(rows)?;
        let side = grid.side();
        for (index, group) in groups.iter().enumerate() {
            if group.cells.is_empty() {
                return Err(WorldError::InvalidGroup {
                    index,
                    detail: "group has no cells".into(),
                });
            }
            if group.operation == Operation::Given && group.cells.len() != 1 {
                return Err(WorldError::InvalidGroup {
                    index,
                    detail: format!("given group has {} cells", group.cells.len()),
                });
            }
            if let Some(&(row, col)) = group.cells.iter().find(|&&(r, c)| r >= side || c >= side)
            {
                return Err(WorldError::InvalidGroup {
                    index,
                    detail: format!("cell ({row}, {col}) is outside a {side}x{side} grid"),
                });
            }
        }

        let cells: Vec<Cell> = (0..side)
            .flat_map(|row| (0..side).map(move |col| (row, col)))
            .collect();
        let rules = cells
            .iter()
            .enumerate()
            .flat_map(|(i, &from)| cells[i + 1..].iter().map(move |&to| SwapCells { from, to }))
            .collect();

        Ok(Self {
            id: id.into(),
            initial: CalcudokuState { grid },
            groups,
            rules,
        })
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Validate a board against the Latin-square and group constraints.
    #[must_use]
    pub fn check(&self, state: &CalcudokuState) -> BoardCheck {
        let grid = &state.grid;
        let side = grid.side();
        let full = grid.full_mask();
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);

        let invalid_rows = count((0..side).filter(|&r| grid.row_mask(r) != full).count());
        let invalid_columns = count((0..side).filter(|&c| grid.column_mask(c) != full).count());
        let invalid_groups = count(
            self.groups
                .iter()
                .filter(|group| {
                    group
                        .cells
                        .iter()
                        .map(|&(r, c)| grid.value(r, c))
                        .collect::<Option<Vec<u8>>>()
                        .is_some_and(|values| !group.is_satisfied(&values))
                })
                .count(),
        );

        BoardCheck {
            complete: grid.is_complete(),
            invalid_rows,
            invalid_columns,
            invalid_groups,
        }
    }
}

impl Problem for Calcudoku {
    type Rule = SwapCells;
    type State = CalcudokuState;

    fn problem_id(&self) -> &str {
        &self.id
    }

    fn initial_state(&self) -> CalcudokuState {
        self.initial.clone()
    }

    fn rules(&self) -> &[SwapCells] {
        &self.rules
    }

    fn is_goal(&self, state: &CalcudokuState) -> bool {
        self.check(state).is_valid()
    }

    fn heuristic(&self, state: &CalcudokuState) -> Cost {
        self.check(state).violations()
    }
}
