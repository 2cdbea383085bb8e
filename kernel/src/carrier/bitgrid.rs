//! `BitGrid`: one-hot packed `n x n` grid of values `1..=n`.
//!
//! # Layout
//!
//! Each cell owns `n` consecutive bits; bit `v - 1` is set when the cell
//! holds `v`, and no bit is set when the cell is empty. Cells are laid out
//! row-major, so cell `(r, c)` starts at bit `(r * n + c) * n`. A cell may
//! straddle two `u64` words.
//!
//! The one-hot form makes "does this row contain every value exactly once"
//! an OR over the row followed by a popcount, and keeps equality and hashing
//! down to a handful of word comparisons.

/// Largest supported side length (`16^3` bits = 64 words).
pub const MAX_SIDE: usize = 16;

/// Errors raised when building or writing a [`BitGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BitGridError {
    /// Side length outside `1..=MAX_SIDE`.
    #[error("grid side {side} outside 1..={max}", max = MAX_SIDE)]
    UnsupportedSide { side: usize },
    /// Cell coordinates outside the grid.
    #[error("cell ({row}, {col}) outside a {side}x{side} grid")]
    CellOutOfRange { row: usize, col: usize, side: usize },
    /// Value outside `1..=side`.
    #[error("value {value} outside 1..={side}")]
    ValueOutOfRange { value: u8, side: usize },
}

/// Packed one-hot grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitGrid {
    side: usize,
    words: Box<[u64]>,
}

impl BitGrid {
    /// Create an empty grid of the given side.
    ///
    /// # Errors
    ///
    /// Returns [`BitGridError::UnsupportedSide`] if `side` is 0 or larger than
    /// [`MAX_SIDE`].
    pub fn new(side: usize) -> Result<Self, BitGridError> {
        if side == 0 || side > MAX_SIDE {
            return Err(BitGridError::UnsupportedSide { side });
        }
        let bits = side * side * side;
        Ok(Self {
            side,
            words: vec![0u64; bits.div_ceil(64)].into_boxed_slice(),
        })
    }

    /// Build a grid from rows, where `0` marks an empty cell.
    ///
    /// # Errors
    ///
    /// Fails if the rows are not square or any value exceeds the side.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BitGridError> {
        let mut grid = Self::new(rows.len())?;
        for (row, values) in rows.iter().enumerate() {
            if values.len() != grid.side {
                return Err(BitGridError::CellOutOfRange {
                    row,
                    col: values.len(),
                    side: grid.side,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    grid.put(row, col, value)?;
                }
            }
        }
        Ok(grid)
    }

    /// Side length `n`.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Write `value` into `(row, col)`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Fails if the cell is outside the grid or `value` is not in `1..=n`.
    pub fn put(&mut self, row: usize, col: usize, value: u8) -> Result<(), BitGridError> {
        self.check_cell(row, col)?;
        if value == 0 || usize::from(value) > self.side {
            return Err(BitGridError::ValueOutOfRange {
                value,
                side: self.side,
            });
        }
        self.write(self.offset(row, col), 1u64 << (value - 1));
        Ok(())
    }

    /// Empty the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Fails if the cell is outside the grid.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        self.check_cell(row, col)?;
        self.write(self.offset(row, col), 0);
        Ok(())
    }

    /// Value at `(row, col)`, or `None` when empty or out of range.
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> Option<u8> {
        let mask = self.cell_mask(row, col);
        if mask == 0 {
            return None;
        }
        u8::try_from(mask.trailing_zeros() + 1).ok()
    }

    /// Raw one-hot bits of a cell (0 when empty or out of range).
    #[must_use]
    pub fn cell_mask(&self, row: usize, col: usize) -> u64 {
        if row >= self.side || col >= self.side {
            return 0;
        }
        self.read(self.offset(row, col))
    }

    /// OR of every cell in `row`.
    #[must_use]
    pub fn row_mask(&self, row: usize) -> u64 {
        (0..self.side).fold(0, |acc, col| acc | self.cell_mask(row, col))
    }

    /// OR of every cell in `col`.
    #[must_use]
    pub fn column_mask(&self, col: usize) -> u64 {
        (0..self.side).fold(0, |acc, row| acc | self.cell_mask(row, col))
    }

    /// Mask with every value bit set (`n` ones).
    #[must_use]
    pub fn full_mask(&self) -> u64 {
        (1u64 << self.side) - 1
    }

    /// Exchange the contents of two cells. Out-of-range cells are ignored.
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        if self.check_cell(a.0, a.1).is_err() || self.check_cell(b.0, b.1).is_err() {
            return;
        }
        let (oa, ob) = (self.offset(a.0, a.1), self.offset(b.0, b.1));
        let (ma, mb) = (self.read(oa), self.read(ob));
        self.write(oa, mb);
        self.write(ob, ma);
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        (0..self.side)
            .flat_map(|row| (0..self.side).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cell_mask(row, col) != 0)
            .count()
    }

    /// Whether every cell holds a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled_count() == self.side * self.side
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<(), BitGridError> {
        if row >= self.side || col >= self.side {
            return Err(BitGridError::CellOutOfRange {
                row,
                col,
                side: self.side,
            });
        }
        Ok(())
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.side + col) * self.side
    }

    fn read(&self, offset: usize) -> u64 {
        let (word, bit) = (offset / 64, offset % 64);
        let mut bits = self.words[word] >> bit;
        if bit + self.side > 64 {
            bits |= self.words[word + 1] << (64 - bit);
        }
        bits & self.full_mask()
    }

    fn write(&mut self, offset: usize, bits: u64) {
        let full = self.full_mask();
        let bits = bits & full;
        let (word, bit) = (offset / 64, offset % 64);
        self.words[word] = (self.words[word] & !(full << bit)) | (bits << bit);
        if bit + self.side > 64 {
            let spill = 64 - bit;
            self.words[word + 1] = (self.words[word + 1] & !(full >> spill)) | (bits >> spill);
        }
    }
}
