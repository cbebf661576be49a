use serde::{Deserialize, Serialize};

/// A (row, column) pair. Row 0 is the top, column 0 the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The inverse of [`Position::to_index()`].
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// The row-major index, or `None` if the position lies outside a `size` x `size` grid.
    pub fn to_index(self, size: usize) -> Option<usize> {
        (self.row < size && self.col < size).then(|| self.row * size + self.col)
    }

    /// The neighbouring position after one step of `(d_row, d_col)`.
    ///
    /// Returns `None` when the step would leave the grid.
    pub fn offset(self, (d_row, d_col): (isize, isize), size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}
