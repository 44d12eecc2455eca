#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow sign loss when casting coordinates since callers validate them first
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting dimensions as boards stay well within i16 range
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation
)]

use crate::shapes::ShapeKind;

/// The occupancy grid. Row 0 is the top of the well; cells hold the kind of
/// the piece that filled them so the renderer can color the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Option<ShapeKind>>>,
}

impl Board {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![None; cols]; rows],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn in_bounds(&self, row: i16, col: i16) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Whether the cell at (row, col) is filled. Out-of-range coordinates
    /// read as empty, which is what the collision validator wants: it does
    /// its own wall and floor checks before consulting occupancy.
    #[must_use]
    pub fn occupied(&self, row: i16, col: i16) -> bool {
        self.cell(row, col).is_some()
    }

    #[must_use]
    pub fn cell(&self, row: i16, col: i16) -> Option<ShapeKind> {
        if self.in_bounds(row, col) {
            self.cells[row as usize][col as usize]
        } else {
            None
        }
    }

    /// Unconditional cell write. Only piece placement and clearing call
    /// this, and they never pass out-of-range coordinates.
    pub fn set_cell(&mut self, row: i16, col: i16, value: Option<ShapeKind>) {
        debug_assert!(self.in_bounds(row, col));
        self.cells[row as usize][col as usize] = value;
    }

    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows && self.cells[row].iter().all(Option::is_some)
    }

    /// Remove a row and insert an empty row at the top as one operation:
    /// every row above `row` shifts down by one and the row count is
    /// unchanged at every observable point.
    pub fn collapse_row(&mut self, row: usize) {
        debug_assert!(row < self.rows);
        self.cells.remove(row);
        self.cells.insert(0, vec![None; self.cols]);
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(None);
        }
    }

    /// Row-major view of the grid for rendering.
    #[must_use]
    pub fn grid(&self) -> &[Vec<Option<ShapeKind>>] {
        &self.cells
    }
}
