#![warn(clippy::all, clippy::pedantic)]

use crate::shapes::{Layout, Orientation, ShapeKind};

/// Sparse per-row cell set in absolute board coordinates: an ordered list of
/// `(row, occupied columns)` pairs. The same encoding the catalog uses for
/// relative layouts, kept sparse end to end — translating or re-anchoring a
/// piece is just adding offsets to the listed rows and columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCells(Vec<(i16, Vec<i16>)>);

impl PieceCells {
    /// Instantiate a base layout at the given board offset.
    #[must_use]
    pub fn from_layout(layout: Layout, row_offset: i16, col_offset: i16) -> Self {
        Self(
            layout
                .iter()
                .map(|&(row, cols)| {
                    (
                        row + row_offset,
                        cols.iter().map(|col| col + col_offset).collect(),
                    )
                })
                .collect(),
        )
    }

    /// The same cells shifted by an offset. This is the candidate for a
    /// move attempt; it touches no board state.
    #[must_use]
    pub fn translated(&self, row_offset: i16, col_offset: i16) -> Self {
        Self(
            self.0
                .iter()
                .map(|(row, cols)| {
                    (
                        row + row_offset,
                        cols.iter().map(|col| col + col_offset).collect(),
                    )
                })
                .collect(),
        )
    }

    /// Top-left corner of the bounding box: (minimum row, minimum column).
    /// This is the anchor a rotation re-offsets the new layout by.
    #[must_use]
    pub fn pivot(&self) -> (i16, i16) {
        let min_row = self.0.iter().map(|(row, _)| *row).min().unwrap_or(0);
        let min_col = self
            .0
            .iter()
            .filter_map(|(_, cols)| cols.iter().copied().min())
            .min()
            .unwrap_or(0);
        (min_row, min_col)
    }

    /// Bottom-most occupied row.
    #[must_use]
    pub fn max_row(&self) -> i16 {
        self.0.iter().map(|(row, _)| *row).max().unwrap_or(0)
    }

    /// Every occupied `(row, col)` coordinate.
    pub fn iter(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.0
            .iter()
            .flat_map(|(row, cols)| cols.iter().map(move |&col| (*row, col)))
    }

    #[must_use]
    pub fn contains(&self, row: i16, col: i16) -> bool {
        self.0
            .iter()
            .any(|(r, cols)| *r == row && cols.contains(&col))
    }
}

/// The one piece currently in flight. Its cells are absolute board
/// coordinates and are always mirrored into the board's occupancy while the
/// piece is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub orientation: Orientation,
    pub cells: PieceCells,
}
