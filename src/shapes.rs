#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting the shape span since it is a small constant
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use anyhow::{bail, Result};

use crate::game::SHAPE_SPAN;

/// One row of a layout: a relative row offset and the relative columns the
/// piece occupies on that row. Layouts are sparse on purpose — movement and
/// rotation only ever add offsets to the listed rows and columns, so rows a
/// piece does not occupy are simply absent.
pub type Layout = &'static [(i16, &'static [i16])];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    #[must_use]
    pub fn random() -> Self {
        match fastrand::u8(0..7) {
            0 => ShapeKind::I,
            1 => ShapeKind::J,
            2 => ShapeKind::L,
            3 => ShapeKind::O,
            4 => ShapeKind::S,
            5 => ShapeKind::T,
            _ => ShapeKind::Z,
        }
    }

    #[must_use]
    pub fn color(self) -> ratatui::style::Color {
        match self {
            ShapeKind::I => ratatui::style::Color::Cyan,
            ShapeKind::J => ratatui::style::Color::Blue,
            ShapeKind::L => ratatui::style::Color::LightYellow,
            ShapeKind::O => ratatui::style::Color::Yellow,
            ShapeKind::S => ratatui::style::Color::Green,
            ShapeKind::T => ratatui::style::Color::Magenta,
            ShapeKind::Z => ratatui::style::Color::Red,
        }
    }
}

/// One discrete rotational state of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

/// Rotation direction requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    #[must_use]
    pub fn random() -> Self {
        Self::ALL[fastrand::usize(0..4)]
    }

    /// The orientation reached by spinning one quarter turn. The cycle is
    /// the same for every shape; shapes with coinciding orientations repeat
    /// layouts in the catalog instead of shortening the cycle.
    #[must_use]
    pub fn spun(self, spin: Spin) -> Self {
        match (self, spin) {
            (Orientation::North, Spin::Clockwise) | (Orientation::South, Spin::CounterClockwise) => {
                Orientation::East
            }
            (Orientation::East, Spin::Clockwise) | (Orientation::West, Spin::CounterClockwise) => {
                Orientation::South
            }
            (Orientation::South, Spin::Clockwise) | (Orientation::North, Spin::CounterClockwise) => {
                Orientation::West
            }
            (Orientation::West, Spin::Clockwise) | (Orientation::East, Spin::CounterClockwise) => {
                Orientation::North
            }
        }
    }
}

// Base layouts, normalized so every layout's minimum row and minimum column
// are 0. The pivot anchoring in the engine depends on that normalization:
// a freshly fetched layout is offset by the current footprint's top-left
// corner, so a non-zero minimum would smuggle in an extra shift.

const I_FLAT: Layout = &[(0, &[0, 1, 2, 3])];
const I_TALL: Layout = &[(0, &[0]), (1, &[0]), (2, &[0]), (3, &[0])];

const J_NORTH: Layout = &[(0, &[1]), (1, &[1]), (2, &[0, 1])];
const J_EAST: Layout = &[(0, &[0]), (1, &[0, 1, 2])];
const J_SOUTH: Layout = &[(0, &[0, 1]), (1, &[0]), (2, &[0])];
const J_WEST: Layout = &[(0, &[0, 1, 2]), (1, &[2])];

const L_NORTH: Layout = &[(0, &[0]), (1, &[0]), (2, &[0, 1])];
const L_EAST: Layout = &[(0, &[0, 1, 2]), (1, &[0])];
const L_SOUTH: Layout = &[(0, &[0, 1]), (1, &[1]), (2, &[1])];
const L_WEST: Layout = &[(0, &[2]), (1, &[0, 1, 2])];

const O_SQUARE: Layout = &[(0, &[0, 1]), (1, &[0, 1])];

const S_FLAT: Layout = &[(0, &[1, 2]), (1, &[0, 1])];
const S_TALL: Layout = &[(0, &[0]), (1, &[0, 1]), (2, &[1])];

const T_NORTH: Layout = &[(0, &[0, 1, 2]), (1, &[1])];
const T_EAST: Layout = &[(0, &[1]), (1, &[0, 1]), (2, &[1])];
const T_SOUTH: Layout = &[(0, &[1]), (1, &[0, 1, 2])];
const T_WEST: Layout = &[(0, &[0]), (1, &[0, 1]), (2, &[0])];

const Z_FLAT: Layout = &[(0, &[0, 1]), (1, &[1, 2])];
const Z_TALL: Layout = &[(0, &[1]), (1, &[0, 1]), (2, &[0])];

/// The shape catalog: fetch the sparse base layout for a shape in a given
/// orientation. A pure lookup with no failure mode — every combination is
/// present, which `validate_catalog` confirms at startup.
#[must_use]
pub fn layout(kind: ShapeKind, orientation: Orientation) -> Layout {
    use Orientation::{East, North, South, West};
    match (kind, orientation) {
        (ShapeKind::I, North | South) => I_FLAT,
        (ShapeKind::I, East | West) => I_TALL,
        (ShapeKind::J, North) => J_NORTH,
        (ShapeKind::J, East) => J_EAST,
        (ShapeKind::J, South) => J_SOUTH,
        (ShapeKind::J, West) => J_WEST,
        (ShapeKind::L, North) => L_NORTH,
        (ShapeKind::L, East) => L_EAST,
        (ShapeKind::L, South) => L_SOUTH,
        (ShapeKind::L, West) => L_WEST,
        (ShapeKind::O, _) => O_SQUARE,
        (ShapeKind::S, North | South) => S_FLAT,
        (ShapeKind::S, East | West) => S_TALL,
        (ShapeKind::T, North) => T_NORTH,
        (ShapeKind::T, East) => T_EAST,
        (ShapeKind::T, South) => T_SOUTH,
        (ShapeKind::T, West) => T_WEST,
        (ShapeKind::Z, North | South) => Z_FLAT,
        (ShapeKind::Z, East | West) => Z_TALL,
    }
}

/// Number of columns a layout spans (its width in cells).
#[must_use]
pub fn layout_cols(layout: Layout) -> i16 {
    layout
        .iter()
        .flat_map(|(_, cols)| cols.iter().copied())
        .max()
        .map_or(0, |max| max + 1)
}

/// Sanity-check every catalog entry. A malformed layout is a programmer
/// error, so this runs once at startup and aborts loudly instead of being
/// tolerated mid-game.
pub fn validate_catalog() -> Result<()> {
    let span = SHAPE_SPAN as i16;
    for kind in ShapeKind::ALL {
        for orientation in Orientation::ALL {
            let layout = layout(kind, orientation);
            if layout.is_empty() {
                bail!("catalog entry {kind:?}/{orientation:?} is empty");
            }
            if layout[0].0 != 0 {
                bail!("catalog entry {kind:?}/{orientation:?} does not start at row 0");
            }
            let min_col = layout
                .iter()
                .filter_map(|(_, cols)| cols.first().copied())
                .min();
            if min_col != Some(0) {
                bail!("catalog entry {kind:?}/{orientation:?} does not start at column 0");
            }
            let mut prev_row = None;
            for &(row, cols) in layout {
                if !(0..span).contains(&row) {
                    bail!("catalog entry {kind:?}/{orientation:?} has row {row} outside the shape span");
                }
                if prev_row.is_some_and(|prev| row <= prev) {
                    bail!("catalog entry {kind:?}/{orientation:?} has unordered rows");
                }
                prev_row = Some(row);
                if cols.is_empty() {
                    bail!("catalog entry {kind:?}/{orientation:?} has an empty row {row}");
                }
                let mut prev_col = None;
                for &col in cols {
                    if !(0..span).contains(&col) {
                        bail!(
                            "catalog entry {kind:?}/{orientation:?} has column {col} outside the shape span"
                        );
                    }
                    if prev_col.is_some_and(|prev| col <= prev) {
                        bail!("catalog entry {kind:?}/{orientation:?} has unordered columns in row {row}");
                    }
                    prev_col = Some(col);
                }
            }
        }
    }
    Ok(())
}
