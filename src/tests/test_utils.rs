use crate::board::Board;
use crate::engine::Game;
use crate::game::{BOARD_COLS, BOARD_ROWS, LINE_GOAL};
use crate::shapes::ShapeKind;

/// A game on the default-size board with the default goal and no piece yet.
#[must_use]
pub fn default_game() -> Game {
    Game::new(BOARD_ROWS, BOARD_COLS, LINE_GOAL)
}

/// Fill an entire row of the board.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn fill_row(board: &mut Board, row: usize, kind: ShapeKind) {
    for col in 0..board.cols() {
        board.set_cell(row as i16, col as i16, Some(kind));
    }
}

/// Fill a row except for the listed gap columns.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn fill_row_except(board: &mut Board, row: usize, gaps: &[usize], kind: ShapeKind) {
    for col in 0..board.cols() {
        if !gaps.contains(&col) {
            board.set_cell(row as i16, col as i16, Some(kind));
        }
    }
}

/// Number of occupied cells on the whole board.
#[must_use]
pub fn occupied_count(board: &Board) -> usize {
    board
        .grid()
        .iter()
        .flat_map(|row| row.iter())
        .filter(|cell| cell.is_some())
        .count()
}
