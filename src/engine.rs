#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow potential wrapping when casting dimensions as boards stay well within i16 range
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation
)]

use log::{debug, info};

use crate::board::Board;
use crate::piece::{ActivePiece, PieceCells};
use crate::scoring::ScoreState;
use crate::shapes::{self, Orientation, ShapeKind, Spin};

/// A discrete player command, already mapped from raw input by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
}

/// What one gravity tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A fresh piece entered play.
    Spawned,
    /// The active piece descended one row.
    Descended,
    /// The descent was rejected: the piece settled and its clears were
    /// scored. `cleared` is the number of rows removed by this settlement.
    Settled { cleared: usize },
    /// The session is already won or lost; nothing moved.
    Finished,
}

/// Collision validator: can `candidate` legally occupy the board, treating
/// `excluding` (the piece's own current cells) as empty? Rejects the side
/// walls, the floor, and occupied cells. There is deliberately no ceiling
/// test — rows above the board are only ever reached transiently and the
/// board reads them as empty. Never mutates the board.
#[must_use]
pub fn can_occupy(board: &Board, candidate: &PieceCells, excluding: &PieceCells) -> bool {
    let cols = board.cols() as i16;
    let rows = board.rows() as i16;
    candidate.iter().all(|(row, col)| {
        col >= 0
            && col < cols
            && row < rows
            && (!board.occupied(row, col) || excluding.contains(row, col))
    })
}

/// The engine instance: owns the board, the single piece in flight and the
/// session totals. Every mutation goes through its methods, and callers
/// must serialize them — there is exactly one logical actor (the game
/// loop) and no suspension point inside any operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    active: Option<ActivePiece>,
    score: ScoreState,
    goal: u32,
    lost: bool,
    won: bool,
}

impl Game {
    #[must_use]
    pub fn new(rows: usize, cols: usize, goal: u32) -> Self {
        Self {
            board: Board::new(rows, cols),
            active: None,
            score: ScoreState::default(),
            goal,
            lost: false,
            won: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for painting test positions.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    #[must_use]
    pub fn goal(&self) -> u32 {
        self.goal
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.lost || self.won
    }

    /// Run a player command against the active piece. Rejections are normal
    /// boolean outcomes, not errors; a rejected soft drop in particular does
    /// not settle the piece — only the gravity tick does that.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.is_finished() {
            return false;
        }
        match command {
            Command::MoveLeft => self.try_move(0, -1),
            Command::MoveRight => self.try_move(0, 1),
            Command::SoftDrop => self.try_move(1, 0),
            Command::RotateCw => self.try_rotate(Spin::Clockwise),
            Command::RotateCcw => self.try_rotate(Spin::CounterClockwise),
        }
    }

    /// One gravity step. Drives the whole settle / clear / respawn cycle:
    /// a rejected descent settles the piece and scores its clears, and the
    /// next tick brings in the successor (or reports the finished session).
    pub fn tick(&mut self) -> Tick {
        if self.is_finished() {
            return Tick::Finished;
        }
        if self.active.is_some() {
            if self.try_move(1, 0) {
                return Tick::Descended;
            }
            // Settlement: the piece's cells are already board occupancy, so
            // deactivating it is the whole merge.
            self.active = None;
            let cleared = self.clear_full_rows();
            if cleared > 0 {
                info!(
                    "settled and cleared {cleared} row(s), {} total",
                    self.score.lines()
                );
            }
            if self.score.lines() >= self.goal {
                info!("line goal {} reached", self.goal);
                self.won = true;
            }
            return Tick::Settled { cleared };
        }
        self.spawn();
        if self.lost { Tick::Finished } else { Tick::Spawned }
    }

    /// Attempt to shift the active piece by the given offsets. On success
    /// the board and piece are updated together; on rejection neither
    /// changes.
    pub fn try_move(&mut self, row_offset: i16, col_offset: i16) -> bool {
        let Some(active) = &self.active else {
            return false;
        };
        let candidate = active.cells.translated(row_offset, col_offset);
        if !can_occupy(&self.board, &candidate, &active.cells) {
            return false;
        }
        self.commit(candidate, None);
        true
    }

    /// Attempt a quarter-turn. The new orientation's base layout is fetched
    /// fresh from the catalog and anchored at the current footprint's
    /// top-left corner — not rotated about a center, so the piece can shift
    /// visibly. A candidate that hits a wall, the floor or the stack is
    /// rejected wholesale; there are no wall kicks.
    pub fn try_rotate(&mut self, spin: Spin) -> bool {
        let Some(active) = &self.active else {
            return false;
        };
        let next = active.orientation.spun(spin);
        let (pivot_row, pivot_col) = active.cells.pivot();
        let candidate =
            PieceCells::from_layout(shapes::layout(active.kind, next), pivot_row, pivot_col);
        if !can_occupy(&self.board, &candidate, &active.cells) {
            return false;
        }
        self.commit(candidate, Some(next));
        true
    }

    /// Spawn a random piece at a random horizontal offset. The cells are
    /// written into the board unconditionally; if any of them was already
    /// occupied the board is full at the spawn point and the session is
    /// lost. Returns whether the spawn area was free.
    pub fn spawn(&mut self) -> bool {
        let kind = ShapeKind::random();
        let orientation = Orientation::random();
        let layout = shapes::layout(kind, orientation);
        let max_offset = self.board.cols() as i16 - shapes::layout_cols(layout);
        let col_offset = fastrand::i16(0..=max_offset);
        self.spawn_piece(kind, orientation, col_offset)
    }

    /// Deterministic spawn used by `spawn` and by tests that need a known
    /// piece in a known place.
    pub fn spawn_piece(
        &mut self,
        kind: ShapeKind,
        orientation: Orientation,
        col_offset: i16,
    ) -> bool {
        debug_assert!(self.active.is_none(), "one piece in flight at a time");
        let cells = PieceCells::from_layout(shapes::layout(kind, orientation), 0, col_offset);
        let free = cells.iter().all(|(row, col)| !self.board.occupied(row, col));
        for (row, col) in cells.iter() {
            self.board.set_cell(row, col, Some(kind));
        }
        debug!("spawned {kind:?}/{orientation:?} at column {col_offset}");
        self.active = Some(ActivePiece {
            kind,
            orientation,
            cells,
        });
        if !free {
            info!("spawn blocked, session lost");
            self.lost = true;
        }
        free
    }

    /// Remove every full row, bottom-up. After a collapse the same row
    /// index is examined again before the scan moves up, because the rows
    /// above just shifted down into it — stacked full rows all clear in one
    /// call. Scores the clears and returns how many rows were removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = self.board.rows();
        while row > 0 {
            if self.board.is_row_full(row - 1) {
                self.board.collapse_row(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }
        self.score.record_clears(cleared);
        cleared
    }

    fn commit(&mut self, cells: PieceCells, orientation: Option<Orientation>) {
        let active = self.active.as_mut().expect("commit without an active piece");
        for (row, col) in active.cells.iter() {
            self.board.set_cell(row, col, None);
        }
        for (row, col) in cells.iter() {
            self.board.set_cell(row, col, Some(active.kind));
        }
        active.cells = cells;
        if let Some(orientation) = orientation {
            active.orientation = orientation;
        }
    }
}
