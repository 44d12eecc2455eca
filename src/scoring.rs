#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

use crate::game::{
    FINAL_STEP_SECS, INITIAL_STEP_SECS, POINTS_DOUBLE, POINTS_QUAD, POINTS_SINGLE, POINTS_TRIPLE,
};

/// Points awarded for clearing `cleared` rows in a single settlement.
/// Clearing more rows at once pays disproportionately more.
#[must_use]
pub fn points_for(cleared: usize) -> u32 {
    match cleared {
        0 => 0,
        1 => POINTS_SINGLE,
        2 => POINTS_DOUBLE,
        3 => POINTS_TRIPLE,
        _ => POINTS_QUAD,
    }
}

/// Cumulative session totals. Both counters only ever grow; a new session
/// starts from a fresh `ScoreState`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    score: u32,
    lines: u32,
}

impl ScoreState {
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Record one settlement's clears: bump the line total and add the
    /// formula's points for that clear count.
    pub fn record_clears(&mut self, cleared: usize) {
        self.lines += u32::try_from(cleared).unwrap_or(u32::MAX);
        self.score += points_for(cleared);
    }
}

/// Seconds between gravity steps: a linear ramp from the initial delay down
/// to the final delay as the line total approaches the goal, clamped there.
#[must_use]
pub fn step_delay_secs(lines: u32, goal: u32) -> f32 {
    if goal == 0 {
        return FINAL_STEP_SECS;
    }
    let per_line = (INITIAL_STEP_SECS - FINAL_STEP_SECS) / goal as f32;
    (INITIAL_STEP_SECS - lines as f32 * per_line).max(FINAL_STEP_SECS)
}
