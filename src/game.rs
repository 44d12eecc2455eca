#![warn(clippy::all, clippy::pedantic)]

// Default board dimensions (rows x columns, row 0 at the top)
pub const BOARD_ROWS: usize = 20;
pub const BOARD_COLS: usize = 10;

// Cleared lines needed to win a session
pub const LINE_GOAL: u32 = 50;

// Points per settlement, indexed by how many rows that settlement cleared
pub const POINTS_SINGLE: u32 = 40;
pub const POINTS_DOUBLE: u32 = 100;
pub const POINTS_TRIPLE: u32 = 300;
pub const POINTS_QUAD: u32 = 1200;

// Gravity pacing: the step delay shrinks linearly with cleared lines,
// from INITIAL_STEP_SECS at zero lines down to FINAL_STEP_SECS at the goal
pub const INITIAL_STEP_SECS: f32 = 1.0;
pub const FINAL_STEP_SECS: f32 = 0.2;

// Widest span any catalog layout occupies, in rows and in columns.
// Configured boards must be at least this big in both directions.
pub const SHAPE_SPAN: usize = 4;

// High-score table display
pub const TOP_SCORES_SHOWN: usize = 3;
pub const PLAYER_NAME_LEN: usize = 3;
