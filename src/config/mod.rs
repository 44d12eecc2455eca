pub mod loader;

use serde::{Deserialize, Serialize};

use crate::game::{BOARD_COLS, BOARD_ROWS, LINE_GOAL, SHAPE_SPAN};

pub use loader::{load_config_from_file, save_config_to_file, ConfigError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

// Grid dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
        }
    }
}

// Session rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub line_goal: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            line_goal: LINE_GOAL,
        }
    }
}

impl Config {
    /// Reject configurations the engine cannot play on. The board must fit
    /// the widest and tallest catalog layout, and a zero goal would win the
    /// session before the first piece.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < SHAPE_SPAN || self.board.cols < SHAPE_SPAN {
            return Err(ConfigError::Invalid(format!(
                "board must be at least {SHAPE_SPAN}x{SHAPE_SPAN}, got {}x{}",
                self.board.rows, self.board.cols
            )));
        }
        if self.board.rows > i16::MAX as usize || self.board.cols > i16::MAX as usize {
            return Err(ConfigError::Invalid(format!(
                "board dimensions {}x{} are out of range",
                self.board.rows, self.board.cols
            )));
        }
        if self.rules.line_goal == 0 {
            return Err(ConfigError::Invalid(
                "line goal must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
