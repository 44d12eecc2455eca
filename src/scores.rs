#![warn(clippy::all, clippy::pedantic)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::game::PLAYER_NAME_LEN;

// Fallback scores path when no data directory is available
const SCORES_FILE_PATH: &str = "gridfall_scores.toml";

/// One finished session: who played and what they scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub points: u32,
}

/// The persistent high-score table, kept sorted from highest to lowest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTable {
    #[serde(default)]
    pub entries: Vec<ScoreEntry>,
}

impl ScoreTable {
    /// Load the table from disk. A missing file is an empty table, not an
    /// error — the file appears on first save.
    pub fn load(path: &Path) -> Result<Self, ScoresError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let mut table: Self = toml::from_str(&contents)?;
        table.sort();
        Ok(table)
    }

    pub fn save(&self, path: &Path) -> Result<(), ScoresError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Add a finished session and keep the table sorted.
    pub fn record(&mut self, name: &str, points: u32) {
        self.entries.push(ScoreEntry {
            name: name.to_string(),
            points,
        });
        self.sort();
    }

    /// The best `count` entries, fewer if the table is shorter.
    #[must_use]
    pub fn top(&self, count: usize) -> &[ScoreEntry] {
        &self.entries[..self.entries.len().min(count)]
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.points.cmp(&a.points));
    }
}

/// Force a raw player name into the fixed alias width: uppercased, padded
/// with `*` when short, truncated when long.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let mut name: String = raw
        .trim()
        .chars()
        .take(PLAYER_NAME_LEN)
        .collect::<String>()
        .to_uppercase();
    while name.chars().count() < PLAYER_NAME_LEN {
        name.push('*');
    }
    name
}

/// Where the score table lives. An environment variable overrides the
/// per-user data directory, which falls back to the working directory.
#[must_use]
pub fn scores_file_path() -> PathBuf {
    if let Ok(path) = std::env::var("GRIDFALL_SCORES") {
        return PathBuf::from(path);
    }
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("gridfall").join("scores.toml")
    } else {
        PathBuf::from(SCORES_FILE_PATH)
    }
}

// Custom error type for score-table persistence
#[derive(Debug)]
pub enum ScoresError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl From<io::Error> for ScoresError {
    fn from(err: io::Error) -> Self {
        ScoresError::Io(err)
    }
}

impl From<toml::de::Error> for ScoresError {
    fn from(err: toml::de::Error) -> Self {
        ScoresError::Parse(err)
    }
}

impl From<toml::ser::Error> for ScoresError {
    fn from(err: toml::ser::Error) -> Self {
        ScoresError::Serialize(err)
    }
}
