#![warn(clippy::all, clippy::pedantic)]

use std::error;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use log::{error, info};

use crate::config::Config;
use crate::engine::Game;
use crate::game::PLAYER_NAME_LEN;
use crate::input;
use crate::scores::{self, ScoreTable};
use crate::scoring;

pub type AppResult<T> = std::result::Result<T, Box<dyn error::Error>>;

/// Which screen currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Engine commands flow; gravity runs.
    Playing,
    /// The session ended; the player is typing their alias.
    NameEntry,
    /// Final score and the top of the table; restart or quit from here.
    Summary,
}

pub struct App {
    pub game: Game,
    pub config: Config,
    pub scores: ScoreTable,
    pub scores_path: PathBuf,
    pub screen: Screen,
    pub name_input: String,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let scores_path = scores::scores_file_path();
        let scores = ScoreTable::load(&scores_path).unwrap_or_else(|err| {
            error!("failed to load score table: {err:?}");
            ScoreTable::default()
        });

        let mut game = Game::new(
            config.board.rows,
            config.board.cols,
            config.rules.line_goal,
        );
        game.spawn();

        Self {
            game,
            config,
            scores,
            scores_path,
            screen: Screen::Playing,
            name_input: String::new(),
            should_quit: false,
        }
    }

    /// Start a fresh session on the same configuration; the score table and
    /// its path survive the reset.
    pub fn reset(&mut self) {
        info!("restarting session");
        let mut game = Game::new(
            self.config.board.rows,
            self.config.board.cols,
            self.config.rules.line_goal,
        );
        game.spawn();
        self.game = game;
        self.screen = Screen::Playing;
        self.name_input.clear();
    }

    /// Seconds between gravity steps at the current line total.
    #[must_use]
    pub fn step_delay_secs(&self) -> f32 {
        scoring::step_delay_secs(self.game.score().lines(), self.game.goal())
    }

    /// One gravity step, when the play screen is up. A finished session
    /// hands the keyboard over to name entry.
    pub fn on_gravity(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }
        self.game.tick();
        if self.game.is_finished() {
            info!(
                "session over (won: {}), final score {}",
                self.game.is_won(),
                self.game.score().score()
            );
            self.screen = Screen::NameEntry;
            self.name_input.clear();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Playing => self.handle_play_key(key),
            Screen::NameEntry => self.handle_name_key(key),
            Screen::Summary => self.handle_summary_key(key),
        }
    }

    fn handle_play_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }
        if let Some(command) = input::map_game_key(key) {
            self.game.apply(command);
        }
    }

    fn handle_name_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
                if self.name_input.chars().count() < PLAYER_NAME_LEN {
                    self.name_input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Enter => {
                let name = scores::normalize_name(&self.name_input);
                self.scores.record(&name, self.game.score().score());
                if let Err(err) = self.scores.save(&self.scores_path) {
                    error!("failed to save score table: {err:?}");
                }
                self.screen = Screen::Summary;
            }
            KeyCode::Esc => {
                // Skip recording this session
                self.screen = Screen::Summary;
            }
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') => self.reset(),
            KeyCode::Char('n' | 'q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}
