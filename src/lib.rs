pub mod app;
pub mod board;
pub mod config;
pub mod engine;
pub mod game;
pub mod input;
pub mod piece;
pub mod scores;
pub mod scoring;
pub mod shapes;
pub mod ui;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

/// Frame delta tracker for the main loop's gravity accumulator.
#[derive(Debug, Clone)]
pub struct Time {
    delta: Duration,
    last_update: Instant,
}

impl Time {
    #[must_use]
    pub fn new() -> Self {
        Self {
            delta: Duration::default(),
            last_update: Instant::now(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_update);
        self.last_update = now;
    }

    #[must_use]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
