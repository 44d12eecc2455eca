#![warn(clippy::all, clippy::pedantic)]

use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;

use crate::engine::Command;

// How long the listener blocks waiting for a terminal event before it
// re-checks whether the consumer is still around
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Start the input listener thread. It is the only reader of terminal
/// events; everything it sees is forwarded over one bounded channel, so the
/// game loop stays the single serialized caller of engine mutations.
pub fn spawn_input_thread() -> Receiver<KeyEvent> {
    let (sender, receiver) = bounded(64);

    thread::spawn(move || run_input_thread(&sender));

    receiver
}

fn run_input_thread(sender: &Sender<KeyEvent>) {
    loop {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {
                if let Ok(Event::Key(key)) = event::read() {
                    // Key repeats arrive as fresh press events; releases are
                    // noise for a game with no held-key semantics
                    if key.kind == KeyEventKind::Press && sender.send(key).is_err() {
                        // Consumer hung up, the session is over
                        return;
                    }
                }
            }
            Ok(false) => {}
            Err(err) => {
                debug!("input listener stopping: {err}");
                return;
            }
        }
    }
}

/// Map a pressed key to an engine command. Arrow keys and the classic
/// letter bindings both work; anything else is not a game command.
#[must_use]
pub fn map_game_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('j' | ' ') => Some(Command::RotateCw),
        KeyCode::Char('k') => Some(Command::RotateCcw),
        _ => None,
    }
}
