#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use crossterm::event::KeyEvent;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{prelude::*, Terminal};

use gridfall::app::{App, AppResult, Screen};
use gridfall::config::{self, Config};
use gridfall::input::spawn_input_thread;
use gridfall::shapes::validate_catalog;
use gridfall::{ui, Time};

fn main() -> AppResult<()> {
    // Create log file and redirect stderr to it; the terminal owns stdout
    let log_path = "gridfall.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .expect("Failed to create log file");

    let stderr_handle = std::io::stderr();
    let stderr_fd = stderr_handle.as_raw_fd();
    let log_file_fd = log_file.as_raw_fd();

    // Safety: We're redirecting stderr to our log file using standard POSIX operations
    unsafe {
        libc::dup2(log_file_fd, stderr_fd);
    }

    // Configure the logger to use stderr (which is now redirected to our file)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting Gridfall");

    // A broken shape catalog is a programmer error; refuse to start
    validate_catalog().context("shape catalog validation failed")?;

    // Load configuration, falling back to defaults when the file is bad
    let config = match config::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(err) => {
            error!("Failed to load configuration: {err:?}");
            Config::default()
        }
    };

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let input = spawn_input_thread();
    let app = App::new(config);
    let res = run_app(&mut terminal, app, &input);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    input: &Receiver<KeyEvent>,
) -> AppResult<()> {
    let render_rate = Duration::from_millis(33); // ~30 FPS
    let mut last_render = Instant::now();
    let mut time = Time::new();
    let mut gravity_accum = 0.0f32;

    loop {
        if last_render.elapsed() >= render_rate {
            terminal.draw(|f| ui::render(f, &app))?;
            last_render = Instant::now();
        }

        // The listener thread is the only event reader; this loop is the
        // only consumer, so engine calls stay serialized
        match input.recv_timeout(Duration::from_millis(5)) {
            Ok(key) => app.handle_key(key),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }

        if app.should_quit {
            return Ok(());
        }

        time.update();
        if app.screen == Screen::Playing {
            gravity_accum += time.delta_seconds();
            if gravity_accum >= app.step_delay_secs() {
                gravity_accum = 0.0;
                app.on_gravity();
            }
        } else {
            gravity_accum = 0.0;
        }
    }
}
