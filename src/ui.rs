#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Screen};
use crate::game::TOP_SCORES_SHOWN;

pub fn render(f: &mut Frame, app: &App) {
    // Each cell is 2 characters wide and 1 tall to look roughly square
    let cell_width = 2u16;
    let board_width = app.game.board().cols() as u16 * cell_width + 2; // +2 for borders
    let board_height = app.game.board().rows() as u16 + 2; // +2 for borders
    let min_info_width = 20u16;
    let min_total_width = board_width + min_info_width;
    let min_total_height = board_height + 5; // title and borders

    // Check if the terminal is too small to render the game properly
    if f.area().width < min_total_width || f.area().height < min_total_height {
        let warning_text = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Gridfall - Paused"),
        );

        let warning_area = centered_rect(50, 30, f.area());
        f.render_widget(warning_text, warning_area);
        return;
    }

    let available_width = f.area().width;
    let board_percentage = if available_width > min_total_width {
        (f64::from(board_width) / f64::from(available_width) * 100.0) as u16
    } else {
        70
    };

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(board_percentage),
            Constraint::Percentage(100 - board_percentage),
        ])
        .split(f.area());

    let game_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title
            Constraint::Fill(1),              // Flexible spacing above the board
            Constraint::Length(board_height), // Game board (fixed height)
            Constraint::Length(1),            // Bottom border
        ])
        .split(main_layout[0]);

    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(6), // Score block
            Constraint::Length(6), // High scores
            Constraint::Min(5),    // Controls
            Constraint::Length(1), // Bottom border
        ])
        .split(main_layout[1]);

    let title = Paragraph::new("GRIDFALL")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, game_layout[0]);

    render_game_board(f, app, game_layout[2]);

    let info_title = Paragraph::new("INFO")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info_title, info_layout[0]);

    let score = app.game.score();
    let stats = format!(
        "Score: {}\nLines: {}\nGoal:  {}",
        score.score(),
        score.lines(),
        app.game.goal(),
    );
    let stats_widget = Paragraph::new(stats)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: true });
    f.render_widget(stats_widget, info_layout[1]);

    f.render_widget(top_scores_widget(app), info_layout[2]);

    let controls = Paragraph::new(
        "Controls:\n\
        ←/a →/d: Move\n\
        ↓/s: Soft drop\n\
        ↑/j/Space: Rotate CW\n\
        k: Rotate CCW\n\
        q: Quit\n\
        ",
    )
    .block(Block::default().borders(Borders::TOP))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, info_layout[3]);

    // End-of-session screens draw over the frozen board
    match app.screen {
        Screen::Playing => {}
        Screen::NameEntry => render_name_entry(f, app),
        Screen::Summary => render_summary(f, app),
    }
}

fn render_game_board(f: &mut Frame, app: &App, area: Rect) {
    let cell_width = 2u16;
    let inner_area = Block::default().borders(Borders::ALL).inner(area);

    f.render_widget(Block::default().borders(Borders::ALL), area);

    let board = app.game.board();
    for (row, cols) in board.grid().iter().enumerate() {
        for (col, cell) in cols.iter().enumerate() {
            let Some(kind) = cell else { continue };

            let block_x = inner_area.left() + col as u16 * cell_width;
            let block_y = inner_area.top() + row as u16;
            if block_x >= inner_area.right() || block_y >= inner_area.bottom() {
                continue;
            }

            let color = kind.color();
            if let Some(cell) = f.buffer_mut().cell_mut((block_x, block_y)) {
                cell.set_symbol("█");
                cell.set_fg(color);
                cell.set_bg(Color::Black);
            }
            // Make the block two cells wide for better proportions
            if let Some(cell) = f.buffer_mut().cell_mut((block_x + 1, block_y)) {
                cell.set_symbol("█");
                cell.set_fg(color);
                cell.set_bg(Color::Black);
            }
        }
    }

    if app.game.is_finished() {
        let (text, color) = if app.game.is_won() {
            ("YOU WIN", Color::Green)
        } else {
            ("GAME OVER", Color::Red)
        };
        let overlay = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let overlay_area = Rect {
            x: inner_area.x,
            y: inner_area.y + inner_area.height / 2,
            width: inner_area.width,
            height: 1,
        };
        f.render_widget(overlay, overlay_area);
    }
}

fn render_name_entry(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 25, f.area());
    f.render_widget(Clear, area);

    let outcome = if app.game.is_won() { "You win!" } else { "You lose!" };
    let text = format!(
        "{outcome} Total points: {}\n\nPlayer? (3 chars): {}_\n\nEnter: save   Esc: skip",
        app.game.score().score(),
        app.name_input,
    );
    let prompt = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Session over"));
    f.render_widget(prompt, area);
}

fn render_summary(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 40, f.area());
    f.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4), Constraint::Length(2)])
        .split(area.inner(Margin::new(1, 1)));

    f.render_widget(Block::default().borders(Borders::ALL).title("Scores"), area);

    let headline = Paragraph::new(format!("Final score: {}", app.game.score().score()))
        .alignment(Alignment::Center);
    f.render_widget(headline, layout[0]);

    f.render_widget(top_scores_widget(app), layout[1]);

    let prompt = Paragraph::new("Press 'y' to restart, 'q' to quit")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(prompt, layout[2]);
}

fn top_scores_widget(app: &App) -> Paragraph<'static> {
    let mut lines = format!("Top {TOP_SCORES_SHOWN} scores:\n");
    for (rank, entry) in app.scores.top(TOP_SCORES_SHOWN).iter().enumerate() {
        lines.push_str(&format!(" {}  {}  {}\n", rank + 1, entry.name, entry.points));
    }
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: true })
}

/// Helper function to create a centered rect using up certain percentage of the available rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
