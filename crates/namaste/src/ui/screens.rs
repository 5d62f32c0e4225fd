//! Splash, welcome and game screens.

use namaste_tictactoe::{GameEngine, GameMode, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::{
    board::{BoardView, player_color, render_board},
    center_rect,
};
use crate::app::{App, MenuOption};

/// Greeting shown while the splash timer runs.
pub const SPLASH_TEXT: &str = "Namaste 🙏";

/// Draws the splash greeting, dimming as its timer runs out.
pub fn render_splash(frame: &mut Frame, area: Rect, app: &App) {
    let total = *app.config().splash_millis();
    let remaining = app.splash_remaining().as_millis();
    // Fade over the last third.
    let fading = total > 0 && remaining * 3 < u128::from(total);

    let mut style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
    if fading {
        style = style.add_modifier(Modifier::DIM);
    }

    let text = vec![
        Line::from(Span::styled(SPLASH_TEXT, style)),
        Line::default(),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let popup = center_rect(area, 30, 3);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), popup);
}

/// Draws the mode selection menu.
pub fn render_welcome(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let best_of = *app.config().best_of();
    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, option)| ListItem::new(format!("{}. {}", i + 1, option.label(best_of))))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Choose a Mode "))
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(Some(app.menu_index()));
    let menu_area = center_rect(chunks[1], 36, MenuOption::all().len() as u16 + 2);
    frame.render_stateful_widget(list, menu_area, &mut state);

    render_help(frame, chunks[2], "↑/↓ select | Enter start | 1-3 shortcut | q quit");
}

/// Text of the series progress line, if a series is being played.
pub fn series_progress(engine: &GameEngine) -> Option<String> {
    if engine.mode() != GameMode::Series {
        return None;
    }
    match (engine.series(), engine.completed_series()) {
        (Some(series), _) => {
            let score = series.score();
            Some(format!(
                "Score X: {} O: {} | Game {} of {}",
                score.get(Player::X),
                score.get(Player::O),
                series.current_game(),
                series.max_games()
            ))
        }
        (None, Some(summary)) => Some(format!(
            "Final Score X: {} O: {} | {}",
            summary.score().get(Player::X),
            summary.score().get(Player::O),
            summary.verdict()
        )),
        (None, None) => None,
    }
}

/// Draws the header, board, status line and key help.
pub fn render_game(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(11),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(app.mode_label())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Tic Tac Toe "));
    frame.render_widget(header, chunks[0]);

    if let Some(progress) = series_progress(engine) {
        let line = Paragraph::new(progress)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(line, chunks[1]);
    }

    render_board(
        frame,
        chunks[2],
        BoardView {
            board: engine.board(),
            cursor: (engine.is_active() && app.modal().is_none()).then_some(app.cursor()),
            winning_line: engine.winning_line(),
        },
    );

    let status_style = if engine.is_active() {
        Style::default()
            .fg(player_color(engine.current_player()))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message().to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    render_help(
        frame,
        chunks[4],
        "1-9/arrows+Enter play | r reset | n new series | Esc menu | q quit",
    );
}

fn render_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_progress_line_in_single_mode() {
        let mut engine = GameEngine::new();
        engine.start_single_game();
        assert_eq!(series_progress(&engine), None);
    }

    #[test]
    fn test_progress_line_tracks_score() {
        let mut engine = GameEngine::new();
        engine.start_new_series();
        assert_eq!(
            series_progress(&engine).as_deref(),
            Some("Score X: 0 O: 0 | Game 1 of 5")
        );

        engine.set_starting_player(Player::O).expect("empty board");
        for i in [0, 3, 1, 4, 2] {
            engine.place_mark(i);
        }
        assert_eq!(
            series_progress(&engine).as_deref(),
            Some("Score X: 0 O: 1 | Game 1 of 5")
        );
    }

    #[test]
    fn test_progress_line_after_series() {
        let mut engine = GameEngine::with_best_of(1);
        engine.start_new_series();
        engine.set_starting_player(Player::X).expect("empty board");
        for i in [0, 3, 1, 4, 2] {
            engine.place_mark(i);
        }
        assert_eq!(
            series_progress(&engine).as_deref(),
            Some("Final Score X: 1 O: 0 | Player X Wins the Series!")
        );
    }
}
