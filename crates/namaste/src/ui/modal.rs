//! Dialogs drawn over the game screen.

use namaste_tictactoe::{Player, SeriesSummary};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{board::player_color, center_rect};
use crate::app::{GameResultModal, Modal};

/// Renders `modal` centred in `area`.
pub fn render_modal(frame: &mut Frame, area: Rect, modal: &Modal) {
    let (title, lines) = match modal {
        Modal::StartingPlayer {
            game_number,
            max_games,
        } => starting_player(*game_number, *max_games),
        Modal::GameResult(result) => game_result(result),
        Modal::SeriesWinner(summary) => series_winner(summary),
    };

    let popup = center_rect(area, 44, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(title),
        );
    frame.render_widget(paragraph, popup);
}

fn hint(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

fn starting_player(game_number: u32, max_games: u32) -> (&'static str, Vec<Line<'static>>) {
    let choice = |player: Player| {
        Span::styled(
            format!(" [{}] Player {} ", player.to_string().to_lowercase(), player),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        )
    };
    (
        " Who Starts? ",
        vec![
            Line::from(format!("Game {} of {}", game_number, max_games)),
            Line::default(),
            Line::from(vec![choice(Player::X), Span::raw("  "), choice(Player::O)]),
        ],
    )
}

fn game_result(result: &GameResultModal) -> (&'static str, Vec<Line<'static>>) {
    let headline_style = match result.outcome.winner() {
        Some(player) => Style::default()
            .fg(player_color(player))
            .add_modifier(Modifier::BOLD),
        None => Style::default().add_modifier(Modifier::BOLD),
    };
    (
        " Game Over ",
        vec![
            Line::from(result.icon()),
            Line::from(Span::styled(result.title(), headline_style)),
            Line::from(result.details()),
            Line::default(),
            hint(&format!("[Enter] {}", result.continue_label())),
        ],
    )
}

fn series_winner(summary: &SeriesSummary) -> (&'static str, Vec<Line<'static>>) {
    (
        " Series Results ",
        vec![
            Line::from("🏆"),
            Line::from(Span::styled(
                summary.verdict().to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Final Score: {}", summary.score())),
            Line::default(),
            hint("[Enter] New Series   [Esc] Home"),
        ],
    )
}
