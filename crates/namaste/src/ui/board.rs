//! Tic-tac-toe board rendering.

use namaste_tictactoe::{Board, Player, Position, Square, WinningLine};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::center_rect;

/// Colour used for a player's marks and turn banner.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::LightRed,
        Player::O => Color::Cyan,
    }
}

/// What the board widget needs to know.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// Squares to draw.
    pub board: &'a Board,
    /// Highlighted square, when the board takes input.
    pub cursor: Option<Position>,
    /// Completed line to highlight.
    pub winning_line: Option<WinningLine>,
}

/// Renders the game board with cursor and winning-line highlights.
pub fn render_board(frame: &mut Frame, area: Rect, view: BoardView<'_>) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let start = row * 3;
        let positions = [start, start + 1, start + 2].map(|i| Position::ALL[i]);
        render_row(frame, chunk, view, positions);
    }
    render_separator(frame, rows[1]);
    render_separator(frame, rows[3]);
}

fn render_row(frame: &mut Frame, area: Rect, view: BoardView<'_>, positions: [Position; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    render_cell(frame, cols[0], view, positions[0]);
    render_vertical_sep(frame, cols[1]);
    render_cell(frame, cols[2], view, positions[1]);
    render_vertical_sep(frame, cols[3]);
    render_cell(frame, cols[4], view, positions[2]);
}

fn render_cell(frame: &mut Frame, area: Rect, view: BoardView<'_>, pos: Position) {
    let (symbol, base_style) = match view.board.get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            format!(" {} ", player),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let winning = view.winning_line.is_some_and(|line| line.contains(pos));
    let style = if winning {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else if view.cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically centre the mark inside the three-line cell.
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
        Line::default(),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
