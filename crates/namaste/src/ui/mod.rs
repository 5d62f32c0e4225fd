//! Stateless rendering of [`App`] into a ratatui frame.

mod board;
mod modal;
mod screens;

pub use board::{BoardView, player_color, render_board};
pub use modal::render_modal;
pub use screens::{SPLASH_TEXT, render_game, render_splash, render_welcome, series_progress};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Screen};
use crate::effects::Celebration;

/// Draws the whole UI for the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.screen() {
        Screen::Splash => render_splash(frame, area, app),
        Screen::Welcome => render_welcome(frame, area, app),
        Screen::Game => {
            render_game(frame, area, app);
            if let Some(celebration) = app.celebration() {
                render_celebration(frame, area, celebration);
            }
            if let Some(modal) = app.modal() {
                render_modal(frame, area, modal);
            }
        }
    }
}

/// Writes celebration glyphs directly into the frame buffer.
fn render_celebration(frame: &mut Frame, area: Rect, celebration: &Celebration) {
    let buffer = frame.buffer_mut();
    for particle in celebration.particles(area.width, area.height) {
        let width = particle.glyph.width() as u16;
        // Wide glyphs need both columns on screen.
        if particle.x + width > area.width {
            continue;
        }
        buffer.set_string(
            area.x + particle.x,
            area.y + particle.y,
            particle.glyph,
            Style::default(),
        );
    }
}

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_is_centred() {
        let rect = center_rect(Rect::new(0, 0, 80, 24), 40, 10);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }
}
