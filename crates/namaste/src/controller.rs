//! Event loop driving the terminal UI.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, Instant, sleep};
use tracing::{debug, info, instrument};

use crate::app::App;
use crate::input::map_key;
use crate::ui;

/// How long to wait for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the UI until the user quits.
///
/// The caller owns terminal setup and teardown.
#[instrument(skip(app, terminal))]
pub async fn run<B: Backend>(app: &mut App, terminal: &mut Terminal<B>) -> anyhow::Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    info!("Starting event loop");
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind != KeyEventKind::Release {
                match map_key(app, key) {
                    Some(action) => app.dispatch(action),
                    None => debug!(code = ?key.code, "Unmapped key"),
                }
            }
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;

        sleep(Duration::from_millis(10)).await;
    }

    info!("Event loop finished");
    Ok(())
}
