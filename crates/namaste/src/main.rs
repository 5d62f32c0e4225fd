//! Namaste - terminal tic-tac-toe.

#![warn(missing_docs)]

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use namaste::{App, AppAction, AppConfig, Cli, Command};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let config = cli.apply_overrides(config);
    config.validate().context("invalid command-line overrides")?;

    init_logging(&config)?;
    info!(command = ?cli.command, best_of = config.best_of(), "Starting namaste");

    let mut app = App::new(config);
    match cli.command {
        Some(Command::Single) => app.dispatch(AppAction::StartSingle),
        Some(Command::Series) => app.dispatch(AppAction::StartSeries),
        Some(Command::Menu) | None => {}
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = namaste::run(&mut app, &mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Goodbye");
    res
}

/// Sends tracing output to the log file so it does not corrupt the TUI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("creating log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,namaste=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
