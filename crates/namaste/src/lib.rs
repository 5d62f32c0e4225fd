//! Namaste - two-player tic-tac-toe in the terminal.
//!
//! Game rules and series bookkeeping live in [`namaste_tictactoe`]; this
//! crate adds the ratatui front end: a splash greeting, a mode menu, the
//! board with keyboard input, result dialogs and a celebration effect.
//!
//! # Example
//!
//! ```
//! use namaste::{App, AppAction, AppConfig, Screen};
//!
//! let mut app = App::new(AppConfig::default().with_splash(false));
//! app.dispatch(AppAction::StartSingle);
//! assert_eq!(app.screen(), Screen::Game);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod controller;
mod effects;
mod input;
pub mod ui;

pub use app::{App, AppAction, GameResultModal, MenuOption, Modal, Screen};
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use controller::run;
pub use effects::{Celebration, EMOJIS, Particle};
pub use input::{Direction, map_key, move_cursor};
