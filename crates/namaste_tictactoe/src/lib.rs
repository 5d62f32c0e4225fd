//! Namaste tic-tac-toe engine.
//!
//! Pure game logic for two-player tic-tac-toe with an optional best-of-N
//! series. No rendering, no I/O: a presentation layer drives the
//! [`GameEngine`] through its commands and renders from its snapshot.
//!
//! # Example
//!
//! ```
//! use namaste_tictactoe::{GameEngine, GameOutcome, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.place_mark(index);
//! }
//! assert_eq!(engine.place_mark(2), GameOutcome::Win(Player::X));
//! assert_eq!(engine.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod events;
mod outcome;
mod position;
pub mod rules;
pub mod series;
mod types;

pub use engine::{EnginePhase, EngineSnapshot, GameEngine, GameMode};
pub use error::{EngineError, MoveError};
pub use events::EngineEvent;
pub use outcome::{GameOutcome, SeriesVerdict};
pub use position::Position;
pub use rules::{WINNING_LINES, WinningLine};
pub use series::{SeriesProgress, SeriesScore, SeriesState, SeriesSummary};
pub use types::{Board, Player, Square};
