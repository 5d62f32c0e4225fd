//! Notifications emitted by the engine for the presentation layer.
//!
//! Every command pushes what changed onto a queue. The presentation drains it
//! with [`GameEngine::take_events`](crate::GameEngine::take_events) after
//! dispatching and decides how (or whether) to show each one.

use serde::{Deserialize, Serialize};

use crate::{Player, Position, SeriesSummary, WinningLine};

/// A state change the presentation layer may react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A mark landed on the board.
    MarkPlaced {
        /// Who placed it.
        player: Player,
        /// Where.
        position: Position,
    },
    /// The turn passed to `Player`.
    TurnChanged(Player),
    /// A line was completed.
    GameWon(WinningLine),
    /// The board filled with no line.
    GameDrawn,
    /// The series score changed or was re-checked after a game.
    SeriesUpdated {
        /// Game number just finished.
        game_number: u32,
        /// Whether that game ended the series.
        last_game: bool,
    },
    /// The presentation should ask who starts this game.
    StartingPlayerRequested {
        /// Game number (1-based).
        game_number: u32,
        /// Series length.
        max_games: u32,
    },
    /// A game began with `Player` to move.
    GameStarted(Player),
    /// The series ended.
    SeriesCompleted(SeriesSummary),
    /// The board was cleared.
    BoardReset,
}
