//! Error types for engine commands.

use crate::Position;

/// Why a mark could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The engine is not accepting moves (game over or awaiting a starter).
    #[display("Game is not active")]
    Inactive,
}

/// A command that does not apply to the engine's current state.
///
/// The engine is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// Series command issued in single-game mode.
    #[display("Not playing a series")]
    NotInSeries,

    /// The series has already been decided.
    #[display("Series is already complete")]
    SeriesComplete,

    /// The current game still has no result.
    #[display("Current game is not finished")]
    GameNotFinished,

    /// Marks are already on the board.
    #[display("Game has already started")]
    GameAlreadyStarted,

    /// The series game has ended and its result is on the scoreboard.
    #[display("Game result is already recorded in the series")]
    GameAlreadyRecorded,
}
