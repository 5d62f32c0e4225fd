//! Per-game and per-series outcomes.

use serde::{Deserialize, Serialize};

use crate::Player;

/// Outcome of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameOutcome {
    /// No result yet.
    #[default]
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Board filled with no line.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// Returns true once the game has been decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "Player {} wins", player),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Final verdict of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesVerdict {
    /// One player finished ahead.
    Winner(Player),
    /// Scores finished level.
    Tied,
}

impl std::fmt::Display for SeriesVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesVerdict::Winner(player) => write!(f, "Player {} Wins the Series!", player),
            SeriesVerdict::Tied => write!(f, "Series Tied!"),
        }
    }
}
