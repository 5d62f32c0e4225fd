//! Best-of-N series bookkeeping.
//!
//! A series is a run of games with a cumulative score. It ends once a player
//! holds a strict majority of `max_games` or the game limit is reached.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{GameOutcome, Player, SeriesVerdict};

/// Default series length (best of five).
pub const DEFAULT_MAX_GAMES: u32 = 5;

/// Win count per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SeriesScore {
    x: u32,
    o: u32,
}

impl SeriesScore {
    /// Creates a score from raw counts.
    pub fn new(x: u32, o: u32) -> Self {
        Self { x, o }
    }

    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn increment(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    /// Higher score wins; equal scores tie.
    pub fn verdict(&self) -> SeriesVerdict {
        match self.x.cmp(&self.o) {
            std::cmp::Ordering::Greater => SeriesVerdict::Winner(Player::X),
            std::cmp::Ordering::Less => SeriesVerdict::Winner(Player::O),
            std::cmp::Ordering::Equal => SeriesVerdict::Tied,
        }
    }
}

impl std::fmt::Display for SeriesScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.x, self.o)
    }
}

/// Final result of a finished series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SeriesSummary {
    /// Final score.
    #[getter(copy)]
    score: SeriesScore,
    /// Games actually played.
    #[getter(copy)]
    games_played: u32,
    /// Configured series length.
    #[getter(copy)]
    max_games: u32,
}

impl SeriesSummary {
    /// Who took the series.
    pub fn verdict(&self) -> SeriesVerdict {
        self.score.verdict()
    }
}

/// What a series check concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesProgress {
    /// More games to play; carries the current game number.
    Ongoing {
        /// Game number (1-based).
        game_number: u32,
    },
    /// Termination condition met.
    Complete(SeriesSummary),
}

impl SeriesProgress {
    /// Returns true when the series has ended.
    pub fn is_complete(&self) -> bool {
        matches!(self, SeriesProgress::Complete(_))
    }
}

/// Running state of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SeriesState {
    /// Current game number, starting at 1.
    #[getter(copy)]
    current_game: u32,
    /// Series length.
    #[getter(copy)]
    max_games: u32,
    /// Cumulative score.
    #[getter(copy)]
    score: SeriesScore,
    /// Games whose result has been recorded.
    #[getter(copy)]
    games_recorded: u32,
}

impl SeriesState {
    /// Creates a best-of-five series at game 1.
    #[instrument]
    pub fn new() -> Self {
        Self::with_max_games(DEFAULT_MAX_GAMES)
    }

    /// Creates a series of `max_games` games (at least one).
    #[instrument]
    pub fn with_max_games(max_games: u32) -> Self {
        Self {
            current_game: 1,
            max_games: max_games.max(1),
            score: SeriesScore::default(),
            games_recorded: 0,
        }
    }

    /// Wins needed beyond which the series is decided: `floor(max_games / 2)`.
    pub fn majority_threshold(&self) -> u32 {
        self.max_games / 2
    }

    fn has_majority(&self) -> bool {
        let threshold = self.majority_threshold();
        self.score.get(Player::X) > threshold || self.score.get(Player::O) > threshold
    }

    /// Records a finished game and checks whether the series is over.
    ///
    /// Complete iff `current_game >= max_games` or either score exceeds
    /// `floor(max_games / 2)`.
    #[instrument(skip(self), fields(game = self.current_game))]
    pub fn record_game_result(&mut self, outcome: GameOutcome) -> SeriesProgress {
        if let GameOutcome::Win(player) = outcome {
            self.score.increment(player);
        }
        self.games_recorded += 1;
        debug!(score = %self.score, "Series score updated");

        if self.current_game >= self.max_games || self.has_majority() {
            info!(score = %self.score, "Series complete after game");
            SeriesProgress::Complete(self.summary())
        } else {
            SeriesProgress::Ongoing {
                game_number: self.current_game,
            }
        }
    }

    /// Moves to the next game number and re-checks termination.
    ///
    /// Complete iff `current_game > max_games` (after the increment) or
    /// either score exceeds `floor(max_games / 2)`.
    #[instrument(skip(self), fields(game = self.current_game))]
    pub fn advance(&mut self) -> SeriesProgress {
        self.current_game += 1;

        if self.current_game > self.max_games || self.has_majority() {
            info!(score = %self.score, "Series complete on advance");
            SeriesProgress::Complete(self.summary())
        } else {
            debug!(game_number = self.current_game, "Advanced to next game");
            SeriesProgress::Ongoing {
                game_number: self.current_game,
            }
        }
    }

    /// Snapshot of the series as a final result.
    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary {
            score: self.score,
            games_played: self.games_recorded,
            max_games: self.max_games,
        }
    }
}

impl Default for SeriesState {
    fn default() -> Self {
        Self::new()
    }
}
