//! The game engine: one board, turn order, and optional series bookkeeping.
//!
//! [`GameEngine`] is a plain owned value. The presentation layer maps input to
//! one of its commands, then re-renders from [`GameEngine::snapshot`] and
//! reacts to the queued [`EngineEvent`]s.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::rules::{self, WinningLine};
use crate::{
    Board, EngineError, EngineEvent, GameOutcome, MoveError, Player, Position, SeriesProgress,
    SeriesState, SeriesSummary,
};

/// Single game or best-of-N series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// One game at a time, X always starts.
    #[default]
    Single,
    /// Games tracked with a cumulative score.
    Series,
}

impl GameMode {
    /// Returns display name.
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Single => "Single Game",
            GameMode::Series => "Series Mode",
        }
    }
}

/// Where the engine sits in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnginePhase {
    /// Series game waiting for a starting-player choice.
    AwaitingStartingPlayer,
    /// Accepting moves.
    InProgress,
    /// Current game decided.
    GameOver(GameOutcome),
    /// Series decided; only a new series or single game continues play.
    SeriesComplete,
}

/// Read-only view of the engine for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct EngineSnapshot {
    /// Board contents.
    board: Board,
    /// Player to move (or who just moved, once the game is over).
    #[getter(copy)]
    current_player: Player,
    /// Whether moves are accepted.
    #[getter(copy)]
    active: bool,
    /// Current mode.
    #[getter(copy)]
    mode: GameMode,
    /// Current game outcome.
    #[getter(copy)]
    outcome: GameOutcome,
    /// Completed line, on a win.
    #[getter(copy)]
    winning_line: Option<WinningLine>,
    /// Positions played this game, in order.
    history: Vec<Position>,
    /// Running series, if any.
    series: Option<SeriesState>,
    /// Result of the last finished series.
    #[getter(copy)]
    completed_series: Option<SeriesSummary>,
    /// State-machine phase.
    #[getter(copy)]
    phase: EnginePhase,
}

/// Tic-tac-toe engine with optional series mode.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    active: bool,
    mode: GameMode,
    series: Option<SeriesState>,
    outcome: GameOutcome,
    winning_line: Option<WinningLine>,
    history: Vec<Position>,
    best_of: u32,
    completed_series: Option<SeriesSummary>,
    events: Vec<EngineEvent>,
}

impl GameEngine {
    /// Creates a single-game engine with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_best_of(crate::series::DEFAULT_MAX_GAMES)
    }

    /// Creates a single-game engine whose series will last `best_of` games.
    #[instrument]
    pub fn with_best_of(best_of: u32) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            active: true,
            mode: GameMode::Single,
            series: None,
            outcome: GameOutcome::InProgress,
            winning_line: None,
            history: Vec::new(),
            best_of: best_of.max(1),
            completed_series: None,
            events: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Invalid moves (inactive engine, occupied square, index out of range)
    /// change nothing and return [`GameOutcome::InProgress`].
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize) -> GameOutcome {
        match self.try_place_mark(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "Ignoring invalid move");
                GameOutcome::InProgress
            }
        }
    }

    /// Like [`place_mark`](Self::place_mark) but reports why a move was refused.
    #[instrument(skip(self))]
    pub fn try_place_mark(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.try_place(pos)
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_place(&mut self, pos: Position) -> Result<GameOutcome, MoveError> {
        if !self.active {
            return Err(MoveError::Inactive);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_player;
        self.board.place(pos, player);
        self.history.push(pos);
        self.events.push(EngineEvent::MarkPlaced {
            player,
            position: pos,
        });
        debug_assert!(board_consistent(&self.board), "mark counts drifted apart");

        if let Some(line) = rules::winning_line(&self.board) {
            info!(winner = %line.winner(), line = ?line.indices(), "Game won");
            self.outcome = GameOutcome::Win(line.winner());
            self.winning_line = Some(line);
            self.events.push(EngineEvent::GameWon(line));
            self.finish_game();
        } else if self.board.is_full() {
            info!("Game drawn");
            self.outcome = GameOutcome::Draw;
            self.events.push(EngineEvent::GameDrawn);
            self.finish_game();
        } else {
            self.switch_player();
        }

        Ok(self.outcome)
    }

    /// True iff the board is full and no line is complete.
    pub fn check_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
        self.events.push(EngineEvent::TurnChanged(self.current_player));
    }

    /// Stops play and, in a series, records the result.
    fn finish_game(&mut self) {
        self.active = false;

        if self.mode != GameMode::Series {
            return;
        }
        let Some(series) = self.series.as_mut() else {
            return;
        };
        let game_number = series.current_game();
        let progress = series.record_game_result(self.outcome);
        self.events.push(EngineEvent::SeriesUpdated {
            game_number,
            last_game: progress.is_complete(),
        });
        if let SeriesProgress::Complete(summary) = progress {
            self.complete_series(summary);
        }
    }

    fn complete_series(&mut self, summary: SeriesSummary) {
        info!(score = %summary.score(), verdict = %summary.verdict(), "Series finished");
        self.series = None;
        self.completed_series = Some(summary);
        self.events.push(EngineEvent::SeriesCompleted(summary));
    }

    // ─────────────────────────────────────────────────────────────
    //  Game and series flow
    // ─────────────────────────────────────────────────────────────

    /// Moves a series on to its next game.
    ///
    /// Ongoing: the board is cleared and the engine waits for
    /// [`set_starting_player`](Self::set_starting_player).
    /// Complete: the series is discarded and its summary is reported.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotInSeries`] in single mode,
    /// [`EngineError::SeriesComplete`] once the series is decided,
    /// [`EngineError::GameNotFinished`] while the current game is undecided.
    #[instrument(skip(self))]
    pub fn advance_series(&mut self) -> Result<SeriesProgress, EngineError> {
        if self.mode != GameMode::Series {
            warn!("advance_series called outside a series");
            return Err(EngineError::NotInSeries);
        }
        if self.series.is_none() {
            return Err(EngineError::SeriesComplete);
        }
        if !self.outcome.is_over() {
            return Err(EngineError::GameNotFinished);
        }

        let progress = match self.series.as_mut() {
            Some(series) => series.advance(),
            None => return Err(EngineError::SeriesComplete),
        };

        match progress {
            SeriesProgress::Ongoing { game_number } => {
                self.reset_board();
                let max_games = self.best_of;
                self.events.push(EngineEvent::StartingPlayerRequested {
                    game_number,
                    max_games,
                });
            }
            SeriesProgress::Complete(summary) => self.complete_series(summary),
        }

        Ok(progress)
    }

    /// Chooses who moves first and opens the board for play.
    ///
    /// # Errors
    ///
    /// [`EngineError::GameAlreadyStarted`] once a mark is down,
    /// [`EngineError::SeriesComplete`] after the series is decided.
    #[instrument(skip(self))]
    pub fn set_starting_player(&mut self, player: Player) -> Result<(), EngineError> {
        if self.mode == GameMode::Series && self.series.is_none() {
            return Err(EngineError::SeriesComplete);
        }
        if !self.history.is_empty() {
            return Err(EngineError::GameAlreadyStarted);
        }

        self.current_player = player;
        self.active = true;
        self.events.push(EngineEvent::GameStarted(player));
        Ok(())
    }

    /// Clears the board for a replay of the current game.
    ///
    /// Single mode starts immediately with X; series mode waits for a
    /// starting-player choice. Series score and game number are kept.
    ///
    /// # Errors
    ///
    /// [`EngineError::GameAlreadyRecorded`] when the current series game has
    /// ended and was scored (move on with [`advance_series`](Self::advance_series)),
    /// [`EngineError::SeriesComplete`] after the series is decided.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> Result<(), EngineError> {
        if self.mode == GameMode::Series {
            if self.series.is_none() {
                return Err(EngineError::SeriesComplete);
            }
            if self.outcome.is_over() {
                debug!("Refusing to replay a scored series game");
                return Err(EngineError::GameAlreadyRecorded);
            }
        }
        self.restart_game();
        Ok(())
    }

    /// Clears the board and announces how the next game starts.
    fn restart_game(&mut self) {
        self.reset_board();
        match self.mode {
            GameMode::Single => self.events.push(EngineEvent::GameStarted(Player::X)),
            GameMode::Series => {
                if let Some(series) = &self.series {
                    self.events.push(EngineEvent::StartingPlayerRequested {
                        game_number: series.current_game(),
                        max_games: series.max_games(),
                    });
                }
            }
        }
    }

    /// Starts a fresh series at game 1 with a zero score.
    #[instrument(skip(self))]
    pub fn start_new_series(&mut self) {
        info!(best_of = self.best_of, "Starting new series");
        self.mode = GameMode::Series;
        self.series = Some(SeriesState::with_max_games(self.best_of));
        self.completed_series = None;
        self.restart_game();
    }

    /// Leaves any series and starts a single game with X to move.
    #[instrument(skip(self))]
    pub fn start_single_game(&mut self) {
        info!("Starting single game");
        self.mode = GameMode::Single;
        self.series = None;
        self.completed_series = None;
        self.restart_game();
    }

    /// Empty board, X to move, active only in single mode.
    fn reset_board(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.outcome = GameOutcome::InProgress;
        self.winning_line = None;
        self.history.clear();
        self.active = self.mode == GameMode::Single;
        self.events.push(EngineEvent::BoardReset);
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the running series, if any.
    pub fn series(&self) -> Option<&SeriesState> {
        self.series.as_ref()
    }

    /// Returns the current game outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the completed line on a win.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Configured series length.
    pub fn best_of(&self) -> u32 {
        self.best_of
    }

    /// Result of the last finished series.
    pub fn completed_series(&self) -> Option<SeriesSummary> {
        self.completed_series
    }

    /// Current state-machine phase.
    pub fn phase(&self) -> EnginePhase {
        if self.mode == GameMode::Series && self.series.is_none() {
            EnginePhase::SeriesComplete
        } else if self.outcome.is_over() {
            EnginePhase::GameOver(self.outcome)
        } else if self.active {
            EnginePhase::InProgress
        } else {
            EnginePhase::AwaitingStartingPlayer
        }
    }

    /// Returns valid positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.active {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Captures the current state for rendering.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            active: self.active,
            mode: self.mode,
            outcome: self.outcome,
            winning_line: self.winning_line,
            history: self.history.clone(),
            series: self.series.clone(),
            completed_series: self.completed_series,
            phase: self.phase(),
        }
    }

    /// Drains queued notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Mark counts never differ by more than one.
fn board_consistent(board: &Board) -> bool {
    board.count(Player::X).abs_diff(board.count(Player::O)) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, indices: &[usize]) -> GameOutcome {
        let mut outcome = GameOutcome::InProgress;
        for &i in indices {
            outcome = engine
                .try_place_mark(i)
                .unwrap_or_else(|e| panic!("move {i} rejected: {e}"));
        }
        outcome
    }

    #[test]
    fn test_new_engine_is_single_and_active() {
        let engine = GameEngine::new();
        assert_eq!(engine.mode(), GameMode::Single);
        assert!(engine.is_active());
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.phase(), EnginePhase::InProgress);
        assert!(engine.series().is_none());
    }

    #[test]
    fn test_switch_player_emits_turn_change() {
        let mut engine = GameEngine::new();
        engine.place_mark(4);
        let events = engine.take_events();
        assert_eq!(
            events,
            vec![
                EngineEvent::MarkPlaced {
                    player: Player::X,
                    position: Position::Center
                },
                EngineEvent::TurnChanged(Player::O),
            ]
        );
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn test_try_place_reports_reason() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.try_place_mark(9), Err(MoveError::OutOfBounds(9)));
        play(&mut engine, &[0]);
        assert_eq!(
            engine.try_place_mark(0),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        play(&mut engine, &[3, 1, 4, 2]);
        assert_eq!(engine.try_place_mark(8), Err(MoveError::Inactive));
    }

    #[test]
    fn test_win_stops_play_without_switching() {
        let mut engine = GameEngine::new();
        let outcome = play(&mut engine, &[0, 3, 1, 4, 2]);
        assert_eq!(outcome, GameOutcome::Win(Player::X));
        assert!(!engine.is_active());
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
        assert_eq!(engine.phase(), EnginePhase::GameOver(outcome));
    }

    #[test]
    fn test_check_draw() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 4, 8, 1, 7, 6, 2, 5]);
        assert!(!engine.check_draw());
        assert_eq!(play(&mut engine, &[3]), GameOutcome::Draw);
        assert!(engine.check_draw());
    }

    #[test]
    fn test_set_starting_player_rejected_mid_game() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.set_starting_player(Player::O), Ok(()));
        assert_eq!(engine.current_player(), Player::O);
        play(&mut engine, &[4]);
        assert_eq!(
            engine.set_starting_player(Player::X),
            Err(EngineError::GameAlreadyStarted)
        );
        assert_eq!(engine.current_player(), Player::X);
    }

    #[test]
    fn test_advance_series_requires_series_mode() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        assert_eq!(engine.advance_series(), Err(EngineError::NotInSeries));
    }

    #[test]
    fn test_advance_series_requires_finished_game() {
        let mut engine = GameEngine::new();
        engine.start_new_series();
        assert_eq!(engine.phase(), EnginePhase::AwaitingStartingPlayer);
        assert_eq!(engine.advance_series(), Err(EngineError::GameNotFinished));
        assert_eq!(engine.series().map(|s| s.current_game()), Some(1));
    }

    #[test]
    fn test_board_consistency() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        assert!(board_consistent(&board));
        board.place(Position::Center, Player::X);
        assert!(!board_consistent(&board));
    }
}
