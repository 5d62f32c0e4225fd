//! Application state and command dispatch.
//!
//! Input is first mapped to an [`AppAction`] (see [`crate::input`]), then
//! [`App::dispatch`] calls into the engine and folds the engine's events into
//! screens, modals and status text.

use std::time::Duration;

use namaste_tictactoe::{
    EngineEvent, EnginePhase, GameEngine, GameMode, GameOutcome, Player, Position, SeriesSummary,
    SeriesVerdict,
};
use tracing::{debug, info, instrument, warn};

use crate::AppConfig;
use crate::effects::Celebration;
use crate::input::Direction;

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Greeting shown on launch.
    Splash,
    /// Mode selection menu.
    Welcome,
    /// Board and scores.
    Game,
}

/// Options on the welcome menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Start a single game.
    SingleGame,
    /// Start a series.
    Series,
    /// Leave the program.
    Quit,
}

impl MenuOption {
    /// All options in display order.
    pub fn all() -> &'static [MenuOption] {
        &[Self::SingleGame, Self::Series, Self::Quit]
    }

    /// Returns the display label for this option.
    pub fn label(self, best_of: u32) -> String {
        match self {
            Self::SingleGame => "Single Game".to_string(),
            Self::Series => format!("Best of {} Series", best_of),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// Result shown after each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResultModal {
    /// How the game ended.
    pub outcome: GameOutcome,
    /// Game number when playing a series.
    pub series_game: Option<u32>,
    /// Whether that game ended the series.
    pub last_game: bool,
}

impl GameResultModal {
    /// Headline text.
    pub fn title(&self) -> String {
        match self.outcome {
            GameOutcome::Win(player) => format!("Player {} Wins!", player),
            _ => "It's a Draw!".to_string(),
        }
    }

    /// Line under the headline.
    pub fn details(&self) -> String {
        let finished = if self.last_game {
            " - Series Finished!"
        } else {
            ""
        };
        match (self.series_game, self.outcome) {
            (Some(n), GameOutcome::Win(_)) => format!("Game {} completed{}", n, finished),
            (Some(n), _) => format!("Game {} ended in a tie{}", n, finished),
            (None, GameOutcome::Win(_)) => "Congratulations on your victory!".to_string(),
            (None, _) => "Good game! Try again!".to_string(),
        }
    }

    /// Label of the continue button.
    pub fn continue_label(&self) -> &'static str {
        match (self.series_game, self.last_game) {
            (None, _) => "Play Again",
            (Some(_), false) => "Next Game",
            (Some(_), true) => "View Series Results",
        }
    }

    /// Decorative icon.
    pub fn icon(&self) -> &'static str {
        if self.outcome.winner().is_some() {
            "🎉"
        } else {
            "🤝"
        }
    }
}

/// Dialog drawn over the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Who starts the next series game.
    StartingPlayer {
        /// Game number (1-based).
        game_number: u32,
        /// Series length.
        max_games: u32,
    },
    /// Result of the game just played.
    GameResult(GameResultModal),
    /// Final series standings.
    SeriesWinner(SeriesSummary),
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Place at a specific square.
    Place(Position),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Answer the starting-player prompt.
    ChooseStarter(Player),
    /// Press the result modal's continue button.
    Continue,
    /// Replay the current game.
    ResetGame,
    /// Start a fresh series from the game screen.
    NewSeries,
    /// Menu: start a single game.
    StartSingle,
    /// Menu: start a series.
    StartSeries,
    /// Menu: move selection up.
    MenuUp,
    /// Menu: move selection down.
    MenuDown,
    /// Menu: activate the selected option.
    MenuSelect,
    /// Back to the welcome screen.
    Home,
    /// Leave the splash screen early.
    SkipSplash,
    /// Exit the program.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    engine: GameEngine,
    modal: Option<Modal>,
    cursor: Position,
    menu_index: usize,
    status_message: String,
    celebration: Option<Celebration>,
    splash_remaining: Duration,
    config: AppConfig,
    should_quit: bool,
}

impl App {
    /// Creates the application, starting on the splash or welcome screen.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig) -> Self {
        let screen = if *config.splash() {
            Screen::Splash
        } else {
            Screen::Welcome
        };
        Self {
            screen,
            engine: GameEngine::with_best_of(*config.best_of()),
            modal: None,
            cursor: Position::Center,
            menu_index: 0,
            status_message: String::new(),
            celebration: None,
            splash_remaining: Duration::from_millis(*config.splash_millis()),
            config,
            should_quit: false,
        }
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The engine being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Open dialog, if any.
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Selected welcome-menu row.
    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Running celebration, if any.
    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    /// Active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Time left on the splash screen.
    pub fn splash_remaining(&self) -> Duration {
        self.splash_remaining
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Mode label for the header.
    pub fn mode_label(&self) -> String {
        match self.engine.mode() {
            GameMode::Single => GameMode::Single.label().to_string(),
            GameMode::Series => format!(
                "{} (Best of {})",
                GameMode::Series.label(),
                self.engine.best_of()
            ),
        }
    }

    /// Advances cosmetic timers.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.screen == Screen::Splash {
            self.splash_remaining = self.splash_remaining.saturating_sub(elapsed);
            if self.splash_remaining.is_zero() {
                debug!("Splash finished");
                self.screen = Screen::Welcome;
            }
        }
        if let Some(celebration) = self.celebration.as_mut()
            && !celebration.tick()
        {
            self.celebration = None;
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            AppAction::SkipSplash => self.screen = Screen::Welcome,
            AppAction::Home => {
                self.screen = Screen::Welcome;
                self.modal = None;
                self.celebration = None;
            }
            AppAction::MenuUp => {
                let count = MenuOption::all().len();
                self.menu_index = (self.menu_index + count - 1) % count;
            }
            AppAction::MenuDown => {
                self.menu_index = (self.menu_index + 1) % MenuOption::all().len();
            }
            AppAction::MenuSelect => match MenuOption::all()[self.menu_index] {
                MenuOption::SingleGame => self.dispatch(AppAction::StartSingle),
                MenuOption::Series => self.dispatch(AppAction::StartSeries),
                MenuOption::Quit => self.dispatch(AppAction::Quit),
            },
            AppAction::StartSingle => {
                self.fresh_engine();
                self.engine.start_single_game();
            }
            AppAction::StartSeries => {
                self.fresh_engine();
                self.engine.start_new_series();
            }
            AppAction::MoveCursor(direction) => {
                self.cursor = crate::input::move_cursor(self.cursor, direction);
            }
            AppAction::PlaceAtCursor => self.place(self.cursor),
            AppAction::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            AppAction::ChooseStarter(player) => {
                match self.engine.set_starting_player(player) {
                    Ok(()) => self.modal = None,
                    Err(e) => warn!(error = %e, "Starting player rejected"),
                }
            }
            AppAction::Continue => self.continue_from_modal(),
            AppAction::ResetGame => match self.engine.phase() {
                EnginePhase::SeriesComplete => {
                    self.modal = None;
                    self.engine.start_new_series();
                }
                _ => match self.engine.reset_game() {
                    Ok(()) => self.modal = None,
                    Err(e) => warn!(error = %e, "Reset rejected"),
                },
            },
            AppAction::NewSeries => {
                self.modal = None;
                self.engine.start_new_series();
            }
        }
        self.absorb_events();
    }

    fn fresh_engine(&mut self) {
        self.engine = GameEngine::with_best_of(*self.config.best_of());
        self.screen = Screen::Game;
        self.modal = None;
        self.celebration = None;
    }

    fn celebrate(&mut self) {
        if *self.config.celebration() {
            self.celebration = Some(Celebration::new());
        }
    }

    fn place(&mut self, pos: Position) {
        if self.modal.is_some() {
            return;
        }
        self.engine.place_mark(pos.to_index());
    }

    fn continue_from_modal(&mut self) {
        match self.modal {
            Some(Modal::GameResult(result)) => match (result.series_game, result.last_game) {
                (None, _) => {
                    self.modal = None;
                    if let Err(e) = self.engine.reset_game() {
                        warn!(error = %e, "Could not replay game");
                    }
                }
                (Some(_), false) => {
                    self.modal = None;
                    if let Err(e) = self.engine.advance_series() {
                        warn!(error = %e, "Could not advance series");
                    }
                }
                (Some(_), true) => {
                    let summary = self.engine.completed_series();
                    self.modal = summary.map(Modal::SeriesWinner);
                    if let Some(SeriesVerdict::Winner(_)) = summary.map(|s| s.verdict()) {
                        self.celebrate();
                    }
                }
            },
            Some(Modal::SeriesWinner(_)) => {
                self.modal = None;
                self.engine.start_new_series();
            }
            Some(Modal::StartingPlayer { .. }) | None => {}
        }
    }

    /// Folds queued engine notifications into UI state.
    fn absorb_events(&mut self) {
        for event in self.engine.take_events() {
            debug!(?event, "Handling engine event");
            match event {
                EngineEvent::MarkPlaced { player, position } => {
                    self.status_message = format!("{} played {}", player, position.label());
                }
                EngineEvent::TurnChanged(player) | EngineEvent::GameStarted(player) => {
                    self.status_message = format!("Player {}'s Turn", player);
                }
                EngineEvent::GameWon(line) => {
                    self.status_message = format!("Player {} Wins!", line.winner());
                    // Series games save the fireworks for the series winner.
                    if self.engine.mode() == GameMode::Single {
                        self.celebrate();
                    }
                    self.modal = Some(Modal::GameResult(GameResultModal {
                        outcome: GameOutcome::Win(line.winner()),
                        series_game: None,
                        last_game: false,
                    }));
                }
                EngineEvent::GameDrawn => {
                    self.status_message = "It's a Draw!".to_string();
                    self.modal = Some(Modal::GameResult(GameResultModal {
                        outcome: GameOutcome::Draw,
                        series_game: None,
                        last_game: false,
                    }));
                }
                EngineEvent::SeriesUpdated {
                    game_number,
                    last_game,
                } => {
                    if let Some(Modal::GameResult(result)) = self.modal.as_mut() {
                        result.series_game = Some(game_number);
                        result.last_game = last_game;
                    }
                }
                EngineEvent::StartingPlayerRequested {
                    game_number,
                    max_games,
                } => {
                    self.status_message = format!("Game {} of {}", game_number, max_games);
                    self.modal = Some(Modal::StartingPlayer {
                        game_number,
                        max_games,
                    });
                }
                EngineEvent::SeriesCompleted(summary) => {
                    info!(score = %summary.score(), "Series complete");
                }
                EngineEvent::BoardReset => {
                    self.cursor = Position::Center;
                    self.celebration = None;
                }
            }
        }
    }
}
