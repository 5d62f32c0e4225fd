//! Rendering tests against ratatui's in-memory backend.

use namaste::{App, AppAction, AppConfig, ui};
use namaste_tictactoe::{Player, Position};
use ratatui::{Terminal, backend::TestBackend};

fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn menu_app() -> App {
    App::new(AppConfig::default().with_splash(false))
}

fn play(app: &mut App, indices: &[usize]) {
    for &i in indices {
        let pos = Position::from_index(i).expect("valid index");
        app.dispatch(AppAction::Place(pos));
    }
}

#[test]
fn test_splash_greets() {
    let app = App::new(AppConfig::default());
    let screen = render(&app, 80, 24);
    assert!(screen.contains("Namaste"));
}

#[test]
fn test_welcome_lists_modes() {
    let app = menu_app();
    let screen = render(&app, 80, 24);
    assert!(screen.contains("Single Game"));
    assert!(screen.contains("Best of 5 Series"));
    assert!(screen.contains("Quit"));
}

#[test]
fn test_game_screen_shows_turn_and_mode() {
    let mut app = menu_app();
    app.dispatch(AppAction::StartSingle);
    play(&mut app, &[4]);

    let screen = render(&app, 80, 24);
    assert!(screen.contains("Single Game"));
    assert!(screen.contains("Player O's Turn"));
    assert!(!screen.contains("Score X:"));
}

#[test]
fn test_series_prompts_for_starter() {
    let mut app = menu_app();
    app.dispatch(AppAction::StartSeries);

    let screen = render(&app, 80, 24);
    assert!(screen.contains("Who Starts?"));
    assert!(screen.contains("Game 1 of 5"));
    assert!(screen.contains("Score X: 0 O: 0 | Game 1 of 5"));
}

#[test]
fn test_win_shows_result_dialog() {
    let mut app = menu_app();
    app.dispatch(AppAction::StartSeries);
    app.dispatch(AppAction::ChooseStarter(Player::X));
    play(&mut app, &[0, 3, 1, 4, 2]);

    let screen = render(&app, 80, 24);
    assert!(screen.contains("Player X Wins!"));
    assert!(screen.contains("Game 1 completed"));
    assert!(screen.contains("Next Game"));
    assert!(screen.contains("Score X: 1 O: 0"));
}

#[test]
fn test_celebration_fits_small_terminal() {
    let mut app = menu_app();
    app.dispatch(AppAction::StartSingle);
    play(&mut app, &[0, 3, 1, 4, 2]);
    assert!(app.celebration().is_some());

    for _ in 0..40 {
        app.tick(std::time::Duration::from_millis(100));
        render(&app, 20, 8);
    }
}

#[test]
fn test_tied_series_dialog() {
    let mut app = App::new(AppConfig::default().with_splash(false).with_best_of(2));
    app.dispatch(AppAction::StartSeries);
    for starter in [Player::X, Player::O] {
        app.dispatch(AppAction::ChooseStarter(starter));
        play(&mut app, &[0, 3, 1, 4, 2]);
        app.dispatch(AppAction::Continue);
    }

    let screen = render(&app, 80, 24);
    assert!(screen.contains("Series Results"));
    assert!(screen.contains("Series Tied!"));
    assert!(screen.contains("Final Score: 1 - 1"));
    assert!(screen.contains("New Series"));
}
