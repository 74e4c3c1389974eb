use blackjack_rs::game::Phase;
use blackjack_rs::logging::LogBuffer;
use blackjack_rs::session::TableConfig;
use blackjack_rs::tui::app::{AppState, InputAction, Scene};
use blackjack_rs::tui::controller::handle_key;
use crossterm::event::KeyCode;

fn setup_table_app() -> AppState {
    let config = TableConfig { dealer_delay_ms: 0, seed: Some(12), ..TableConfig::default() };
    let mut app = AppState::with_config(config, LogBuffer::new());
    app.cfg = config;
    app.apply_menu();
    app
}

/// Place a bet and play until the round is settled, standing immediately.
fn play_round(app: &mut AppState, bet: &str) {
    assert!(app.handle_input(InputAction::BetOpen));
    while app.bet_entry_text().is_some_and(|t| !t.is_empty()) {
        let _ = app.handle_input(InputAction::BetBackspace);
    }
    for d in bet.bytes() {
        let _ = app.handle_input(InputAction::BetDigit(d - b'0'));
    }
    assert!(app.handle_input(InputAction::BetSubmit));
    if app.phase() == Phase::PlayerTurn {
        assert!(app.handle_input(InputAction::Stand));
    }
    for _ in 0..20 {
        if app.phase() == Phase::Settled {
            break;
        }
        app.on_tick();
    }
    assert_eq!(app.phase(), Phase::Settled);
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg.starting_chips, 1100);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.session.balance(), 1100);
}

#[test]
fn help_history_and_log_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleLog);
    assert!(!app.history_open());
    assert!(app.log_open());
    let _ = app.handle_input(InputAction::ToggleLog);
    assert!(!app.log_open());
}

#[test]
fn bet_entry_edit_and_cancel() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::BetOpen));
    assert_eq!(app.bet_entry_text(), Some("10"));
    let _ = app.handle_input(InputAction::BetDigit(5));
    assert_eq!(app.bet_entry_text(), Some("105"));
    let _ = app.handle_input(InputAction::BetBackspace);
    assert_eq!(app.bet_entry_text(), Some("10"));
    let _ = app.handle_input(InputAction::BetInc);
    assert_eq!(app.bet_entry_text(), Some("20"));
    let _ = app.handle_input(InputAction::BetCancel);
    assert!(!app.bet_entry_active());
    assert_eq!(app.phase(), Phase::Setup);
}

#[test]
fn oversized_bet_shows_error_and_keeps_entry_open() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::BetOpen));
    for d in [9, 9, 9, 9] {
        let _ = app.handle_input(InputAction::BetDigit(d));
    }
    assert!(!app.handle_input(InputAction::BetSubmit));
    assert!(app.bet_entry_active());
    assert!(app.bet_entry_error().is_some());
    assert_eq!(app.phase(), Phase::Setup);
}

#[test]
fn dealer_plays_out_on_ticks_and_wallet_settles() {
    let mut app = setup_table_app();
    for _ in 0..5 {
        play_round(&mut app, "10");
    }
    let history = app.session.history();
    assert_eq!(history.len(), 5);
    let net: i64 = history.iter().map(|r| r.delta).sum();
    assert_eq!(app.session.balance() as i64, 1000 + net);
    assert!(!app.handle_input(InputAction::Hit));
}

#[test]
fn keys_route_to_actions() {
    let mut app = setup_table_app();
    assert!(!handle_key(&mut app, KeyCode::Char('q')), "q only quits from the menu");
    let _ = handle_key(&mut app, KeyCode::Char(' '));
    assert!(app.bet_entry_active());
    let _ = handle_key(&mut app, KeyCode::Enter);
    assert!(!app.bet_entry_active());
    assert_ne!(app.phase(), Phase::Setup);
    if app.phase() == Phase::PlayerTurn {
        let _ = handle_key(&mut app, KeyCode::Char('s'));
        assert_eq!(app.phase(), Phase::DealerTurn);
    }
    let _ = handle_key(&mut app, KeyCode::Char('m'));
    assert!(matches!(app.scene, Scene::Menu));
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
