use crossterm::event::KeyCode;
use holdem_eval::evaluator::Rules;
use holdem_eval::table::{Street, TableConfig};
use holdem_eval::tui::app::{AppState, InputAction};
use holdem_eval::tui::controller::handle_key;

fn app() -> AppState {
    AppState::new(TableConfig { seats: 4, seed: Some(42), ..TableConfig::default() }).unwrap()
}

#[test]
fn space_walks_the_streets() {
    let mut app = app();
    let expected = [Street::Flop, Street::Turn, Street::River, Street::Showdown, Street::Preflop];
    for want in expected {
        assert!(!handle_key(&mut app, KeyCode::Char(' ')));
        assert_eq!(app.table.street(), want);
    }
    assert!(app.error().is_none());
}

#[test]
fn toggles_change_table_config() {
    let mut app = app();
    handle_key(&mut app, KeyCode::Char('r'));
    assert_eq!(app.table.config().rules, Rules::CLASSIC);
    handle_key(&mut app, KeyCode::Char('A'));
    assert_eq!(app.table.config().aces, holdem_eval::cards::Aces::Low);
    handle_key(&mut app, KeyCode::Char('j'));
    assert!(app.table.config().jokers);
    assert_eq!(app.status(), Some("Jokers in from the next hand"));
}

#[test]
fn help_overlay_swallows_keys_until_closed() {
    let mut app = app();
    handle_key(&mut app, KeyCode::Char('?'));
    assert!(app.help_open());
    handle_key(&mut app, KeyCode::Char(' '));
    assert_eq!(app.table.street(), Street::Preflop);
    handle_key(&mut app, KeyCode::Esc);
    assert!(!app.help_open());
}

#[test]
fn quit_keys() {
    let mut app = app();
    assert!(handle_key(&mut app, KeyCode::Char('q')));
    assert!(app.handle_input(InputAction::Quit));
    assert!(!handle_key(&mut app, KeyCode::Char('x')));
}
