use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key to an input action. Returns true when the app should exit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    let action = match code {
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Esc if app.help_open() => InputAction::ToggleHelp,
        KeyCode::Char(' ') | KeyCode::Enter => InputAction::Advance,
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::ToggleRules,
        KeyCode::Char('a') | KeyCode::Char('A') => InputAction::ToggleAces,
        KeyCode::Char('j') | KeyCode::Char('J') => InputAction::ToggleJokers,
        KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,
        _ => return false,
    };
    app.handle_input(action)
}
