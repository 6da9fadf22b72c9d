use crate::evaluator::Rules;
use crate::table::{Street, Table, TableConfig, TableError};
use std::time::{Duration, Instant};

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    /// Deal the next street, or a new hand once the showdown is settled.
    Advance,
    ToggleRules,
    ToggleAces,
    ToggleJokers,
    ToggleHelp,
    Quit,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub started: Instant,
    pub table: Table,
    help_open: bool,
    status: Option<String>,
    error: Option<String>,
    error_at: Option<Instant>,
}

impl AppState {
    const ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        Ok(Self {
            started: Instant::now(),
            table: Table::new(config)?,
            help_open: false,
            status: None,
            error: None,
            error_at: None,
        })
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    /// Last informational message, e.g. after a toggle.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn report(&mut self, result: Result<(), TableError>, ok: impl FnOnce(&Table) -> String) {
        match result {
            Ok(()) => {
                self.status = Some(ok(&self.table));
                self.error = None;
                self.error_at = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.error_at = Some(Instant::now());
            }
        }
    }

    /// Apply one input. Returns true when the app should exit.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        if self.help_open && !matches!(action, InputAction::ToggleHelp | InputAction::Quit) {
            return false;
        }
        match action {
            InputAction::Advance => {
                let result = if self.table.street() == Street::Showdown {
                    self.table.new_hand()
                } else {
                    self.table.advance().map(|_| ())
                };
                self.report(result, |t| format!("{} dealt", t.street().label()));
            }
            InputAction::ToggleRules => {
                let next = if self.table.config().rules.is_classic() {
                    Rules::STANDARD
                } else {
                    Rules::CLASSIC
                };
                let result = self.table.set_rules(next);
                self.report(result, |t| format!("Rules: {}", t.config().rules.label()));
            }
            InputAction::ToggleAces => {
                let next = self.table.config().aces.toggled();
                let result = self.table.set_aces(next);
                self.report(result, |t| format!("Aces: {}", aces_label(t)));
            }
            InputAction::ToggleJokers => {
                let next = !self.table.config().jokers;
                self.table.set_jokers(next);
                self.report(Ok(()), |_| {
                    format!("Jokers {} from the next hand", if next { "in" } else { "out" })
                });
            }
            InputAction::ToggleHelp => self.help_open = !self.help_open,
            InputAction::Quit => return true,
        }
        false
    }

    /// Expire stale error messages.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.error_at {
            if at.elapsed() >= Self::ERROR_TTL {
                self.error = None;
                self.error_at = None;
            }
        }
    }
}

pub(crate) fn aces_label(table: &Table) -> &'static str {
    match table.config().aces {
        crate::cards::Aces::High => "high",
        crate::cards::Aces::Low => "low",
    }
}
