use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use holdem_eval::table::TableConfig;
use holdem_eval::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Terminal dealer view for community-card poker.
#[derive(Parser, Debug)]
#[command(name = "holdem-eval", version, about, long_about = None)]
struct Cli {
    /// Number of seats at the table (2 to 10)
    seats: Option<usize>,

    /// Seed for the shuffle; omit for a fresh entropy seed
    seed: Option<u64>,
}

impl Cli {
    fn table_config(&self) -> TableConfig {
        let defaults = TableConfig::default();
        TableConfig {
            seats: self.seats.unwrap_or(defaults.seats),
            seed: self.seed.or(defaults.seed),
            ..defaults
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if !io::stdout().is_terminal() {
        println!(
            "holdem-eval TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            holdem_eval::VERSION
        );
        return Ok(());
    }
    let mut app = AppState::new(cli.table_config())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
