use blackjack_rs::console::{self, Console};
use blackjack_rs::logging;
use blackjack_rs::session::TableConfig;
use blackjack_rs::tui::{app::AppState, controller};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::LevelFilter;
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

fn run_console(config: TableConfig) -> io::Result<()> {
    // Keep the prompts clean: warnings are buffered and reported on stderr at the end.
    let log = logging::install(LevelFilter::Warn).unwrap_or_default();
    let stdin = io::stdin();
    let term = Console::new(stdin.lock(), io::stdout())
        .with_delay(Duration::from_millis(config.dealer_delay_ms));
    let res = console::run(&term, &config).map(|_| ());
    for line in log.drain() {
        eprintln!("{line}");
    }
    res
}

fn main() -> io::Result<()> {
    let config = TableConfig::default();
    if !io::stdout().is_terminal() {
        return run_console(TableConfig { dealer_delay_ms: 0, ..config });
    }
    let log = logging::install(LevelFilter::Debug).unwrap_or_default();
    log::info!("blackjack-rs {}", blackjack_rs::VERSION);
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let mut app = AppState::with_config(config, log);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
