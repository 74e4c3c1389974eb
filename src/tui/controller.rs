use crate::tui::app::{AppState, InputAction, Scene};
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

/// Map a key press to app input. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.bet_entry_active() {
        match code {
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::BetCancel);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::BetSubmit);
            }
            KeyCode::Backspace => {
                let _ = app.handle_input(InputAction::BetBackspace);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let _ = app.handle_input(InputAction::BetInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let _ = app.handle_input(InputAction::BetDec);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let _ = app.handle_input(InputAction::BetDigit(c as u8 - b'0'));
            }
            _ => {}
        }
        return false;
    }

    if app.scene == Scene::Table {
        match code {
            KeyCode::Char('?') => {
                let _ = app.handle_input(InputAction::ToggleHelp);
                return false;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let _ = app.handle_input(InputAction::ToggleHistory);
                return false;
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let _ = app.handle_input(InputAction::ToggleLog);
                return false;
            }
            _ => {}
        }
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if app.history_open() || app.log_open() {
        match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::ScrollUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::ScrollDown);
            }
            KeyCode::Esc => {
                let toggle = if app.history_open() {
                    InputAction::ToggleHistory
                } else {
                    InputAction::ToggleLog
                };
                let _ = app.handle_input(toggle);
            }
            _ => {}
        }
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::MenuCancel);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char(' ') | KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Enter => {
                let _ = app.handle_input(InputAction::BetOpen);
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                let _ = app.handle_input(InputAction::Hit);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let _ = app.handle_input(InputAction::Stand);
            }
            _ => {}
        },
    }
    false
}
