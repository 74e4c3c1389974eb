use crate::game::Phase;
use crate::logging::LogBuffer;
use crate::session::{parse_bet, Session, TableConfig};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    ToggleLog,
    ScrollUp,
    ScrollDown,
    BetOpen,
    BetDigit(u8),
    BetBackspace,
    BetInc,
    BetDec,
    BetSubmit,
    BetCancel,
    Hit,
    Stand,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub session: Session,
    /// Settings the current session was created with.
    pub config: TableConfig,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg: TableConfig,
    log: LogBuffer,
    help_open: bool,
    history_open: bool,
    log_open: bool,
    scroll: usize,
    bet_entry: Option<String>,
    bet_entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
    last_dealer_move: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(TableConfig::default(), LogBuffer::new())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);
    const MAX_BET_DIGITS: usize = 12;

    pub fn with_config(config: TableConfig, log: LogBuffer) -> Self {
        Self {
            scene: Scene::Menu,
            session: Session::new(&config),
            config,
            menu_index: 0,
            cfg: config,
            log,
            help_open: false,
            history_open: false,
            log_open: false,
            scroll: 0,
            bet_entry: None,
            bet_entry_error: None,
            action_error: None,
            action_error_at: None,
            last_dealer_move: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.session.game().phase()
    }

    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    pub fn bet_entry_active(&self) -> bool {
        self.bet_entry.is_some()
    }

    pub fn bet_entry_text(&self) -> Option<&str> {
        self.bet_entry.as_deref()
    }

    pub fn bet_entry_error(&self) -> Option<&str> {
        self.bet_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn log_open(&self) -> bool {
        self.log_open
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub(crate) fn close_overlays(&mut self) {
        self.help_open = false;
        self.history_open = false;
        self.log_open = false;
    }

    /// Whether a new bet can be placed right now.
    pub fn can_bet(&self) -> bool {
        self.scene == Scene::Table
            && !self.session.round_in_progress()
            && !self.session.is_over()
    }

    pub fn can_play(&self) -> bool {
        self.scene == Scene::Table && self.phase() == Phase::PlayerTurn
    }

    fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    fn open_bet_entry(&mut self) -> bool {
        if !self.can_bet() {
            return false;
        }
        let balance = self.session.balance();
        let suggested = self.session.last_bet().unwrap_or(self.config.bet_step).min(balance).max(1);
        self.bet_entry = Some(suggested.to_string());
        self.bet_entry_error = None;
        true
    }

    fn bet_entry_push_digit(&mut self, digit: u8) {
        if let Some(buf) = self.bet_entry.as_mut() {
            if buf.len() >= Self::MAX_BET_DIGITS {
                return;
            }
            buf.push(char::from(b'0' + digit));
        }
        self.bet_entry_error = None;
    }

    fn bet_entry_backspace(&mut self) {
        if let Some(buf) = self.bet_entry.as_mut() {
            buf.pop();
        }
        self.bet_entry_error = None;
    }

    fn bet_entry_adjust(&mut self, steps: i64) {
        let step = self.config.bet_step.max(1);
        let balance = self.session.balance();
        if let Some(buf) = self.bet_entry.as_mut() {
            let cur = buf.parse::<u64>().unwrap_or(0);
            let next = if steps >= 0 {
                cur.saturating_add(step).min(balance)
            } else {
                cur.saturating_sub(step).max(1)
            };
            *buf = next.to_string();
        }
        self.bet_entry_error = None;
    }

    fn bet_entry_submit(&mut self) -> bool {
        let Some(buf) = self.bet_entry.as_ref() else {
            return false;
        };
        let amount = match parse_bet(buf, self.session.balance()) {
            Ok(v) => v,
            Err(e) => {
                self.bet_entry_error = Some(e.to_string());
                return false;
            }
        };
        match self.session.place_bet(amount) {
            Ok(_) => {
                self.bet_entry = None;
                self.bet_entry_error = None;
                self.clear_action_error();
                true
            }
            Err(e) => {
                self.bet_entry_error = Some(e.to_string());
                false
            }
        }
    }

    fn bet_entry_cancel(&mut self) {
        self.bet_entry = None;
        self.bet_entry_error = None;
    }

    fn hit(&mut self) -> bool {
        if !self.can_play() {
            return false;
        }
        match self.session.hit() {
            Ok(_) => true,
            Err(e) => {
                self.set_action_error(e.to_string());
                false
            }
        }
    }

    fn stand(&mut self) -> bool {
        if !self.can_play() {
            return false;
        }
        match self.session.stand() {
            Ok(_) => {
                self.last_dealer_move = Some(Instant::now());
                true
            }
            Err(e) => {
                self.set_action_error(e.to_string());
                false
            }
        }
    }

    fn scroll_limit(&self) -> usize {
        let len = if self.history_open {
            self.session.history().len()
        } else if self.log_open {
            self.log.len()
        } else {
            0
        };
        len.saturating_sub(Self::HISTORY_PAGE_SIZE)
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    let open = !self.help_open;
                    self.close_overlays();
                    self.help_open = open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    let open = !self.history_open;
                    self.close_overlays();
                    self.history_open = open;
                    self.scroll = 0;
                }
                false
            }
            InputAction::ToggleLog => {
                if self.scene == Scene::Table {
                    let open = !self.log_open;
                    self.close_overlays();
                    self.log_open = open;
                    self.scroll = 0;
                }
                false
            }
            InputAction::ScrollUp => {
                self.scroll = (self.scroll + 1).min(self.scroll_limit());
                false
            }
            InputAction::ScrollDown => {
                self.scroll = self.scroll.saturating_sub(1);
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::BetOpen => self.open_bet_entry(),
            InputAction::BetDigit(d) => {
                self.bet_entry_push_digit(d);
                false
            }
            InputAction::BetBackspace => {
                self.bet_entry_backspace();
                false
            }
            InputAction::BetInc => {
                self.bet_entry_adjust(1);
                false
            }
            InputAction::BetDec => {
                self.bet_entry_adjust(-1);
                false
            }
            InputAction::BetSubmit => self.bet_entry_submit(),
            InputAction::BetCancel => {
                self.bet_entry_cancel();
                false
            }
            InputAction::Hit => self.hit(),
            InputAction::Stand => self.stand(),
        }
    }

    /// Periodic work: expire errors and let the dealer play at its configured pace.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if self.scene != Scene::Table || self.phase() != Phase::DealerTurn {
            return;
        }
        let delay = Duration::from_millis(self.config.dealer_delay_ms);
        if let Some(at) = self.last_dealer_move {
            if at.elapsed() < delay {
                return;
            }
        }
        match self.session.dealer_step() {
            Ok(_) => self.last_dealer_move = Some(Instant::now()),
            Err(e) => self.set_action_error(e.to_string()),
        }
    }
}
