use crate::session::Session;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    StartingChips,
    DealerDelayMs,
    BetStep,
}

const MENU_ITEMS: [MenuItem; 3] =
    [MenuItem::StartingChips, MenuItem::DealerDelayMs, MenuItem::BetStep];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::StartingChips => format!("Starting Chips: ${}", app.cfg.starting_chips),
            MenuItem::DealerDelayMs => format!("Dealer Delay (ms): {}", app.cfg.dealer_delay_ms),
            MenuItem::BetStep => format!("Bet Step: {}", app.cfg.bet_step),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::StartingChips => {
                app.cfg.starting_chips = app.cfg.starting_chips.saturating_add(100);
            }
            MenuItem::DealerDelayMs => {
                app.cfg.dealer_delay_ms = app.cfg.dealer_delay_ms.saturating_add(100);
            }
            MenuItem::BetStep => {
                app.cfg.bet_step = app.cfg.bet_step.saturating_add(5);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::StartingChips => {
                app.cfg.starting_chips = app.cfg.starting_chips.saturating_sub(100).max(100);
            }
            MenuItem::DealerDelayMs => {
                app.cfg.dealer_delay_ms = app.cfg.dealer_delay_ms.saturating_sub(100);
            }
            MenuItem::BetStep => {
                app.cfg.bet_step = app.cfg.bet_step.saturating_sub(5).max(1);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_overlays();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_overlays();
        self.menu_index = 0;
        self.cfg = self.config;
        self.scene = super::Scene::Menu;
    }

    /// Start a fresh session with the edited settings.
    pub fn apply_menu(&mut self) {
        // Ensure invariants
        if self.cfg.starting_chips == 0 {
            self.cfg.starting_chips = 100;
        }
        if self.cfg.bet_step == 0 {
            self.cfg.bet_step = 1;
        }
        self.config = self.cfg;
        self.session = Session::new(&self.config);
        log::info!(
            "new session: {} chips, dealer delay {} ms",
            self.config.starting_chips,
            self.config.dealer_delay_ms
        );
        self.close_overlays();
        let _ = self.handle_input(super::InputAction::BetCancel);
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
