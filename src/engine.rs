// Collaborator boundary of the round engine. The engine asks a `PlayerAgent`
// for hit/stand decisions and shows every card-dealing event to a
// `TableObserver`, so consoles, TUIs and tests can plug in without the engine
// knowing about terminals.

use crate::cards::Card;
use crate::score::score;

/// A player's choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
}

impl Decision {
    pub fn is_hit(self) -> bool {
        matches!(self, Decision::Hit)
    }
}

impl From<bool> for Decision {
    /// `true` means hit.
    fn from(hit: bool) -> Self {
        if hit {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}

/// Read-only snapshot of both hands handed to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView<'a> {
    pub dealer: &'a [Card],
    pub player: &'a [Card],
    pub dealer_hidden: bool,
}

impl<'a> TableView<'a> {
    /// Dealer cards the player is allowed to see.
    pub fn dealer_visible(&self) -> &'a [Card] {
        if self.dealer_hidden {
            self.dealer.get(1..).unwrap_or(&[])
        } else {
            self.dealer
        }
    }

    /// Score of the visible dealer cards only.
    pub fn dealer_score_shown(&self) -> u32 {
        score(self.dealer_visible())
    }

    pub fn player_score(&self) -> u32 {
        score(self.player)
    }
}

/// Source of hit/stand decisions, consulted once per player-turn iteration.
pub trait PlayerAgent {
    fn hit_or_stand(&mut self, table: &TableView<'_>) -> Decision;
}

/// Receives the table state after every card-dealing event.
pub trait TableObserver {
    fn render(&mut self, table: &TableView<'_>);
}

impl TableObserver for () {
    fn render(&mut self, _table: &TableView<'_>) {}
}

impl<F> PlayerAgent for F
where
    F: FnMut(&TableView<'_>) -> Decision,
{
    fn hit_or_stand(&mut self, table: &TableView<'_>) -> Decision {
        self(table)
    }
}
