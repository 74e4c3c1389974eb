//! Agents: pluggable sources of hit/stand decisions.
//!
//! The console frontend asks a human through stdin (see `console`); the agents
//! here make decisions without input, for scripted rounds, simulations and
//! tests.

use crate::engine::{Decision, PlayerAgent, TableView};
use crate::score::DEALER_STANDS_ON;
use std::collections::VecDeque;

/// Replays a fixed list of decisions, then stands.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAgent {
    pending: VecDeque<Decision>,
    asked: usize,
}

impl ScriptedAgent {
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self { pending: decisions.into_iter().collect(), asked: 0 }
    }

    /// An agent that stands on its first decision.
    pub fn standing() -> Self {
        Self::default()
    }

    /// How many times the engine asked for a decision.
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl PlayerAgent for ScriptedAgent {
    fn hit_or_stand(&mut self, _table: &TableView<'_>) -> Decision {
        self.asked += 1;
        self.pending.pop_front().unwrap_or(Decision::Stand)
    }
}

/// Hits while the player's score is below a target, like the house rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdAgent {
    stand_on: u32,
}

impl ThresholdAgent {
    pub fn new(stand_on: u32) -> Self {
        Self { stand_on }
    }

    /// Plays the dealer's rule: stand on 17 or more.
    pub fn dealer_rules() -> Self {
        Self::new(DEALER_STANDS_ON)
    }
}

impl PlayerAgent for ThresholdAgent {
    fn hit_or_stand(&mut self, table: &TableView<'_>) -> Decision {
        Decision::from(table.player_score() < self.stand_on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn scripted_agent_stands_when_exhausted() {
        let cards = parse_cards("2♠ 3♠").unwrap();
        let view = TableView { dealer: &cards, player: &cards, dealer_hidden: true };
        let mut agent = ScriptedAgent::new([Decision::Hit]);
        assert_eq!(agent.hit_or_stand(&view), Decision::Hit);
        assert_eq!(agent.hit_or_stand(&view), Decision::Stand);
        assert_eq!(agent.asked(), 2);
    }

    #[test]
    fn threshold_agent_follows_score() {
        let dealer = parse_cards("9♠ 9♥").unwrap();
        let low = parse_cards("10♠ 6♦").unwrap();
        let high = parse_cards("10♠ 7♦").unwrap();
        let mut agent = ThresholdAgent::dealer_rules();
        let view = TableView { dealer: &dealer, player: &low, dealer_hidden: true };
        assert_eq!(agent.hit_or_stand(&view), Decision::Hit);
        let view = TableView { dealer: &dealer, player: &high, dealer_hidden: true };
        assert_eq!(agent.hit_or_stand(&view), Decision::Stand);
    }
}
