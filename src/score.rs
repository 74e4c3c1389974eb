//! Blackjack hand scoring.
//!
//! Aces count 11 until the hand would bust, then they are demoted to 1 one at
//! a time in hand order. A score above 21 is returned as-is and means bust.

use crate::cards::{Card, Rank};

/// The best possible score.
pub const BLACKJACK: u32 = 21;

/// The dealer stops drawing once their score reaches this value.
pub const DEALER_STANDS_ON: u32 = 17;

const ACE_DEMOTION: u32 = 10;

/// Value of a single card with Aces counted high.
pub const fn base_value(card: Card) -> u32 {
    match card.rank() {
        Rank::Ace => 11,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        r => r.value() as u32,
    }
}

/// Score a hand.
///
/// ```
/// use blackjack_rs::cards::parse_cards;
/// use blackjack_rs::score::score;
///
/// assert_eq!(score(&parse_cards("A♠ K♥").unwrap()), 21);
/// assert_eq!(score(&parse_cards("A♠ A♥").unwrap()), 12);
/// assert_eq!(score(&parse_cards("K♠ Q♥ 5♦").unwrap()), 25);
/// ```
pub fn score(cards: &[Card]) -> u32 {
    let mut total: u32 = cards.iter().map(|&c| base_value(c)).sum();
    if total <= BLACKJACK {
        return total;
    }
    for card in cards {
        if card.rank().is_ace() {
            total -= ACE_DEMOTION;
            if total <= BLACKJACK {
                return total;
            }
        }
    }
    total
}

pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// Two-card 21.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}

/// Whether an Ace is still being counted as 11.
pub fn is_soft(cards: &[Card]) -> bool {
    let hard: u32 = cards
        .iter()
        .map(|&c| if c.rank().is_ace() { 1 } else { base_value(c) })
        .sum();
    let s = score(cards);
    s <= BLACKJACK && s != hard
}
