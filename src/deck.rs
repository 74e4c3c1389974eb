use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{HashSet, VecDeque};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: requested {requested}, {remaining} left")]
    Empty { requested: usize, remaining: usize },
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// A standard 52-card deck. Cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    pub const SIZE: usize = 52;

    /// All 52 cards in suit-major order, unshuffled.
    ///
    /// ```
    /// use blackjack_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(Self::SIZE);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push_back(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// A freshly shuffled deck using the thread-local RNG.
    pub fn new() -> Self {
        Self::shuffled(&mut rand::rng())
    }

    /// A freshly shuffled deck drawing randomness from `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_with(rng);
        deck
    }

    /// A stacked deck: cards are drawn in exactly the given order.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for &c in &cards {
            if !seen.insert(c) {
                return Err(DeckError::DuplicateCard(c));
            }
        }
        Ok(Self { cards: cards.into() })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Next card to be drawn, if any.
    pub fn peek(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Draw one card from the front of the deck.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty { requested: 1, remaining: 0 })
    }

    /// Draw `n` cards from the front. Nothing is removed when fewer than `n` remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::Empty { requested: n, remaining: self.cards.len() });
        }
        Ok(self.cards.drain(..n).collect())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1, d2);
        assert_ne!(d1, Deck::standard());
    }

    #[test]
    fn draw_takes_from_the_front() {
        let mut d = Deck::standard();
        let first = d.peek().unwrap();
        assert_eq!(d.draw().unwrap(), first);
        assert_eq!(first, Card::new(Rank::Ace, Suit::Spades));
        let next = d.draw_n(3).unwrap();
        assert_eq!(
            next,
            vec![
                Card::new(Rank::Two, Suit::Spades),
                Card::new(Rank::Three, Suit::Spades),
                Card::new(Rank::Four, Suit::Spades),
            ]
        );
        assert_eq!(d.len(), 48);
    }

    #[test]
    fn overdraw_fails_without_consuming() {
        let mut d = Deck::from_cards(vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ])
        .unwrap();
        assert_eq!(d.draw_n(3), Err(DeckError::Empty { requested: 3, remaining: 2 }));
        assert_eq!(d.len(), 2);
        d.draw_n(2).unwrap();
        assert_eq!(d.draw(), Err(DeckError::Empty { requested: 1, remaining: 0 }));
    }

    #[test]
    fn stacked_deck_rejects_duplicates() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(Deck::from_cards(vec![a, a]), Err(DeckError::DuplicateCard(a)));
    }
}
