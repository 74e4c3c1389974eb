use crate::cards::Card;
use crate::deck::Deck;
use crate::engine::{PlayerAgent, TableObserver, TableView};
use crate::score::{score, BLACKJACK, DEALER_STANDS_ON};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// No cards dealt for the upcoming round yet.
    Setup,
    PlayerTurn,
    DealerTurn,
    Settled,
}

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundResult {
    PlayerWin,
    PlayerBlackjack,
    HouseWin,
    HouseBlackjack,
    Tie,
}

impl RoundResult {
    /// Multiple of the bet added to (or taken from) the player's balance.
    pub const fn payout_multiplier(self) -> i64 {
        match self {
            RoundResult::PlayerWin => 1,
            RoundResult::PlayerBlackjack => 2,
            RoundResult::HouseWin | RoundResult::HouseBlackjack => -1,
            RoundResult::Tie => 0,
        }
    }

    pub const fn player_won(self) -> bool {
        matches!(self, RoundResult::PlayerWin | RoundResult::PlayerBlackjack)
    }

    pub fn label(self) -> &'static str {
        match self {
            RoundResult::PlayerWin => "Player Wins!",
            RoundResult::PlayerBlackjack => "BLACKJACK!",
            RoundResult::HouseWin => "House Wins!",
            RoundResult::HouseBlackjack => "House Blackjack!",
            RoundResult::Tie => "TIE!",
        }
    }
}

/// Outcome of a single dealer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    Drew(Card),
    Settled(RoundResult),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("action requires {expected:?}, round is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
}

/// Player-vs-dealer round engine.
///
/// The same state machine can be driven in one call with [`Game::run_round`]
/// or one step at a time ([`Game::start_round`], [`Game::hit`],
/// [`Game::stand`], [`Game::dealer_step`]) by event-driven frontends.
///
/// ```
/// use blackjack_rs::engine::{Decision, TableView};
/// use blackjack_rs::game::{Game, Phase};
///
/// let mut game = Game::with_seed(7);
/// let mut stand = |_: &TableView<'_>| Decision::Stand;
/// let result = game.run_round(&mut stand, &mut ());
/// assert_eq!(game.phase(), Phase::Settled);
/// assert_eq!(game.result(), Some(result));
/// ```
#[derive(Debug)]
pub struct Game {
    pub(crate) deck: Deck,
    rng: ChaCha8Rng,
    pub(crate) dealer: Vec<Card>,
    pub(crate) player: Vec<Card>,
    pub(crate) phase: Phase,
    dealer_hidden: bool,
    result: Option<RoundResult>,
    rounds_played: u64,
    reshuffles: u64,
}

impl Game {
    /// A game seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// A reproducible game: the same seed deals the same cards.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// A game that deals from `deck` in order; once it runs out, fresh decks are
    /// shuffled from `seed`.
    pub fn with_deck(deck: Deck, seed: u64) -> Self {
        let mut game = Self::with_seed(seed);
        game.deck = deck;
        game
    }

    fn from_rng(mut rng: ChaCha8Rng) -> Self {
        let deck = Deck::shuffled(&mut rng);
        Self {
            deck,
            rng,
            dealer: Vec::new(),
            player: Vec::new(),
            phase: Phase::Setup,
            dealer_hidden: true,
            result: None,
            rounds_played: 0,
            reshuffles: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    pub fn player_cards(&self) -> &[Card] {
        &self.player
    }

    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer
    }

    pub fn dealer_hidden(&self) -> bool {
        self.dealer_hidden
    }

    pub fn player_score(&self) -> u32 {
        score(&self.player)
    }

    pub fn dealer_score(&self) -> u32 {
        score(&self.dealer)
    }

    pub fn view(&self) -> TableView<'_> {
        TableView { dealer: &self.dealer, player: &self.player, dealer_hidden: self.dealer_hidden }
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// How many times an exhausted deck was replaced.
    pub fn reshuffles(&self) -> u64 {
        self.reshuffles
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Play a whole round, blocking on `agent` for each player decision.
    pub fn run_round(
        &mut self,
        agent: &mut dyn PlayerAgent,
        observer: &mut dyn TableObserver,
    ) -> RoundResult {
        self.setup_round();
        observer.render(&self.view());
        if let Some(result) = self.check_naturals() {
            observer.render(&self.view());
            return result;
        }

        while self.player_score() <= BLACKJACK {
            if !agent.hit_or_stand(&self.view()).is_hit() {
                self.begin_dealer_turn();
                observer.render(&self.view());
                while self.dealer_needs_card() {
                    self.hit_dealer();
                    observer.render(&self.view());
                }
                return self.settle_dealer_turn();
            }
            self.hit_player();
            observer.render(&self.view());
        }
        self.finish(RoundResult::HouseWin)
    }

    /// Deal a new round. Settles immediately on a natural.
    ///
    /// Fails while a round is still being played.
    pub fn start_round(&mut self) -> Result<Phase, GameError> {
        if matches!(self.phase, Phase::PlayerTurn | Phase::DealerTurn) {
            return Err(GameError::WrongPhase { expected: Phase::Settled, actual: self.phase });
        }
        self.setup_round();
        let _ = self.check_naturals();
        Ok(self.phase)
    }

    /// Draw one card for the player. A bust settles the round as a house win.
    pub fn hit(&mut self) -> Result<Phase, GameError> {
        self.expect_phase(Phase::PlayerTurn)?;
        self.hit_player();
        if self.player_score() > BLACKJACK {
            self.finish(RoundResult::HouseWin);
        }
        Ok(self.phase)
    }

    /// End the player's turn and reveal the dealer's hand.
    pub fn stand(&mut self) -> Result<Phase, GameError> {
        self.expect_phase(Phase::PlayerTurn)?;
        self.begin_dealer_turn();
        Ok(self.phase)
    }

    /// Advance the dealer by one move: draw while under 17, otherwise settle.
    pub fn dealer_step(&mut self) -> Result<DealerStep, GameError> {
        self.expect_phase(Phase::DealerTurn)?;
        if self.dealer_needs_card() {
            Ok(DealerStep::Drew(self.hit_dealer()))
        } else {
            Ok(DealerStep::Settled(self.settle_dealer_turn()))
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::WrongPhase { expected, actual: self.phase });
        }
        Ok(())
    }

    fn setup_round(&mut self) {
        self.dealer.clear();
        self.player.clear();
        self.result = None;
        self.dealer_hidden = true;
        for _ in 0..2 {
            let d = self.draw_card();
            self.dealer.push(d);
            let p = self.draw_card();
            self.player.push(p);
        }
        self.phase = Phase::PlayerTurn;
        log::debug!(
            "dealt player {} {} / dealer [hidden] {}",
            self.player[0],
            self.player[1],
            self.dealer[1]
        );
    }

    fn check_naturals(&mut self) -> Option<RoundResult> {
        let player = self.player_score();
        let dealer = self.dealer_score();
        let result = if player == BLACKJACK {
            if dealer == BLACKJACK {
                RoundResult::Tie
            } else {
                RoundResult::PlayerBlackjack
            }
        } else if dealer == BLACKJACK {
            RoundResult::HouseBlackjack
        } else {
            return None;
        };
        self.dealer_hidden = false;
        Some(self.finish(result))
    }

    fn hit_player(&mut self) {
        let card = self.draw_card();
        self.player.push(card);
        log::debug!("player draws {card} ({})", self.player_score());
    }

    fn begin_dealer_turn(&mut self) {
        self.dealer_hidden = false;
        self.phase = Phase::DealerTurn;
        log::debug!("player stands on {}", self.player_score());
    }

    fn dealer_needs_card(&self) -> bool {
        self.dealer_score() < DEALER_STANDS_ON
    }

    fn hit_dealer(&mut self) -> Card {
        let card = self.draw_card();
        self.dealer.push(card);
        log::debug!("dealer draws {card} ({})", self.dealer_score());
        card
    }

    fn settle_dealer_turn(&mut self) -> RoundResult {
        let dealer = self.dealer_score();
        let player = self.player_score();
        let result = if dealer > BLACKJACK || dealer < player {
            RoundResult::PlayerWin
        } else if dealer > player {
            RoundResult::HouseWin
        } else {
            RoundResult::Tie
        };
        self.finish(result)
    }

    fn finish(&mut self, result: RoundResult) -> RoundResult {
        self.phase = Phase::Settled;
        self.result = Some(result);
        self.rounds_played += 1;
        log::info!(
            "round {} settled: {result:?} (player {}, dealer {})",
            self.rounds_played,
            self.player_score(),
            self.dealer_score()
        );
        result
    }

    /// Draw the next card, replacing an exhausted deck with a fresh shuffled one.
    pub(crate) fn draw_card(&mut self) -> Card {
        loop {
            if self.deck.is_empty() {
                self.deck = Deck::shuffled(&mut self.rng);
                self.reshuffles += 1;
                log::info!("deck exhausted, reshuffled a fresh deck");
            }
            if let Ok(card) = self.deck.draw() {
                return card;
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
