//! A betting session: one wallet, one table, many rounds.
//!
//! The round engine never touches money; the session validates the bet before
//! a round starts and settles it once the engine reports a result.

use crate::engine::{Decision, PlayerAgent, TableObserver};
use crate::game::{DealerStep, Game, GameError, Phase, RoundResult};
use crate::wallet::{BetError, Wallet, WalletError};

/// Table settings, edited from the TUI menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub starting_chips: u64,
    /// Pause before each render / dealer draw. Cosmetic only; 0 disables it.
    pub dealer_delay_ms: u64,
    /// Increment for the +/- keys in bet entry.
    pub bet_step: u64,
    /// Fixed shuffle seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { starting_chips: 1000, dealer_delay_ms: 500, bet_step: 10, seed: None }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Bet(#[from] BetError),
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("a round is already in progress")]
    RoundInProgress,
}

/// Summary of one settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundRecord {
    pub round: u64,
    pub bet: u64,
    pub result: RoundResult,
    pub player_score: u32,
    pub dealer_score: u32,
    pub delta: i64,
    pub balance: u64,
}

#[derive(Debug)]
pub struct Session {
    pub(crate) game: Game,
    wallet: Wallet,
    bet: Option<u64>,
    last_bet: Option<u64>,
    history: Vec<RoundRecord>,
}

impl Session {
    pub fn new(config: &TableConfig) -> Self {
        let game = match config.seed {
            Some(seed) => Game::with_seed(seed),
            None => Game::new(),
        };
        Self::with_game(game, config.starting_chips)
    }

    pub fn with_game(game: Game, starting_chips: u64) -> Self {
        Self { game, wallet: Wallet::new(starting_chips), bet: None, last_bet: None, history: Vec::new() }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn balance(&self) -> u64 {
        self.wallet.balance()
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// Bet riding on the round in progress.
    pub fn bet(&self) -> Option<u64> {
        self.bet
    }

    pub fn last_bet(&self) -> Option<u64> {
        self.last_bet
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn last_record(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    /// Out of chips: no further bet can be placed.
    pub fn is_over(&self) -> bool {
        self.wallet.is_empty() && self.bet.is_none()
    }

    pub fn round_in_progress(&self) -> bool {
        matches!(self.game.phase(), Phase::PlayerTurn | Phase::DealerTurn)
    }

    /// Validate `amount` and deal a round. A natural settles immediately.
    pub fn place_bet(&mut self, amount: u64) -> Result<Phase, SessionError> {
        self.accept_bet(amount)?;
        let phase = self.game.start_round()?;
        self.settle_if_done()?;
        Ok(phase)
    }

    pub fn hit(&mut self) -> Result<Phase, SessionError> {
        let phase = self.game.hit()?;
        self.settle_if_done()?;
        Ok(phase)
    }

    pub fn stand(&mut self) -> Result<Phase, SessionError> {
        Ok(self.game.stand()?)
    }

    pub fn dealer_step(&mut self) -> Result<DealerStep, SessionError> {
        let step = self.game.dealer_step()?;
        self.settle_if_done()?;
        Ok(step)
    }

    /// Play one full round with blocking collaborators and settle it.
    pub fn play_round(
        &mut self,
        amount: u64,
        agent: &mut dyn PlayerAgent,
        observer: &mut dyn TableObserver,
    ) -> Result<RoundRecord, SessionError> {
        self.accept_bet(amount)?;
        let result = self.game.run_round(agent, observer);
        self.settle(result)
    }

    fn accept_bet(&mut self, amount: u64) -> Result<(), SessionError> {
        if self.round_in_progress() {
            return Err(SessionError::RoundInProgress);
        }
        let bet = self.wallet.validate_bet(amount)?;
        self.bet = Some(bet);
        self.last_bet = Some(bet);
        log::debug!("bet {bet} placed (balance {})", self.wallet.balance());
        Ok(())
    }

    fn settle_if_done(&mut self) -> Result<Option<RoundRecord>, SessionError> {
        match self.game.result() {
            Some(result) if self.bet.is_some() => self.settle(result).map(Some),
            _ => Ok(None),
        }
    }

    fn settle(&mut self, result: RoundResult) -> Result<RoundRecord, SessionError> {
        let bet = self.bet.take().unwrap_or(0);
        let delta = self.wallet.settle(bet, result)?;
        let record = RoundRecord {
            round: self.game.rounds_played(),
            bet,
            result,
            player_score: self.game.player_score(),
            dealer_score: self.game.dealer_score(),
            delta,
            balance: self.wallet.balance(),
        };
        log::info!("{}: bet {bet}, {delta:+} -> balance {}", result.label(), record.balance);
        self.history.push(record);
        Ok(record)
    }
}

/// Loose hit/stand parsing: anything starting with H or S, any case.
pub fn parse_decision(input: &str) -> Option<Decision> {
    match input.trim_start().chars().next()?.to_ascii_uppercase() {
        'H' => Some(Decision::Hit),
        'S' => Some(Decision::Stand),
        _ => None,
    }
}

/// Loose yes/no parsing: anything starting with Y or N, any case.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim_start().chars().next()?.to_ascii_uppercase() {
        'Y' => Some(true),
        'N' => Some(false),
        _ => None,
    }
}

/// Parse a positive chip count.
pub fn parse_chips(input: &str) -> Result<u64, BetError> {
    let t = input.trim();
    let v = t.parse::<u64>().map_err(|_| BetError::NotANumber(t.to_string()))?;
    if v == 0 {
        return Err(BetError::Zero);
    }
    Ok(v)
}

/// Parse a bet and check it against `balance`.
///
/// ```
/// use blackjack_rs::session::parse_bet;
/// use blackjack_rs::wallet::BetError;
///
/// assert_eq!(parse_bet(" 25 ", 100), Ok(25));
/// assert_eq!(parse_bet("0", 100), Err(BetError::Zero));
/// assert!(parse_bet("lots", 100).is_err());
/// assert!(parse_bet("101", 100).is_err());
/// ```
pub fn parse_bet(input: &str, balance: u64) -> Result<u64, BetError> {
    Wallet::new(balance).validate_bet(parse_chips(input)?)
}
