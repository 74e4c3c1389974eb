use crate::game::RoundResult;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WalletError {
    #[error("insufficient funds: requested {requested}, balance {balance}")]
    InsufficientFunds { requested: u64, balance: u64 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BetError {
    #[error("not a number: '{0}'")]
    NotANumber(String),
    #[error("bet must be at least 1")]
    Zero,
    #[error("bet {bet} exceeds balance {balance}")]
    ExceedsBalance { bet: u64, balance: u64 },
}

/// The player's chip balance. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wallet {
    balance: u64,
}

impl Wallet {
    pub fn new(balance: u64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn is_empty(&self) -> bool {
        self.balance == 0
    }

    pub fn deposit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
        log::debug!("{amount} added to balance ({})", self.balance);
    }

    pub fn withdraw(&mut self, amount: u64) -> Result<(), WalletError> {
        if amount > self.balance {
            return Err(WalletError::InsufficientFunds { requested: amount, balance: self.balance });
        }
        self.balance -= amount;
        log::debug!("{amount} taken from balance ({})", self.balance);
        Ok(())
    }

    /// Check a bet against the balance: it must be in `1..=balance`.
    pub fn validate_bet(&self, bet: u64) -> Result<u64, BetError> {
        if bet == 0 {
            return Err(BetError::Zero);
        }
        if bet > self.balance {
            return Err(BetError::ExceedsBalance { bet, balance: self.balance });
        }
        Ok(bet)
    }

    /// Apply a round result to the balance and return the signed change.
    ///
    /// ```
    /// use blackjack_rs::game::RoundResult;
    /// use blackjack_rs::wallet::Wallet;
    ///
    /// let mut w = Wallet::new(100);
    /// assert_eq!(w.settle(10, RoundResult::PlayerBlackjack).unwrap(), 20);
    /// assert_eq!(w.settle(10, RoundResult::HouseWin).unwrap(), -10);
    /// assert_eq!(w.balance(), 110);
    /// ```
    pub fn settle(&mut self, bet: u64, result: RoundResult) -> Result<i64, WalletError> {
        let multiplier = result.payout_multiplier();
        let amount = bet.saturating_mul(multiplier.unsigned_abs());
        if multiplier > 0 {
            self.deposit(amount);
        } else if multiplier < 0 {
            self.withdraw(amount)?;
        }
        let delta = i64::try_from(amount).unwrap_or(i64::MAX);
        Ok(if multiplier < 0 { -delta } else { delta })
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wallet Balance: {}", self.balance)
    }
}
