use blackjack::{Hand, Shoe};
use serde::{Deserialize, Serialize};

use crate::TableError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandStatus {
    Active,
    Stood,
    Busted,
    Doubled,
}

/// A player hand together with its own stake and flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    pub hand: Hand,
    pub stake: u128,
    pub status: HandStatus,
    /// Hands produced by splitting Aces take no further cards.
    pub from_split_aces: bool,
}

impl PlayerHand {
    pub fn new(stake: u128) -> Self {
        Self {
            hand: Hand::new(),
            stake,
            status: HandStatus::Active,
            from_split_aces: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status != HandStatus::Active
    }
}

/// Session context: the player's bankroll and the shoe shared by every round.
#[derive(Debug, Clone)]
pub struct Table {
    pub bankroll: u128,
    pub shoe: Shoe,
    pub rounds_played: u64,
}

impl Table {
    pub fn new(bankroll: u128, shoe: Shoe) -> Self {
        Self {
            bankroll,
            shoe,
            rounds_played: 0,
        }
    }

    /// Table with a freshly shuffled shoe, reproducible when `seed` is given.
    pub fn shuffled(bankroll: u128, seed: Option<u64>) -> Self {
        let mut shoe = match seed {
            Some(seed) => Shoe::seeded(seed),
            None => Shoe::new(),
        };
        shoe.shuffle();
        Self::new(bankroll, shoe)
    }

    pub fn covers(&self, amount: u128) -> bool {
        self.bankroll >= amount
    }

    pub fn debit(&mut self, amount: u128) -> Result<(), TableError> {
        self.bankroll = self
            .bankroll
            .checked_sub(amount)
            .ok_or(TableError::InsufficientFunds {
                needed: amount,
                bankroll: self.bankroll,
            })?;
        Ok(())
    }

    pub fn credit(&mut self, amount: u128) -> Result<(), TableError> {
        self.bankroll = self
            .bankroll
            .checked_add(amount)
            .ok_or(TableError::BankrollOverflow {
                amount,
                bankroll: self.bankroll,
            })?;
        Ok(())
    }
}
