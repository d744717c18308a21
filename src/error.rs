use blackjack::Action;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Invalid bet of {bet} cents: must be positive and at most the bankroll of {bankroll} cents")]
    InvalidBet { bet: u128, bankroll: u128 },

    #[error("{action} is not a legal action for hand {hand_index}")]
    IllegalAction { action: Action, hand_index: usize },

    #[error("Insufficient funds. Required: {needed} cents, Available: {bankroll} cents")]
    InsufficientFunds { needed: u128, bankroll: u128 },

    #[error("Payout on a stake of {stake} cents overflows")]
    PayoutOverflow { stake: u128 },

    #[error("Crediting {amount} cents to a bankroll of {bankroll} cents overflows")]
    BankrollOverflow { amount: u128, bankroll: u128 },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
