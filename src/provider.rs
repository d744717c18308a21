use blackjack::Action;

use crate::msg::{ActionRequest, RoundEvent};
use crate::TableError;

/// Supplies the player's decisions. Implementations must only return legal values:
/// a bet in `1..=bankroll` and an action contained in `request.legal`.
pub trait DecisionProvider {
    /// Stake for the next round, or `None` to leave the table before it starts.
    fn request_bet(&mut self, bankroll: u128) -> Option<u128>;

    fn request_action(&mut self, request: &ActionRequest<'_>) -> Action;

    fn request_play_again(&mut self) -> bool;
}

/// Receives round notifications. Purely observational.
pub trait EventSink {
    fn notify(&mut self, event: &RoundEvent);
}

impl EventSink for () {
    fn notify(&mut self, _event: &RoundEvent) {}
}

impl EventSink for Vec<RoundEvent> {
    fn notify(&mut self, event: &RoundEvent) {
        self.push(event.clone());
    }
}

impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn notify(&mut self, event: &RoundEvent) {
        self.0.notify(event);
        self.1.notify(event);
    }
}

impl<S: EventSink> EventSink for Option<S> {
    fn notify(&mut self, event: &RoundEvent) {
        if let Some(sink) = self {
            sink.notify(event);
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn notify(&mut self, event: &RoundEvent) {
        (**self).notify(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn notify(&mut self, event: &RoundEvent) {
        (**self).notify(event);
    }
}

/// Plays every hand by the advisor's suggestion with a flat bet, for a fixed number of rounds.
#[derive(Debug, Clone)]
pub struct AdvisorPlayer {
    flat_bet: u128,
    rounds: u64,
    played: u64,
}

impl AdvisorPlayer {
    pub fn new(flat_bet: u128, rounds: u64) -> Result<Self, TableError> {
        if flat_bet == 0 {
            return Err(TableError::InvalidAmount("flat bet must be positive".to_string()));
        }
        if rounds == 0 {
            return Err(TableError::InvalidAmount("round count must be positive".to_string()));
        }
        Ok(Self {
            flat_bet,
            rounds,
            played: 0,
        })
    }

    pub fn rounds_played(&self) -> u64 {
        self.played
    }
}

impl DecisionProvider for AdvisorPlayer {
    fn request_bet(&mut self, bankroll: u128) -> Option<u128> {
        if self.played >= self.rounds {
            return None;
        }
        self.played += 1;
        Some(self.flat_bet.min(bankroll))
    }

    fn request_action(&mut self, request: &ActionRequest<'_>) -> Action {
        request.suggestion
    }

    fn request_play_again(&mut self) -> bool {
        self.played < self.rounds
    }
}
