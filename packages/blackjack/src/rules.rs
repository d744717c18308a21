use serde::{Deserialize, Serialize};

/// Dealer draws while below this total, hard or soft.
pub const DEALER_STANDS_ON: u8 = 17;

/// Split hands per round, counting the original.
pub const MAX_HANDS: usize = 2;

/// Blackjack payout multiplier as a ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl PayoutRatio {
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };
    pub const ONE_TO_ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Profit on `bet`, rounded down to the smallest unit. `None` on overflow.
    pub fn calculate_payout(&self, bet: u128) -> Option<u128> {
        bet.checked_mul(self.numerator as u128)
            .map(|scaled| scaled / self.denominator as u128)
    }
}

/// Whether the dealer takes another card at `total`.
pub fn dealer_should_hit(total: u8) -> bool {
    total < DEALER_STANDS_ON
}
