use blackjack::{Hand, PayoutRatio};
use serde::{Deserialize, Serialize};

use crate::TableError;

/// How a played-out hand ended against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// Player busted; the stake is lost whatever the dealer holds.
    Busted,
    DealerBusted,
    Won,
    Lost,
    Push,
}

/// Result of the natural check made right after the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaturalOutcome {
    BothBlackjack,
    PlayerBlackjack,
    DealerBlackjack,
}

/// Stake plus winnings at `ratio`.
fn returned_with_winnings(ratio: PayoutRatio, stake: u128) -> Result<u128, TableError> {
    ratio
        .calculate_payout(stake)
        .and_then(|payout| payout.checked_add(stake))
        .ok_or(TableError::PayoutOverflow { stake })
}

/// Outcome and amount credited back to the bankroll for one hand.
pub fn settle_hand(hand: &Hand, stake: u128, dealer: &Hand) -> Result<(HandOutcome, u128), TableError> {
    if hand.is_bust() {
        return Ok((HandOutcome::Busted, 0));
    }
    if dealer.is_bust() {
        let win = returned_with_winnings(PayoutRatio::ONE_TO_ONE, stake)?;
        return Ok((HandOutcome::DealerBusted, win));
    }

    let (player_total, dealer_total) = (hand.value(), dealer.value());
    let settled = if player_total > dealer_total {
        (HandOutcome::Won, returned_with_winnings(PayoutRatio::ONE_TO_ONE, stake)?)
    } else if player_total < dealer_total {
        (HandOutcome::Lost, 0)
    } else {
        (HandOutcome::Push, stake)
    };
    Ok(settled)
}

/// Settles the round immediately when either side was dealt a blackjack.
///
/// Returns `None` when neither hand is a natural and play continues.
pub fn settle_natural(
    player: &Hand,
    dealer: &Hand,
    stake: u128,
) -> Result<Option<(NaturalOutcome, u128)>, TableError> {
    let settled = match (player.is_blackjack(), dealer.is_blackjack()) {
        (true, true) => Some((NaturalOutcome::BothBlackjack, stake)),
        (true, false) => Some((
            NaturalOutcome::PlayerBlackjack,
            returned_with_winnings(PayoutRatio::THREE_TO_TWO, stake)?,
        )),
        (false, true) => Some((NaturalOutcome::DealerBlackjack, 0)),
        (false, false) => None,
    };
    Ok(settled)
}
