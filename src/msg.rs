use blackjack::{Action, Card, Hand};
use serde::{Deserialize, Serialize};

use crate::money::net_change;
use crate::settlement::{HandOutcome, NaturalOutcome};

/// Actions available on the hand being played. Hit and Stand are always legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalActions {
    pub can_double: bool,
    pub can_split: bool,
}

impl LegalActions {
    pub fn contains(&self, action: Action) -> bool {
        match action {
            Action::Hit | Action::Stand => true,
            Action::DoubleDown => self.can_double,
            Action::Split => self.can_split,
        }
    }

    pub fn actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&action| self.contains(action))
            .collect()
    }
}

/// Everything a decision provider may look at before choosing an action.
#[derive(Debug, Clone, Copy)]
pub struct ActionRequest<'a> {
    pub hand_index: usize,
    pub hand: &'a Hand,
    pub dealer_up: Card,
    pub legal: LegalActions,
    pub suggestion: Action,
}

/// Round notifications pushed to an `EventSink`.
///
/// The dealer's hole card only appears from `DealerRevealed` onwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RoundEvent {
    RoundStarted {
        round: u64,
        stake: u128,
        bankroll: u128,
    },
    InitialDeal {
        player: Hand,
        dealer_up: Card,
    },
    NaturalSettled {
        outcome: NaturalOutcome,
        player: Hand,
        dealer: Hand,
        credit: u128,
    },
    TurnStarted {
        hand_index: usize,
        hand: Hand,
        dealer_up: Card,
    },
    Suggested {
        hand_index: usize,
        action: Action,
    },
    CardDrawn {
        hand_index: usize,
        card: Card,
        hand: Hand,
    },
    DoubledDown {
        hand_index: usize,
        card: Card,
        hand: Hand,
        stake: u128,
    },
    HandSplit {
        hand_index: usize,
        first: Hand,
        second: Hand,
        aces: bool,
    },
    HandBusted {
        hand_index: usize,
    },
    AllHandsBusted,
    DealerRevealed {
        dealer: Hand,
    },
    DealerDrew {
        card: Card,
        dealer: Hand,
    },
    HandSettled {
        hand_index: usize,
        hand: Hand,
        dealer: Hand,
        stake: u128,
        outcome: HandOutcome,
        credit: u128,
    },
    RoundFinished {
        bankroll: u128,
        net: i128,
    },
    OutOfMoney,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand: Hand,
    pub stake: u128,
    pub outcome: HandOutcome,
    pub credit: u128,
}

/// Summary of a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u64,
    pub dealer: Hand,
    /// Set when the round ended on the natural check; `hands` is then empty.
    pub natural: Option<NaturalOutcome>,
    pub hands: Vec<HandResult>,
    pub bankroll_before: u128,
    pub bankroll_after: u128,
}

impl RoundReport {
    pub fn net(&self) -> i128 {
        net_change(self.bankroll_before, self.bankroll_after)
    }
}
