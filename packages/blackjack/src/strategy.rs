use crate::Hand;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
    DoubleDown,
    Split,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Hit, Action::Stand, Action::DoubleDown, Action::Split];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Hit => "HIT",
            Action::Stand => "STAND",
            Action::DoubleDown => "DOUBLE DOWN",
            Action::Split => "SPLIT",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Basic strategy suggestion.
///
/// `dealer_up` is the dealer up-card's strategy value (2..=11, Ace is 11).
/// The rules are checked in a fixed order and the first match wins:
/// pairs (when splitting is allowed), soft totals, hard doubles (when
/// doubling is allowed), then hard hit/stand.
pub fn suggest(hand: &Hand, dealer_up: u8, can_double: bool, can_split: bool) -> Action {
    let total = hand.value();

    if can_split && hand.is_pair() {
        match hand.cards[0].value() {
            // Never split 10s, 5s or 4s
            10 | 5 | 4 => {}
            8 | 11 => return Action::Split,
            _ => {
                if (2..=7).contains(&dealer_up) {
                    return Action::Split;
                }
            }
        }
    }

    if hand.is_soft() {
        return match total {
            0..=17 => Action::Hit,
            18 if matches!(dealer_up, 9..=11) => Action::Hit,
            _ => Action::Stand,
        };
    }

    if can_double {
        match total {
            11 => return Action::DoubleDown,
            10 if dealer_up != 10 && dealer_up != 11 => return Action::DoubleDown,
            9 if (2..=6).contains(&dealer_up) => return Action::DoubleDown,
            _ => {}
        }
    }

    match total {
        0..=11 => Action::Hit,
        12..=16 if (2..=6).contains(&dealer_up) => Action::Stand,
        12..=16 => Action::Hit,
        _ => Action::Stand,
    }
}
