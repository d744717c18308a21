use crate::Card;
use serde::{Deserialize, Serialize};

/// Total after demoting Aces, and whether an Ace is still counted as 11.
fn demoted_total(cards: &[Card]) -> (u8, bool) {
    let mut total: u16 = 0;
    let mut aces = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total += card.value() as u16;
    }

    // Count aces as 1 one at a time until the hand fits
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (total.min(u8::MAX as u16) as u8, aces > 0 && total <= 21)
}

/// Calculate the value of a blackjack hand
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    demoted_total(cards).0
}

/// Check if a hand is soft (has an ace counted as 11)
pub fn is_soft_hand(cards: &[Card]) -> bool {
    demoted_total(cards).1
}

/// Check if a hand is busted
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > 21
}

/// Check if a hand is blackjack (21 with 2 cards)
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == 21
}

/// Two cards form a pair when their strategy values match, so K and Q pair up.
pub fn can_split_cards(card1: &Card, card2: &Card) -> bool {
    card1.value() == card2.value()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && can_split_cards(&self.cards[0], &self.cards[1])
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_card(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }

    pub fn to_display(&self) -> String {
        self.cards
            .iter()
            .map(Card::to_display)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
