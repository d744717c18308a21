mod card;
mod hand;
mod rules;
mod shoe;
mod strategy;

pub use card::{Card, Rank, Suit};
pub use hand::{calculate_hand_value, can_split_cards, is_blackjack, is_busted, is_soft_hand, Hand};
pub use rules::{dealer_should_hit, PayoutRatio, DEALER_STANDS_ON, MAX_HANDS};
pub use shoe::Shoe;
pub use strategy::{suggest, Action};
