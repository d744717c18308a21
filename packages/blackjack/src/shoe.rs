use crate::Card;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Single-deck shoe. Cards are dealt from the back of `cards`.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// A full, unshuffled deck with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// A full, unshuffled deck whose shuffles are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cards: Card::full_deck(),
            rng,
        }
    }

    /// A shoe that deals `order` first to last, then falls back to reshuffled full decks.
    pub fn stacked(order: impl IntoIterator<Item = Card>, seed: u64) -> Self {
        let mut cards: Vec<Card> = order.into_iter().collect();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            log::debug!("Shoe exhausted, reshuffling a fresh deck");
            self.cards = Card::full_deck();
            self.shuffle();
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}
