//! The face-down stock: an ordered pile of cards drawn from the end.
//!
//! The deck only provides primitives; the recycle-from-discard contract is
//! owned by the engine, which moves discard cards back in via `add_cards`
//! and reshuffles.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameRng, Suit, MAX_RANK, MIN_RANK};

/// Cards in a full pack.
pub const DECK_SIZE: usize = 52;

/// Ordered card stock with pop-from-end draw semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full 52-card pack, unshuffled. No jokers.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// A deck with an explicit card order. The last card is drawn first.
    ///
    /// Used to stack the deck for reproducible matches and tests.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle the stock in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw the top card, or `None` if the stock is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `count` cards, stopping early without error if the stock
    /// runs out.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.cards.len());
        self.cards.split_off(self.cards.len() - take)
    }

    /// Append cards to the stock (used when recycling the discard pile).
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Iterate the remaining cards, bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the stock is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
