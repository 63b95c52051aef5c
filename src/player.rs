//! A seat's player: name, hand, and finalized melds.
//!
//! The hand is an unordered-but-sortable collection with set semantics: a
//! card identity never appears twice. Melds are append/extend-only once
//! placed. Players are created at match start and persist across `reset`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Card;
use crate::rules::Meld;

/// One seat's player state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    automated: bool,
    hand: Vec<Card>,
    /// Placed melds. `im::Vector` shares structure with snapshots taken
    /// after every command.
    melds: Vector<Meld>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, automated: bool) -> Self {
        Self {
            name: name.into(),
            automated,
            hand: Vec::new(),
            melds: Vector::new(),
        }
    }

    /// Player display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an AI policy controls this seat.
    #[must_use]
    pub fn is_automated(&self) -> bool {
        self.automated
    }

    /// Current hand contents.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Placed melds in placement order.
    #[must_use]
    pub fn melds(&self) -> &Vector<Meld> {
        &self.melds
    }

    /// Add a card to the hand. Duplicate identities are ignored, preserving
    /// set semantics.
    pub fn add_to_hand(&mut self, card: Card) {
        if !self.hand.contains(&card) {
            self.hand.push(card);
        }
    }

    /// Add several cards to the hand.
    pub fn add_cards_to_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.add_to_hand(card);
        }
    }

    /// Remove a card by identity. Returns the removed card, or `None` if the
    /// hand does not hold it.
    pub fn remove_from_hand(&mut self, card: Card) -> Option<Card> {
        let index = self.hand.iter().position(|c| *c == card)?;
        Some(self.hand.remove(index))
    }

    /// Remove several cards by identity, returning the ones actually held.
    pub fn remove_cards_from_hand(&mut self, cards: &[Card]) -> Vec<Card> {
        cards
            .iter()
            .filter_map(|&card| self.remove_from_hand(card))
            .collect()
    }

    /// Append an already-validated meld group.
    pub fn add_meld(&mut self, meld: Meld) {
        self.melds.push_back(meld);
    }

    /// Extend an existing meld in place. Returns false if the index is out
    /// of range.
    pub fn add_card_to_meld(&mut self, meld_index: usize, card: Card) -> bool {
        match self.melds.get_mut(meld_index) {
            Some(meld) => {
                meld.push(card);
                true
            }
            None => false,
        }
    }

    /// Win condition: no cards left in hand.
    #[must_use]
    pub fn has_empty_hand(&self) -> bool {
        self.hand.is_empty()
    }

    /// End-of-game penalty points for cards still in hand. Special-rank
    /// cards count double; melded cards score nothing.
    #[must_use]
    pub fn hand_points(&self) -> u32 {
        self.hand
            .iter()
            .map(|card| {
                let value = card.point_value();
                if card.is_special() {
                    value * 2
                } else {
                    value
                }
            })
            .sum()
    }

    /// Stable sort by suit then rank, for legible display. Not required by
    /// the rules.
    pub fn sort_hand(&mut self) {
        self.hand.sort();
    }

    /// Clear hand and melds for a match reset. Identity survives.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.melds.clear();
    }
}
