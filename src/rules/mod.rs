//! Meld groups and the pure rule functions that govern them.

pub mod validator;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Card;

/// Classification of a valid meld group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldKind {
    /// A single special-rank card.
    SpecialSingle,
    /// A special-rank card with one same-suit adjacent neighbor.
    SpecialPair,
    /// Three or more cards of one rank.
    Set,
    /// Three or more same-suit cards with strictly consecutive ranks.
    Run,
}

/// A finalized group of cards placed face-up by a player.
///
/// Melds are append-only once created: cards are added at the ends via
/// `add_to_meld`, never removed. Most groups hold 3-4 cards, so the backing
/// storage is inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    cards: SmallVec<[Card; 4]>,
}

impl Meld {
    /// Create a meld from already-validated cards.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// The cards in this meld, in placement order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Append a card (extension at an end, already validated).
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the meld holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Classify this meld, if it is a valid group.
    #[must_use]
    pub fn kind(&self) -> Option<MeldKind> {
        validator::meld_kind(&self.cards)
    }
}

impl std::fmt::Display for Meld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
