//! Playing card values: suits, ranks, and point values.
//!
//! Cards are immutable `Copy` values identified by (suit, rank). The closed
//! 52-card system never duplicates an identity, so (suit, rank) doubles as
//! the card's id.
//!
//! Rank 7 is the game's special rank: playable alone as a one-card meld, or
//! with a same-suit adjacent neighbor as a two-card meld, and worth double
//! points when left in a losing hand.

use serde::{Deserialize, Serialize};

/// The rank a card must have to qualify for the single-card and short-pair
/// meld exceptions, and for end-of-game point doubling.
pub const SPECIAL_RANK: u8 = 7;

/// Lowest rank in the deck (Ace).
pub const MIN_RANK: u8 = 1;

/// Highest rank in the deck (King).
pub const MAX_RANK: u8 = 13;

/// Card suit.
///
/// The declaration order (Hearts, Diamonds, Clubs, Spades) is the display
/// sort order used by `Player::sort_hand`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits in sort order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Single-letter code (H, D, C, S).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// An immutable playing card.
///
/// Suit is declared before rank so the derived ordering sorts by suit first,
/// then rank - the hand display order.
///
/// ## Example
///
/// ```
/// use seven_bridge::core::{Card, Suit};
///
/// let seven = Card::new(Suit::Hearts, 7);
/// assert!(seven.is_special());
/// assert_eq!(seven.point_value(), 7);
/// assert_eq!(seven.to_string(), "7♥");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card suit.
    pub suit: Suit,
    /// Card rank: 1 = Ace, 11 = Jack, 12 = Queen, 13 = King.
    pub rank: u8,
}

impl Card {
    /// Create a new card.
    ///
    /// Panics if `rank` is outside 1..=13.
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Self {
        assert!(
            (MIN_RANK..=MAX_RANK).contains(&rank),
            "Card rank must be 1-13, got {rank}"
        );
        Self { suit, rank }
    }

    /// Whether this card carries the special rank (7).
    #[must_use]
    pub const fn is_special(self) -> bool {
        self.rank == SPECIAL_RANK
    }

    /// Scoring value: ranks 1-9 score their rank, 10/J/Q/K score 10.
    ///
    /// The special-rank doubling is applied by `Player::hand_points`, not
    /// here; a 7's face value is 7.
    #[must_use]
    pub const fn point_value(self) -> u32 {
        if self.rank >= 10 {
            10
        } else {
            self.rank as u32
        }
    }

    /// Rank label: A for 1, J/Q/K for 11/12/13, digits otherwise.
    #[must_use]
    pub fn rank_label(self) -> String {
        match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        }
    }

    /// Compact identity code like `7H` or `QS`.
    #[must_use]
    pub fn code(self) -> String {
        format!("{}{}", self.rank_label(), self.suit.code())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_values() {
        assert_eq!(Card::new(Suit::Hearts, 1).point_value(), 1);
        assert_eq!(Card::new(Suit::Hearts, 9).point_value(), 9);
        assert_eq!(Card::new(Suit::Hearts, 10).point_value(), 10);
        assert_eq!(Card::new(Suit::Hearts, 11).point_value(), 10);
        assert_eq!(Card::new(Suit::Hearts, 12).point_value(), 10);
        assert_eq!(Card::new(Suit::Hearts, 13).point_value(), 10);
    }

    #[test]
    fn test_special_rank() {
        assert!(Card::new(Suit::Clubs, 7).is_special());
        assert!(!Card::new(Suit::Clubs, 6).is_special());
        assert!(!Card::new(Suit::Clubs, 8).is_special());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Hearts, 7).to_string(), "7♥");
        assert_eq!(Card::new(Suit::Spades, 1).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Diamonds, 13).to_string(), "K♦");
        assert_eq!(Card::new(Suit::Clubs, 12).to_string(), "Q♣");
    }

    #[test]
    fn test_code() {
        assert_eq!(Card::new(Suit::Hearts, 7).code(), "7H");
        assert_eq!(Card::new(Suit::Spades, 11).code(), "JS");
    }

    #[test]
    fn test_ordering_suit_then_rank() {
        let mut cards = vec![
            Card::new(Suit::Spades, 2),
            Card::new(Suit::Hearts, 13),
            Card::new(Suit::Hearts, 3),
            Card::new(Suit::Diamonds, 1),
        ];
        cards.sort();
        assert_eq!(
            cards,
            vec![
                Card::new(Suit::Hearts, 3),
                Card::new(Suit::Hearts, 13),
                Card::new(Suit::Diamonds, 1),
                Card::new(Suit::Spades, 2),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "Card rank must be 1-13")]
    fn test_rank_out_of_range() {
        let _ = Card::new(Suit::Hearts, 14);
    }

    #[test]
    fn test_serde_roundtrip() {
        let card = Card::new(Suit::Clubs, 7);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
