//! Shared fixtures: stacked deck layouts for reproducible matches.

use seven_bridge::{Card, Deck, Suit, DECK_SIZE, HAND_SIZE};

/// Shorthand card constructor: `c('h', 7)` is the seven of hearts.
pub fn c(suit: char, rank: u8) -> Card {
    let suit = match suit {
        'h' => Suit::Hearts,
        'd' => Suit::Diamonds,
        'c' => Suit::Clubs,
        's' => Suit::Spades,
        other => panic!("unknown suit code {other:?}"),
    };
    Card::new(suit, rank)
}

/// Build a full stacked deck order for `EngineBuilder::stacked_deck`.
///
/// The deal draws round-robin, so `hands[seat]` lands exactly in that seat's
/// hand; `flip` becomes the opening discard and `extra_draws` come off the
/// stock in order afterwards. The remaining pack follows in an arbitrary
/// but fixed order. Panics if any card appears twice.
pub fn stacked_deck(hands: &[[Card; HAND_SIZE]], flip: Card, extra_draws: &[Card]) -> Vec<Card> {
    let mut draw_order: Vec<Card> = Vec::with_capacity(DECK_SIZE);
    for round in 0..HAND_SIZE {
        for hand in hands {
            draw_order.push(hand[round]);
        }
    }
    draw_order.push(flip);
    draw_order.extend_from_slice(extra_draws);

    let named = draw_order.len();
    for (i, card) in draw_order.iter().enumerate() {
        assert!(
            !draw_order[..i].contains(card),
            "card {card} appears twice in the stacked layout"
        );
    }
    let rest: Vec<Card> = Deck::standard()
        .iter()
        .copied()
        .filter(|card| !draw_order[..named].contains(card))
        .collect();
    draw_order.extend(rest);
    assert_eq!(draw_order.len(), DECK_SIZE);

    // The engine draws from the end of the vector.
    draw_order.reverse();
    draw_order
}
