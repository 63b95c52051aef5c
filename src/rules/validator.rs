//! Pure, stateless meld and claim validation.
//!
//! Every rule check runs against card slices and returns without mutating
//! anything; the engine calls these before touching state.
//!
//! ## The special rank
//!
//! Rank 7 bends the normal shapes two ways: a lone 7 is a valid meld, and a
//! 7 with one same-suit adjacent neighbor (6-7 or 7-8) is a valid two-card
//! meld. The chi eligibility check has a matching shortcut.

use super::MeldKind;
use crate::core::{Card, SPECIAL_RANK};

/// Check whether a card group is a valid meld.
///
/// - length 1: valid iff the card has the special rank
/// - length 2: valid iff same suit, one special-rank card, adjacent ranks
/// - length >=3: valid iff a set (equal ranks) or a run (one suit, strictly
///   consecutive ranks, no 13->1 wraparound)
#[must_use]
pub fn is_valid_meld(cards: &[Card]) -> bool {
    meld_kind(cards).is_some()
}

/// Classify a card group, or `None` if it is not a valid meld.
#[must_use]
pub fn meld_kind(cards: &[Card]) -> Option<MeldKind> {
    match cards.len() {
        0 => None,
        1 => cards[0].is_special().then_some(MeldKind::SpecialSingle),
        2 => {
            let contains_special = cards.iter().any(|c| c.is_special());
            let same_suit = cards[0].suit == cards[1].suit;
            let adjacent = cards[0].rank.abs_diff(cards[1].rank) == 1;
            (contains_special && same_suit && adjacent).then_some(MeldKind::SpecialPair)
        }
        _ => {
            if is_set(cards) {
                Some(MeldKind::Set)
            } else if is_run(cards) {
                Some(MeldKind::Run)
            } else {
                None
            }
        }
    }
}

/// All cards share one rank, length >=3.
fn is_set(cards: &[Card]) -> bool {
    cards.len() >= 3 && cards.iter().all(|c| c.rank == cards[0].rank)
}

/// One suit, strictly consecutive sorted ranks, length >=3. Rank 13 does not
/// wrap to rank 1.
fn is_run(cards: &[Card]) -> bool {
    if cards.len() < 3 {
        return false;
    }
    if !cards.iter().all(|c| c.suit == cards[0].suit) {
        return false;
    }

    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank).collect();
    ranks.sort_unstable();
    ranks.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Check whether `card` can extend an existing meld at an end.
///
/// Sets accept any card of the set's rank. Runs of length >=3 accept only
/// the rank just below the minimum or just above the maximum, same suit.
/// Single special cards and two-card special pairs are not extendable
/// through this operation.
#[must_use]
pub fn can_extend_meld(meld: &[Card], card: Card) -> bool {
    match meld_kind(meld) {
        Some(MeldKind::Set) => card.rank == meld[0].rank,
        Some(MeldKind::Run) => {
            if card.suit != meld[0].suit {
                return false;
            }
            let min = meld.iter().map(|c| c.rank).min().expect("run is non-empty");
            let max = meld.iter().map(|c| c.rank).max().expect("run is non-empty");
            (min > 1 && card.rank == min - 1) || card.rank == max + 1
        }
        _ => false,
    }
}

/// Pon eligibility: the hand holds at least two cards of the discard's rank.
#[must_use]
pub fn can_claim_set(hand: &[Card], discard: Card) -> bool {
    hand.iter().filter(|c| c.rank == discard.rank).count() >= 2
}

/// Chi eligibility: the discard completes a same-suit run with hand cards.
///
/// Two paths:
/// - special shortcut: the discard or a same-suit hand card is a 7, and
///   rank 6 or rank 8 appears among {discard rank} union same-suit hand
///   ranks
/// - window scan: for offsets -2..=0, the three consecutive ranks starting
///   at `discard.rank + offset` all lie in 1..=13 and every non-discard rank
///   is present among same-suit hand cards
#[must_use]
pub fn can_claim_run(hand: &[Card], discard: Card) -> bool {
    let same_suit_ranks: Vec<u8> = hand
        .iter()
        .filter(|c| c.suit == discard.suit)
        .map(|c| c.rank)
        .collect();

    if discard.rank == SPECIAL_RANK || same_suit_ranks.contains(&SPECIAL_RANK) {
        let present = |rank: u8| discard.rank == rank || same_suit_ranks.contains(&rank);
        if present(SPECIAL_RANK - 1) || present(SPECIAL_RANK + 1) {
            return true;
        }
    }

    run_window(&same_suit_ranks, discard.rank).is_some()
}

/// Hand cards that complete a chi claim on `discard`, in meld order, or
/// `None` if the claim is not possible.
///
/// Prefers the special-rank pairs (6-7, then 7-8) before the generic
/// three-card window, mirroring eligibility. The returned cards come from
/// the hand only; the caller appends the discard and sorts by rank.
#[must_use]
pub fn chi_meld_cards(hand: &[Card], discard: Card) -> Option<Vec<Card>> {
    let same_suit: Vec<Card> = hand
        .iter()
        .filter(|c| c.suit == discard.suit)
        .copied()
        .collect();

    let find = |rank: u8| same_suit.iter().find(|c| c.rank == rank).copied();

    for neighbor in [SPECIAL_RANK - 1, SPECIAL_RANK + 1] {
        // The discard must be one half of the pair, the hand the other.
        let hand_rank = if discard.rank == SPECIAL_RANK {
            neighbor
        } else if discard.rank == neighbor {
            SPECIAL_RANK
        } else {
            continue;
        };
        if let Some(held) = find(hand_rank) {
            return Some(vec![held]);
        }
    }

    let ranks: Vec<u8> = same_suit.iter().map(|c| c.rank).collect();
    let window = run_window(&ranks, discard.rank)?;
    Some(
        window
            .into_iter()
            .filter(|&r| r != discard.rank)
            .filter_map(find)
            .collect(),
    )
}

/// First three-rank window around `target` whose non-target ranks all appear
/// in `ranks`, scanning offsets -2..=0.
fn run_window(ranks: &[u8], target: u8) -> Option<[u8; 3]> {
    for offset in -2i32..=0 {
        let base = i32::from(target) + offset;
        let window = [base, base + 1, base + 2];
        if window.iter().any(|&r| !(1..=13).contains(&r)) {
            continue;
        }
        let covered = window
            .iter()
            .filter(|&&r| r != i32::from(target))
            .all(|&r| ranks.contains(&(r as u8)));
        if covered {
            return Some([window[0] as u8, window[1] as u8, window[2] as u8]);
        }
    }
    None
}
