//! Tiered single-ply heuristic policy.
//!
//! The agent is stateless apart from its difficulty tier; every decision is
//! a pure function of the hand, the visible discard, and the injected RNG.
//! Higher tiers are monotonically stronger: Hard is fully deterministic,
//! Normal adds bounded noise, Easy both misses opportunities and discards
//! carelessly.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Card, DrawSource, GameRng, Suit, SPECIAL_RANK};
use crate::rules::{validator, Meld};

/// Penalty applied to a card's discard score per potential meld containing
/// it: cards close to completing a group are kept.
const POTENTIAL_MELD_PENALTY: i32 = 5;

/// Extra discard-score penalty for special-rank cards at tier >= Normal.
const SPECIAL_KEEP_PENALTY: i32 = 10;

/// Probability that an Easy agent acts on a claim-worthy discard draw.
const EASY_DRAW_OPPORTUNITY_P: f64 = 0.5;

/// Probability that an Easy agent discards a fully random card.
const EASY_RANDOM_DISCARD_P: f64 = 0.3;

/// Probability that an Easy agent plays an available meld.
const EASY_MELD_PLAY_P: f64 = 0.7;

/// Pon acceptance probability by tier (Easy, Normal); Hard always accepts.
const PON_ACCEPT_P: [f64; 2] = [0.5, 0.8];

/// Chi acceptance probability by tier (Easy, Normal); Hard always accepts.
const CHI_ACCEPT_P: [f64; 2] = [0.4, 0.7];

/// Difficulty tier for an automated seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// Tier 1: noisy, misses half its opportunities.
    Easy,
    /// Tier 2: acts on opportunities, bounded discard noise.
    Normal,
    /// Tier 3: deterministic.
    Hard,
}

impl Difficulty {
    /// Numeric tier (1-3).
    #[must_use]
    pub const fn tier(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// A decision policy over a player's hand.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AiAgent {
    difficulty: Difficulty,
}

impl AiAgent {
    /// Create an agent at the given tier.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// This agent's tier.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Choose where to draw from. The discard is taken iff claiming it would
    /// complete a set or run; Easy only notices half the time.
    pub fn decide_draw_source(
        &self,
        hand: &[Card],
        discard_top: Option<Card>,
        rng: &mut GameRng,
    ) -> DrawSource {
        let Some(top) = discard_top else {
            return DrawSource::Stock;
        };

        let useful =
            validator::can_claim_set(hand, top) || validator::can_claim_run(hand, top);
        if !useful {
            return DrawSource::Stock;
        }

        if self.difficulty >= Difficulty::Normal || rng.gen_bool(EASY_DRAW_OPPORTUNITY_P) {
            DrawSource::Discard
        } else {
            DrawSource::Stock
        }
    }

    /// Enumerate every currently playable meld: lone special-rank cards,
    /// rank sets of >=3, maximal same-suit runs of >=3, and special-rank
    /// adjacent pairs.
    #[must_use]
    pub fn find_melds(&self, hand: &[Card]) -> Vec<Meld> {
        let mut melds = Vec::new();

        for &card in hand.iter().filter(|c| c.is_special()) {
            melds.push(Meld::from_cards([card]));
        }

        for cards in rank_groups(hand).into_values() {
            if cards.len() >= 3 {
                melds.push(Meld::from_cards(cards));
            }
        }

        for (_, mut cards) in suit_groups(hand) {
            cards.sort_unstable_by_key(|c| c.rank);

            // Maximal consecutive segments of length >= 3. Ranks within a
            // suit are unique in a single pack, so no duplicate handling.
            let mut start = 0;
            for i in 1..=cards.len() {
                let broken =
                    i == cards.len() || cards[i].rank != cards[i - 1].rank + 1;
                if broken {
                    if i - start >= 3 {
                        melds.push(Meld::from_cards(cards[start..i].iter().copied()));
                    }
                    start = i;
                }
            }

            // Special-rank adjacent pairs (6-7, 7-8) within the suit.
            if let Some(&seven) = cards.iter().find(|c| c.is_special()) {
                if let Some(&six) = cards.iter().find(|c| c.rank == SPECIAL_RANK - 1) {
                    melds.push(Meld::from_cards([six, seven]));
                }
                if let Some(&eight) = cards.iter().find(|c| c.rank == SPECIAL_RANK + 1) {
                    melds.push(Meld::from_cards([seven, eight]));
                }
            }
        }

        melds
    }

    /// Near-complete groups used only for discard scoring: rank pairs one
    /// card short of a set, and same-suit card pairs at rank distance 1-2.
    #[must_use]
    pub fn find_potential_melds(&self, hand: &[Card]) -> Vec<Vec<Card>> {
        let mut potential = Vec::new();

        for cards in rank_groups(hand).into_values() {
            if cards.len() == 2 {
                potential.push(cards);
            }
        }

        for (_, mut cards) in suit_groups(hand) {
            cards.sort_unstable_by_key(|c| c.rank);
            for i in 0..cards.len() {
                for j in i + 1..cards.len() {
                    let gap = cards[j].rank - cards[i].rank;
                    if (1..=2).contains(&gap) {
                        potential.push(vec![cards[i], cards[j]]);
                    }
                }
            }
        }

        potential
    }

    /// Pick the card to discard.
    ///
    /// Each card scores its point value minus penalties for being close to a
    /// meld (and for being a 7 at tier >= Normal); high score means safe to
    /// throw. Hard takes the top card, Normal one of the top three, Easy is
    /// noisier still.
    pub fn select_discard(&self, hand: &[Card], rng: &mut GameRng) -> Option<Card> {
        if hand.is_empty() {
            return None;
        }

        let potential = self.find_potential_melds(hand);
        let mut scored: Vec<(Card, i32)> = hand
            .iter()
            .map(|&card| {
                let mut score = card.point_value() as i32;
                for group in &potential {
                    if group.contains(&card) {
                        score -= POTENTIAL_MELD_PENALTY;
                    }
                }
                if self.difficulty >= Difficulty::Normal && card.is_special() {
                    score -= SPECIAL_KEEP_PENALTY;
                }
                (card, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let pick = match self.difficulty {
            Difficulty::Hard => 0,
            Difficulty::Normal => rng.gen_range_usize(0..scored.len().min(3)),
            Difficulty::Easy => {
                if rng.gen_bool(EASY_RANDOM_DISCARD_P) {
                    return Some(hand[rng.gen_range_usize(0..hand.len())]);
                }
                let half = scored.len().div_ceil(2);
                rng.gen_range_usize(0..half)
            }
        };

        Some(scored[pick].0)
    }

    /// Whether to play a found meld this turn.
    pub fn should_play_meld(&self, rng: &mut GameRng) -> bool {
        self.difficulty >= Difficulty::Normal || rng.gen_bool(EASY_MELD_PLAY_P)
    }

    /// Decide whether to pon the discard. Gated on eligibility, then
    /// accepted with tier-dependent probability.
    pub fn decide_pon(&self, hand: &[Card], discard: Card, rng: &mut GameRng) -> bool {
        if !validator::can_claim_set(hand, discard) {
            return false;
        }
        self.accept(PON_ACCEPT_P, rng)
    }

    /// Decide whether to chi the discard. Gated on eligibility, then
    /// accepted with tier-dependent probability.
    pub fn decide_chi(&self, hand: &[Card], discard: Card, rng: &mut GameRng) -> bool {
        if !validator::can_claim_run(hand, discard) {
            return false;
        }
        self.accept(CHI_ACCEPT_P, rng)
    }

    fn accept(&self, probabilities: [f64; 2], rng: &mut GameRng) -> bool {
        match self.difficulty {
            Difficulty::Hard => true,
            Difficulty::Normal => rng.gen_bool(probabilities[1]),
            Difficulty::Easy => rng.gen_bool(probabilities[0]),
        }
    }
}

/// Group hand cards by rank, keys in ascending order.
fn rank_groups(hand: &[Card]) -> std::collections::BTreeMap<u8, Vec<Card>> {
    let mut groups: FxHashMap<u8, Vec<Card>> = FxHashMap::default();
    for &card in hand {
        groups.entry(card.rank).or_default().push(card);
    }
    // BTreeMap keeps enumeration order deterministic across runs.
    groups.into_iter().collect()
}

/// Group hand cards by suit, keys in suit sort order.
fn suit_groups(hand: &[Card]) -> std::collections::BTreeMap<Suit, Vec<Card>> {
    let mut groups: FxHashMap<Suit, Vec<Card>> = FxHashMap::default();
    for &card in hand {
        groups.entry(card.suit).or_default().push(card);
    }
    groups.into_iter().collect()
}
