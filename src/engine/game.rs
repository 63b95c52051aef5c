//! The turn/claim state machine.
//!
//! `GameEngine` is the sole mutator of match state. Every public command
//! validates fully before touching anything: hard failures return
//! `Err(GameError)` and leave the state untouched, recoverable rejections
//! (card not in hand, invalid meld) return `Ok(false)`. Automated seats are
//! driven to completion inside the command that hands them the turn, so
//! control always returns with either a manual seat to act, an open claim
//! window, or a finished match.
//!
//! ## Claim windows
//!
//! After a discard, every other seat is checked for pon and the discarder's
//! immediate next seat for chi. Automated seats decide on the spot. If any
//! eligible seat is manual, the engine parks in `ClaimWindow` status with an
//! explicit deadline; the caller either submits `resolve_claim` or keeps
//! calling `poll_claim_window` with the current time. A timed-out window
//! still honors the automated claims collected when it opened.

use std::time::{Duration, Instant};

use im::Vector;
use std::collections::VecDeque;
use tracing::{debug, info};

use crate::ai::{AiAgent, Difficulty, SeatController};
use crate::core::{Card, DrawSource, GameError, GameRng, GameStatus, SeatId, SeatMap, TurnPhase};
use crate::deck::{Deck, DECK_SIZE};
use crate::engine::claim::ClaimWindow;
use crate::engine::snapshot::{
    ClaimOutcome, GameSnapshot, MatchResult, Notification, SeatScore, SeatSummary,
};
use crate::player::Player;
use crate::rules::{validator, Meld};

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 7;

/// Seats a match may hold.
pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 6;

const DEFAULT_CLAIM_TIME_LIMIT: Duration = Duration::from_secs(3);

// Seat 0 belongs to the local manual player; snapshots reveal its hand.
const LOCAL_SEAT: SeatId = SeatId::new(0);

/// The most recent discard, kept for claim evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastDiscard {
    pub card: Card,
    pub seat: SeatId,
}

/// Configures and builds a [`GameEngine`].
///
/// ```
/// use seven_bridge::{Difficulty, EngineBuilder};
///
/// let mut game = EngineBuilder::new()
///     .seat_count(4)
///     .difficulty(Difficulty::Normal)
///     .build(42);
/// game.start_game().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct EngineBuilder {
    seat_count: usize,
    difficulty: Difficulty,
    claim_time_limit: Duration,
    automated_seats: Option<usize>,
    stacked_deck: Option<Vec<Card>>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            seat_count: 4,
            difficulty: Difficulty::Easy,
            claim_time_limit: DEFAULT_CLAIM_TIME_LIMIT,
            automated_seats: None,
            stacked_deck: None,
        }
    }

    /// Number of seats. Panics outside `2..=6`.
    #[must_use]
    pub fn seat_count(mut self, seat_count: usize) -> Self {
        assert!(
            (MIN_SEATS..=MAX_SEATS).contains(&seat_count),
            "seat count must be within {MIN_SEATS}..={MAX_SEATS}, got {seat_count}"
        );
        self.seat_count = seat_count;
        self
    }

    /// Difficulty shared by every automated seat.
    #[must_use]
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// How long a manual seat has to act on an open claim window.
    #[must_use]
    pub fn claim_time_limit(mut self, limit: Duration) -> Self {
        self.claim_time_limit = limit;
        self
    }

    /// Number of automated seats, filled from the highest seat downward.
    /// Defaults to all seats except seat 0. Seat 0 is always manual.
    #[must_use]
    pub fn automated_seats(mut self, automated: usize) -> Self {
        self.automated_seats = Some(automated);
        self
    }

    /// Use a fixed deck order instead of shuffling. The last card in the
    /// vector is drawn first. Panics unless exactly 52 cards are given.
    #[must_use]
    pub fn stacked_deck(mut self, cards: Vec<Card>) -> Self {
        assert_eq!(cards.len(), DECK_SIZE, "a stacked deck must hold {DECK_SIZE} cards");
        self.stacked_deck = Some(cards);
        self
    }

    /// Build the engine with a deterministic seed.
    #[must_use]
    pub fn build(self, seed: u64) -> GameEngine {
        let automated = self.automated_seats.unwrap_or(self.seat_count - 1);
        assert!(
            automated < self.seat_count,
            "seat 0 is always manual; at most {} automated seats",
            self.seat_count - 1
        );
        let manual = self.seat_count - automated;

        let rng = GameRng::new(seed);
        let mut shuffle_rng = rng.for_context("shuffle");
        let ai_rng = rng.for_context("ai");

        let difficulty = self.difficulty;
        let controllers = SeatMap::new(self.seat_count, |seat| {
            if seat.index() < manual {
                SeatController::Manual
            } else {
                SeatController::Automated(AiAgent::new(difficulty))
            }
        });
        let players = SeatMap::new(self.seat_count, |seat| {
            if seat == LOCAL_SEAT {
                Player::new("You", false)
            } else if seat.index() < manual {
                Player::new(format!("Player {}", seat.index()), false)
            } else {
                Player::new(format!("AI {}", seat.index() - manual + 1), true)
            }
        });

        let stock = match &self.stacked_deck {
            Some(cards) => Deck::from_cards(cards.clone()),
            None => {
                let mut deck = Deck::standard();
                deck.shuffle(&mut shuffle_rng);
                deck
            }
        };

        GameEngine {
            status: GameStatus::Waiting,
            phase: None,
            current_seat: LOCAL_SEAT,
            stock,
            discard_pile: Vector::new(),
            last_discard: None,
            players,
            controllers,
            claim: None,
            claim_time_limit: self.claim_time_limit,
            stacked_deck: self.stacked_deck,
            shuffle_rng,
            ai_rng,
            notifications: VecDeque::new(),
            result: None,
        }
    }
}

/// A running (or finished) match.
pub struct GameEngine {
    status: GameStatus,
    phase: Option<TurnPhase>,
    current_seat: SeatId,
    stock: Deck,
    discard_pile: Vector<Card>,
    last_discard: Option<LastDiscard>,
    players: SeatMap<Player>,
    controllers: SeatMap<SeatController>,
    claim: Option<ClaimWindow>,
    claim_time_limit: Duration,
    stacked_deck: Option<Vec<Card>>,
    shuffle_rng: GameRng,
    ai_rng: GameRng,
    notifications: VecDeque<Notification>,
    result: Option<MatchResult>,
}

impl GameEngine {
    // ---- commands ----------------------------------------------------

    /// Deal and hand the first turn to seat 0.
    ///
    /// Automated seats never hold the first turn (seat 0 is manual), but
    /// the transition is driven generically all the same.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Waiting {
            return Err(self.phase_violation());
        }
        self.status = GameStatus::Dealing;
        self.emit_state();

        let seat_count = self.players.seat_count();
        for _ in 0..HAND_SIZE {
            for seat in SeatId::all(seat_count) {
                let card = self.stock.draw().ok_or(GameError::Exhaustion)?;
                self.players[seat].add_to_hand(card);
            }
        }
        for seat in SeatId::all(seat_count) {
            self.players[seat].sort_hand();
        }
        let flip = self.stock.draw().ok_or(GameError::Exhaustion)?;
        self.discard_pile.push_back(flip);
        info!(seats = seat_count, flip = %flip, "match started");

        self.begin_turn(LOCAL_SEAT)?;
        self.emit_state();
        Ok(())
    }

    /// Return to `Waiting` with a fresh deck. Seat identities survive.
    pub fn reset(&mut self) {
        self.stock = match &self.stacked_deck {
            Some(cards) => Deck::from_cards(cards.clone()),
            None => {
                let mut deck = Deck::standard();
                deck.shuffle(&mut self.shuffle_rng);
                deck
            }
        };
        self.discard_pile = Vector::new();
        self.last_discard = None;
        self.claim = None;
        self.result = None;
        for (_, player) in self.players.iter_mut() {
            player.clear();
        }
        self.status = GameStatus::Waiting;
        self.phase = None;
        self.current_seat = LOCAL_SEAT;
        info!("match reset");
        self.emit_state();
    }

    /// Draw a card for the current seat. Draw phase only.
    ///
    /// An empty stock recycles the discard pile: the top discard stays
    /// visible, the rest are reshuffled into the stock and the draw retried
    /// once. A single-card (or empty) discard pile means the cards have
    /// genuinely run out.
    pub fn draw_card(&mut self, source: DrawSource) -> Result<Card, GameError> {
        self.ensure_turn_phase(&[TurnPhase::Draw])?;
        let card = match source {
            DrawSource::Stock => self.draw_from_stock()?,
            DrawSource::Discard => {
                self.discard_pile.pop_back().ok_or(GameError::EmptyDiscard)?
            }
        };
        let seat = self.current_seat;
        self.players[seat].add_to_hand(card);
        self.players[seat].sort_hand();
        self.phase = Some(TurnPhase::Meld);
        debug!(%seat, %source, "card drawn");
        self.notify(Notification::CardDrawn { seat, source });
        self.emit_state();
        Ok(card)
    }

    /// Lay a meld from the current seat's hand. Meld or Discard phase.
    ///
    /// Returns `Ok(false)` if the cards do not form a meld or are not all
    /// in hand; nothing moves in that case.
    pub fn play_meld(&mut self, cards: &[Card]) -> Result<bool, GameError> {
        self.ensure_turn_phase(&[TurnPhase::Meld, TurnPhase::Discard])?;
        if !validator::is_valid_meld(cards) {
            return Ok(false);
        }
        let distinct = cards
            .iter()
            .enumerate()
            .all(|(i, card)| !cards[..i].contains(card));
        let seat = self.current_seat;
        if !distinct || !cards.iter().all(|card| self.players[seat].hand().contains(card)) {
            return Ok(false);
        }

        let removed = self.players[seat].remove_cards_from_hand(cards);
        let meld = Meld::from_cards(removed);
        debug!(%seat, %meld, "meld played");
        self.players[seat].add_meld(meld.clone());
        self.notify(Notification::MeldPlayed { seat, meld });

        if self.players[seat].has_empty_hand() {
            self.end_game(seat);
        }
        self.emit_state();
        Ok(true)
    }

    /// Add one hand card to an existing meld on ANY seat's board.
    ///
    /// Extending other seats' melds is allowed; that is how stuck hands
    /// drain. Returns `Ok(false)` when the target does not exist, the card
    /// does not extend it, or the card is not in hand.
    pub fn add_to_meld(
        &mut self,
        meld_index: usize,
        owner: SeatId,
        card: Card,
    ) -> Result<bool, GameError> {
        self.ensure_turn_phase(&[TurnPhase::Meld, TurnPhase::Discard])?;
        if owner.index() >= self.players.seat_count() {
            return Ok(false);
        }
        let extendable = match self.players[owner].melds().get(meld_index) {
            Some(meld) => validator::can_extend_meld(meld.cards(), card),
            None => return Ok(false),
        };
        if !extendable {
            return Ok(false);
        }
        let seat = self.current_seat;
        let Some(removed) = self.players[seat].remove_from_hand(card) else {
            return Ok(false);
        };
        self.players[owner].add_card_to_meld(meld_index, removed);
        debug!(%seat, %owner, meld_index, card = %removed, "meld extended");
        self.notify(Notification::MeldExtended {
            seat,
            owner,
            meld_index,
            card: removed,
        });

        if self.players[seat].has_empty_hand() {
            self.end_game(seat);
        }
        self.emit_state();
        Ok(true)
    }

    /// Discard a hand card, ending the current seat's turn.
    ///
    /// An emptied hand wins immediately and no claim window opens for the
    /// final discard. Otherwise claim opportunities are evaluated and the
    /// turn passes (possibly through a claim window).
    pub fn discard_card(&mut self, card: Card) -> Result<bool, GameError> {
        self.ensure_turn_phase(&[TurnPhase::Meld, TurnPhase::Discard])?;
        let seat = self.current_seat;
        let Some(removed) = self.players[seat].remove_from_hand(card) else {
            return Ok(false);
        };
        self.discard_pile.push_back(removed);
        self.last_discard = Some(LastDiscard { card: removed, seat });
        debug!(%seat, card = %removed, "card discarded");
        self.notify(Notification::CardDiscarded { seat, card: removed });

        if self.players[seat].has_empty_hand() {
            self.end_game(seat);
        } else {
            self.evaluate_claims()?;
        }
        self.emit_state();
        Ok(true)
    }

    /// Resolve the open claim window with the manual seats' answers.
    ///
    /// `(None, None)` is an explicit pass. Submitted seats must have been
    /// eligible when the window opened; anything else is a hard error and
    /// the window stays open. Automated claims collected at window open
    /// fill in wherever a manual seat passed, and pon strictly beats chi.
    pub fn resolve_claim(
        &mut self,
        pon: Option<SeatId>,
        chi: Option<SeatId>,
    ) -> Result<(), GameError> {
        if self.status != GameStatus::ClaimWindow {
            return Err(self.phase_violation());
        }
        let Some(window) = &self.claim else {
            return Err(self.phase_violation());
        };
        if pon.is_some_and(|seat| !window.may_pon(seat))
            || chi.is_some_and(|seat| !window.may_chi(seat))
        {
            return Err(self.phase_violation());
        }
        let window = self.claim.take().ok_or_else(|| self.phase_violation())?;
        let effective_pon = pon.or(window.ai_pon);
        let effective_chi = chi.or(window.ai_chi);
        self.apply_claim(effective_pon, effective_chi, window.discarder)?;
        self.emit_state();
        Ok(())
    }

    /// Expire the claim window if `now` has passed its deadline.
    ///
    /// Returns `Ok(true)` when a window actually resolved. Manual seats
    /// that stayed silent count as passing; automated claims still apply.
    /// Safe to call at any time.
    pub fn poll_claim_window(&mut self, now: Instant) -> Result<bool, GameError> {
        let expired = self.claim.as_ref().is_some_and(|window| window.expired(now));
        if !expired {
            return Ok(false);
        }
        let Some(window) = self.claim.take() else {
            return Ok(false);
        };
        info!(card = %window.card, "claim window timed out");
        self.apply_claim(window.ai_pon, window.ai_chi, window.discarder)?;
        self.emit_state();
        Ok(true)
    }

    // ---- observers ---------------------------------------------------

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn phase(&self) -> Option<TurnPhase> {
        self.phase
    }

    #[must_use]
    pub fn current_seat(&self) -> SeatId {
        self.current_seat
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.players.seat_count()
    }

    #[must_use]
    pub fn stock_count(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard_pile
    }

    #[must_use]
    pub fn player(&self, seat: SeatId) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn last_discard(&self) -> Option<LastDiscard> {
        self.last_discard
    }

    /// The open claim window, if the match is parked on one.
    #[must_use]
    pub fn claim_window(&self) -> Option<&ClaimWindow> {
        self.claim.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Drain queued notifications in emission order.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    /// Snapshot the match as seen from the local seat.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let seats = self
            .players
            .iter()
            .map(|(_, player)| SeatSummary {
                name: player.name().to_owned(),
                hand_size: player.hand().len(),
                melds: player.melds().clone(),
                automated: player.is_automated(),
            })
            .collect();
        GameSnapshot {
            status: self.status,
            phase: self.phase,
            current_seat: self.current_seat,
            stock_count: self.stock.len(),
            discard_pile: self.discard_pile.clone(),
            seats,
            local_seat: LOCAL_SEAT,
            local_hand: self.players[LOCAL_SEAT].hand().to_vec(),
        }
    }

    /// Debugging aid: every card accounted for exactly once across stock,
    /// discard pile, hands, and melds.
    #[must_use]
    pub fn conservation_holds(&self) -> bool {
        let mut seen: Vec<Card> = Vec::with_capacity(DECK_SIZE);
        seen.extend(self.stock.iter().copied());
        seen.extend(self.discard_pile.iter().copied());
        for (_, player) in self.players.iter() {
            seen.extend(player.hand().iter().copied());
            for meld in player.melds() {
                seen.extend(meld.cards().iter().copied());
            }
        }
        if seen.len() != DECK_SIZE {
            return false;
        }
        seen.sort_unstable();
        seen.windows(2).all(|pair| pair[0] != pair[1])
    }

    // ---- internals ---------------------------------------------------

    fn phase_violation(&self) -> GameError {
        GameError::PhaseViolation {
            status: self.status,
            phase: self.phase,
        }
    }

    fn ensure_turn_phase(&self, allowed: &[TurnPhase]) -> Result<(), GameError> {
        let in_turn = matches!(self.status, GameStatus::PlayerTurn | GameStatus::AiTurn);
        match self.phase {
            Some(phase) if in_turn && allowed.contains(&phase) => Ok(()),
            _ => Err(self.phase_violation()),
        }
    }

    fn seat_status(&self, seat: SeatId) -> GameStatus {
        if self.controllers[seat].is_automated() {
            GameStatus::AiTurn
        } else {
            GameStatus::PlayerTurn
        }
    }

    fn draw_from_stock(&mut self) -> Result<Card, GameError> {
        if let Some(card) = self.stock.draw() {
            return Ok(card);
        }
        if self.discard_pile.len() <= 1 {
            return Err(GameError::Exhaustion);
        }
        // Keep the top discard visible, reshuffle the rest under it.
        let top = self.discard_pile.pop_back();
        let mut recycled: Vec<Card> = self.discard_pile.iter().copied().collect();
        self.discard_pile = Vector::new();
        self.discard_pile.extend(top);
        self.shuffle_rng.shuffle(&mut recycled);
        self.stock.add_cards(recycled);
        info!(count = self.stock.len(), "discard pile recycled into stock");
        self.stock.draw().ok_or(GameError::Exhaustion)
    }

    fn begin_turn(&mut self, seat: SeatId) -> Result<(), GameError> {
        self.current_seat = seat;
        self.phase = Some(TurnPhase::Draw);
        self.status = self.seat_status(seat);
        debug!(%seat, "turn begins");
        if self.status == GameStatus::AiTurn {
            self.run_ai_turn()?;
        }
        Ok(())
    }

    fn advance_from(&mut self, seat: SeatId) -> Result<(), GameError> {
        if self.status == GameStatus::GameOver {
            return Ok(());
        }
        let next = seat.next(self.players.seat_count());
        self.begin_turn(next)
    }

    /// Play out one automated turn. The trailing `discard_card` hands the
    /// turn onward, so successive automated seats unwind as nested calls
    /// until a manual seat, a claim window, or the end of the match stops
    /// the chain. The chain is bounded: seat 0 is always manual.
    fn run_ai_turn(&mut self) -> Result<(), GameError> {
        let seat = self.current_seat;
        let Some(agent) = self.controllers[seat].agent().copied() else {
            return Ok(());
        };

        let top = self.discard_pile.last().copied();
        let source = agent.decide_draw_source(self.players[seat].hand(), top, &mut self.ai_rng);
        self.draw_card(source)?;

        let mut melds = agent.find_melds(self.players[seat].hand());
        if !melds.is_empty() && agent.should_play_meld(&mut self.ai_rng) {
            melds.sort_by_key(|meld| std::cmp::Reverse(meld.len()));
            let best = melds.swap_remove(0);
            self.play_meld(best.cards())?;
            if self.status == GameStatus::GameOver {
                return Ok(());
            }
        }

        if let Some(card) = agent.select_discard(self.players[seat].hand(), &mut self.ai_rng) {
            self.discard_card(card)?;
        }
        Ok(())
    }

    /// Check claim opportunities for the freshest discard and either resolve
    /// them immediately (only automated seats involved) or open a window.
    fn evaluate_claims(&mut self) -> Result<(), GameError> {
        let Some(LastDiscard { card, seat: discarder }) = self.last_discard else {
            return Ok(());
        };
        let seat_count = self.players.seat_count();
        let chi_candidate = discarder.next(seat_count);

        let mut pon_seats = Vec::new();
        let mut chi_seat = None;
        let mut manual_pon = Vec::new();
        let mut manual_chi = None;
        let mut ai_pon = None;
        let mut ai_chi = None;

        for seat in SeatId::all(seat_count) {
            if seat == discarder {
                continue;
            }
            if validator::can_claim_set(self.players[seat].hand(), card) {
                pon_seats.push(seat);
                match &self.controllers[seat] {
                    SeatController::Manual => manual_pon.push(seat),
                    SeatController::Automated(agent) => {
                        // First accepting automated seat in seat order wins.
                        if ai_pon.is_none()
                            && agent.decide_pon(self.players[seat].hand(), card, &mut self.ai_rng)
                        {
                            ai_pon = Some(seat);
                        }
                    }
                }
            }
            if seat == chi_candidate && validator::can_claim_run(self.players[seat].hand(), card) {
                chi_seat = Some(seat);
                match &self.controllers[seat] {
                    SeatController::Manual => manual_chi = Some(seat),
                    SeatController::Automated(agent) => {
                        if agent.decide_chi(self.players[seat].hand(), card, &mut self.ai_rng) {
                            ai_chi = Some(seat);
                        }
                    }
                }
            }
        }

        if pon_seats.is_empty() && chi_seat.is_none() {
            return self.advance_from(discarder);
        }

        self.notify(Notification::ClaimWindowOpened {
            card,
            pon_seats,
            chi_seat,
            time_limit: self.claim_time_limit,
        });

        if manual_pon.is_empty() && manual_chi.is_none() {
            debug!(card = %card, "claim opportunities resolve without a window");
            return self.apply_claim(ai_pon, ai_chi, discarder);
        }

        info!(card = %card, "claim window opened");
        self.status = GameStatus::ClaimWindow;
        self.claim = Some(ClaimWindow::open(
            card,
            discarder,
            manual_pon,
            manual_chi,
            ai_pon,
            ai_chi,
            Instant::now(),
            self.claim_time_limit,
        ));
        Ok(())
    }

    fn apply_claim(
        &mut self,
        pon: Option<SeatId>,
        chi: Option<SeatId>,
        discarder: SeatId,
    ) -> Result<(), GameError> {
        if let Some(seat) = pon {
            self.execute_pon(seat)
        } else if let Some(seat) = chi {
            self.execute_chi(seat)
        } else {
            self.notify(Notification::ClaimResolved(ClaimOutcome::Pass));
            self.advance_from(discarder)
        }
    }

    fn execute_pon(&mut self, seat: SeatId) -> Result<(), GameError> {
        let card = self.discard_pile.pop_back().ok_or(GameError::EmptyDiscard)?;
        let matching: Vec<Card> = self.players[seat]
            .hand()
            .iter()
            .filter(|held| held.rank == card.rank)
            .take(2)
            .copied()
            .collect();
        // Eligibility was established at window open; cards cannot have
        // moved since, pon claims are only reachable through that check.
        debug_assert_eq!(matching.len(), 2);
        let mut cards = self.players[seat].remove_cards_from_hand(&matching);
        cards.push(card);
        let meld = Meld::from_cards(cards);
        info!(%seat, card = %card, "pon");
        self.players[seat].add_meld(meld);
        self.notify(Notification::ClaimResolved(ClaimOutcome::Pon { seat, card }));
        self.claimant_turn(seat)
    }

    fn execute_chi(&mut self, seat: SeatId) -> Result<(), GameError> {
        let card = self.discard_pile.pop_back().ok_or(GameError::EmptyDiscard)?;
        let Some(from_hand) = validator::chi_meld_cards(self.players[seat].hand(), card) else {
            // The eligibility shortcut can accept hands no meld is buildable
            // from (same-suit 6-7 in hand, unrelated discard). Treat it as a
            // pass and put the card back.
            self.discard_pile.push_back(card);
            self.notify(Notification::ClaimResolved(ClaimOutcome::Pass));
            // The chi seat is the discarder's next seat, so the pass hands
            // it an ordinary turn.
            return self.begin_turn(seat);
        };
        let mut cards = self.players[seat].remove_cards_from_hand(&from_hand);
        cards.push(card);
        cards.sort_unstable_by_key(|c| c.rank);
        let meld = Meld::from_cards(cards);
        info!(%seat, card = %card, "chi");
        self.players[seat].add_meld(meld);
        self.notify(Notification::ClaimResolved(ClaimOutcome::Chi { seat, card }));
        self.claimant_turn(seat)
    }

    /// The claimed card stood in for the draw, so the claimant resumes at
    /// the Discard phase. An automated claimant discards immediately.
    fn claimant_turn(&mut self, seat: SeatId) -> Result<(), GameError> {
        self.current_seat = seat;
        self.phase = Some(TurnPhase::Discard);
        self.status = self.seat_status(seat);
        if self.players[seat].has_empty_hand() {
            self.end_game(seat);
            return Ok(());
        }
        if let Some(agent) = self.controllers[seat].agent().copied() {
            if let Some(card) = agent.select_discard(self.players[seat].hand(), &mut self.ai_rng) {
                self.discard_card(card)?;
            }
        }
        Ok(())
    }

    fn end_game(&mut self, winner: SeatId) {
        self.status = GameStatus::GameOver;
        self.phase = None;
        self.claim = None;
        let scores: Vec<SeatScore> = self
            .players
            .iter()
            .map(|(seat, player)| SeatScore {
                seat,
                name: player.name().to_owned(),
                points: player.hand_points(),
                winner: seat == winner,
            })
            .collect();
        let result = MatchResult { winner, scores };
        info!(%winner, "match over");
        self.result = Some(result.clone());
        self.notify(Notification::GameOver(result));
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    fn emit_state(&mut self) {
        let snapshot = self.snapshot();
        self.notify(Notification::StateChanged(snapshot));
    }
}
