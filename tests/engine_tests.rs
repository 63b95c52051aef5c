//! End-to-end turn flow: dealing, drawing, melding, extending, winning,
//! and the stock recycle contract.

mod common;

use std::time::Duration;

use common::{c, stacked_deck};
use seven_bridge::{
    DrawSource, EngineBuilder, GameStatus, SeatId, TurnPhase, HAND_SIZE,
};

#[test]
fn stacked_deal_lands_exact_hands() {
    let hands = [
        [c('h', 5), c('c', 5), c('h', 13), c('d', 13), c('c', 13), c('s', 13), c('h', 2)],
        [c('h', 4), c('h', 6), c('d', 11), c('c', 11), c('s', 11), c('d', 3), c('c', 3)],
        [c('d', 5), c('s', 5), c('h', 3), c('s', 3), c('d', 12), c('c', 12), c('s', 12)],
        [c('h', 8), c('d', 8), c('c', 8), c('s', 8), c('h', 12), c('d', 4), c('c', 4)],
    ];
    let mut game = EngineBuilder::new()
        .seat_count(4)
        .automated_seats(0)
        .stacked_deck(stacked_deck(&hands, c('s', 9), &[]))
        .build(0);
    game.start_game().unwrap();

    for (seat, expected) in hands.iter().enumerate() {
        let mut expected = expected.to_vec();
        expected.sort();
        assert_eq!(game.player(SeatId::new(seat as u8)).hand(), expected.as_slice());
    }
    assert_eq!(game.discard_pile().last(), Some(&c('s', 9)));
    assert_eq!(game.stock_count(), 52 - 4 * HAND_SIZE - 1);
}

#[test]
fn discard_draw_moves_the_exact_card() {
    let hands = [
        [c('h', 5), c('c', 5), c('h', 13), c('d', 13), c('c', 13), c('s', 13), c('h', 2)],
        [c('h', 4), c('h', 6), c('d', 11), c('c', 11), c('s', 11), c('d', 3), c('c', 3)],
    ];
    let mut game = EngineBuilder::new()
        .seat_count(2)
        .automated_seats(0)
        .stacked_deck(stacked_deck(&hands, c('s', 9), &[]))
        .build(0);
    game.start_game().unwrap();

    let drawn = game.draw_card(DrawSource::Discard).unwrap();
    assert_eq!(drawn, c('s', 9));
    assert!(game.discard_pile().is_empty());
    assert!(game.player(SeatId::new(0)).hand().contains(&c('s', 9)));
    assert!(game.conservation_holds());
}

#[test]
fn win_on_discard_bypasses_claims_and_scores() {
    let hands = [
        [c('h', 3), c('d', 3), c('c', 3), c('h', 4), c('d', 4), c('c', 4), c('s', 7)],
        [c('h', 2), c('h', 5), c('d', 9), c('c', 10), c('c', 11), c('s', 12), c('h', 13)],
    ];
    let mut game = EngineBuilder::new()
        .seat_count(2)
        .automated_seats(0)
        .stacked_deck(stacked_deck(&hands, c('s', 2), &[c('s', 13)]))
        .build(0);
    game.start_game().unwrap();

    assert_eq!(game.draw_card(DrawSource::Stock).unwrap(), c('s', 13));
    assert!(game.play_meld(&[c('h', 3), c('d', 3), c('c', 3)]).unwrap());
    assert!(game.play_meld(&[c('h', 4), c('d', 4), c('c', 4)]).unwrap());
    // A lone 7 is a meld of its own.
    assert!(game.play_meld(&[c('s', 7)]).unwrap());
    assert!(game.discard_card(c('s', 13)).unwrap());

    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(game.claim_window().is_none());

    let result = game.result().unwrap();
    assert_eq!(result.winner, SeatId::new(0));
    assert_eq!(result.scores[0].points, 0);
    assert!(result.scores[0].winner);
    // 2 + 5 + 9 + 10 + 10 + 10 + 10, no sevens to double.
    assert_eq!(result.scores[1].points, 56);
    assert!(!result.scores[1].winner);
    assert!(game.conservation_holds());

    // Terminal state accepts no further turn commands.
    assert!(game.draw_card(DrawSource::Stock).is_err());
}

#[test]
fn melds_of_other_seats_can_be_extended() {
    let hands = [
        [c('h', 3), c('d', 3), c('c', 3), c('h', 9), c('d', 10), c('s', 11), c('c', 12)],
        [c('s', 3), c('h', 6), c('d', 8), c('c', 2), c('s', 5), c('h', 11), c('d', 13)],
    ];
    let mut game = EngineBuilder::new()
        .seat_count(2)
        .automated_seats(0)
        .stacked_deck(stacked_deck(&hands, c('s', 9), &[c('h', 13), c('d', 11)]))
        .build(0);
    game.start_game().unwrap();

    game.draw_card(DrawSource::Stock).unwrap();
    assert!(game.play_meld(&[c('h', 3), c('d', 3), c('c', 3)]).unwrap());
    game.discard_card(c('c', 12)).unwrap();
    assert_eq!(game.status(), GameStatus::PlayerTurn);
    assert_eq!(game.current_seat(), SeatId::new(1));

    game.draw_card(DrawSource::Stock).unwrap();
    // A non-matching rank does not extend the set.
    assert!(!game.add_to_meld(0, SeatId::new(0), c('h', 6)).unwrap());
    // The fourth 3 completes the set on the opponent's board.
    assert!(game.add_to_meld(0, SeatId::new(0), c('s', 3)).unwrap());
    assert_eq!(game.player(SeatId::new(0)).melds()[0].len(), 4);
    assert!(!game.player(SeatId::new(1)).hand().contains(&c('s', 3)));
    assert!(game.conservation_holds());
}

#[test]
fn empty_stock_recycles_the_discard_pile() {
    let mut game = EngineBuilder::new()
        .seat_count(2)
        .automated_seats(0)
        .claim_time_limit(Duration::from_secs(3))
        .build(21);
    game.start_game().unwrap();
    assert_eq!(game.stock_count(), 52 - 2 * HAND_SIZE - 1);

    // Burn through the stock one draw-and-discard turn at a time.
    while game.stock_count() > 0 {
        game.draw_card(DrawSource::Stock).unwrap();
        let seat = game.current_seat();
        let card = *game.player(seat).hand().last().unwrap();
        game.discard_card(card).unwrap();
        if game.status() == GameStatus::ClaimWindow {
            game.resolve_claim(None, None).unwrap();
        }
        assert_ne!(game.status(), GameStatus::GameOver);
    }
    let discards = game.discard_pile().len();
    assert!(discards > 1);

    // The next stock draw recycles everything but the visible top discard.
    let drawn = game.draw_card(DrawSource::Stock).unwrap();
    assert_eq!(game.discard_pile().len(), 1);
    assert_eq!(game.stock_count(), discards - 2);
    assert!(game.player(game.current_seat()).hand().contains(&drawn));
    assert!(game.conservation_holds());
    assert_eq!(game.phase(), Some(TurnPhase::Meld));
}
