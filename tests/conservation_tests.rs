//! Property tests: all 52 cards stay accounted for, each exactly once,
//! no matter what command sequence a match sees.

use std::time::Duration;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use seven_bridge::{
    AiAgent, Difficulty, DrawSource, EngineBuilder, GameError, GameStatus,
};

#[derive(Clone, Debug)]
struct Step {
    from_discard: bool,
    try_meld: bool,
    discard_pick: usize,
}

fn step() -> impl Strategy<Value = Step> {
    (any::<bool>(), any::<bool>(), 0usize..16).prop_map(|(from_discard, try_meld, discard_pick)| {
        Step {
            from_discard,
            try_meld,
            discard_pick,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Arbitrary draw/meld/discard sequences on an all-manual table never
    /// duplicate or lose a card.
    #[test]
    fn conservation_over_command_sequences(
        seed in any::<u64>(),
        steps in proptest::collection::vec(step(), 1..60),
    ) {
        let mut game = EngineBuilder::new()
            .seat_count(4)
            .automated_seats(0)
            .build(seed);
        game.start_game().unwrap();
        prop_assert!(game.conservation_holds());

        // Borrows the Hard policy purely as a legal-meld finder.
        let scout = AiAgent::new(Difficulty::Hard);

        for step in steps {
            if game.status() == GameStatus::ClaimWindow {
                game.resolve_claim(None, None).unwrap();
            }
            if game.status() == GameStatus::GameOver {
                break;
            }

            let source = if step.from_discard && !game.discard_pile().is_empty() {
                DrawSource::Discard
            } else {
                DrawSource::Stock
            };
            match game.draw_card(source) {
                Ok(_) => {}
                Err(GameError::Exhaustion) => break,
                Err(other) => return Err(TestCaseError::fail(other.to_string())),
            }

            let seat = game.current_seat();
            if step.try_meld {
                let melds = scout.find_melds(game.player(seat).hand());
                if let Some(meld) = melds.first() {
                    prop_assert!(game.play_meld(meld.cards()).unwrap());
                }
                if game.status() == GameStatus::GameOver {
                    prop_assert!(game.conservation_holds());
                    break;
                }
            }

            let hand = game.player(seat).hand();
            let card = hand[step.discard_pick % hand.len()];
            match game.discard_card(card) {
                Ok(accepted) => prop_assert!(accepted),
                Err(GameError::Exhaustion) => break,
                Err(other) => return Err(TestCaseError::fail(other.to_string())),
            }
            prop_assert!(game.conservation_holds());
        }
        prop_assert!(game.conservation_holds());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// A table of deterministic seats plays whole matches without breaking
    /// conservation; the manual seat follows the same policy by hand.
    #[test]
    fn full_matches_hold_conservation(seed in any::<u64>()) {
        let mut game = EngineBuilder::new()
            .seat_count(4)
            .difficulty(Difficulty::Hard)
            .build(seed);
        game.start_game().unwrap();
        let policy = AiAgent::new(Difficulty::Hard);

        let mut exhausted = false;
        let mut fuel = 10_000u32;
        while game.status() != GameStatus::GameOver && fuel > 0 {
            fuel -= 1;
            match game.status() {
                GameStatus::PlayerTurn => {
                    match game.draw_card(DrawSource::Stock) {
                        Ok(_) => {}
                        Err(GameError::Exhaustion) => {
                            exhausted = true;
                            break;
                        }
                        Err(other) => return Err(TestCaseError::fail(other.to_string())),
                    }
                    let seat = game.current_seat();
                    loop {
                        let melds = policy.find_melds(game.player(seat).hand());
                        let Some(meld) = melds.first() else { break };
                        prop_assert!(game.play_meld(meld.cards()).unwrap());
                        if game.status() == GameStatus::GameOver {
                            break;
                        }
                    }
                    if game.status() == GameStatus::GameOver {
                        break;
                    }
                    let hand = game.player(seat).hand();
                    let card = hand[0];
                    match game.discard_card(card) {
                        Ok(_) => {}
                        Err(GameError::Exhaustion) => {
                            exhausted = true;
                            break;
                        }
                        Err(other) => return Err(TestCaseError::fail(other.to_string())),
                    }
                }
                GameStatus::ClaimWindow => {
                    let deadline = game.claim_window().unwrap().deadline();
                    match game.poll_claim_window(deadline + Duration::from_millis(1)) {
                        Ok(_) => {}
                        Err(GameError::Exhaustion) => {
                            exhausted = true;
                            break;
                        }
                        Err(other) => return Err(TestCaseError::fail(other.to_string())),
                    }
                }
                other => return Err(TestCaseError::fail(format!("stuck in {other:?}"))),
            }
            prop_assert!(game.conservation_holds());
        }

        prop_assert!(game.conservation_holds());
        if !exhausted {
            prop_assert_eq!(game.status(), GameStatus::GameOver);
            let result = game.result().unwrap();
            prop_assert!(result.scores.iter().any(|score| score.winner));
            prop_assert!(result.scores[result.winner.index()].points == 0);
        }
    }
}
