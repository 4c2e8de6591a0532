//! Whole-game tests on the standard deck.
//!
//! - Full games always terminate within the storm deck size
//! - Card conservation and strength bounds hold every turn
//! - Same seed and inputs replay the same game

use lighthouse_keeper::cards::{ActionCardId, StormCatalog};
use lighthouse_keeper::core::SessionConfig;
use lighthouse_keeper::rules::{GameResult, TurnOutcome};
use lighthouse_keeper::session::{GameSession, SessionBuilder, SessionSnapshot};
use proptest::prelude::*;

/// Pick hand cards by bitmask, cycling through `choices` turn by turn.
fn choose(session: &GameSession, mask: u8) -> Vec<ActionCardId> {
    session
        .hand()
        .cards()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i < 8 && mask & (1 << i) != 0)
        .map(|(_, c)| c.id)
        .collect()
}

fn play_out(seed: u64, choices: &[u8]) -> (Vec<TurnOutcome>, SessionSnapshot) {
    let mut session = GameSession::new(seed);
    let mut outcomes = Vec::new();
    let mut turn = 0;
    while !session.is_over() {
        let mask = choices.get(turn % choices.len().max(1)).copied().unwrap_or(0);
        let selected = choose(&session, mask);
        outcomes.push(session.resolve_turn(&selected, !selected.is_empty()));
        turn += 1;
    }
    (outcomes, session.snapshot())
}

#[test]
fn test_passing_every_turn_terminates() {
    for seed in 0..20 {
        let mut session = GameSession::new(seed);
        let mut turns = 0;
        while !session.is_over() {
            session.pass();
            turns += 1;
            assert!(turns <= 20, "seed {seed} did not finish");
        }
        assert!(session.status().result().is_some());
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let choices = [0b1, 0b11, 0, 0b101, 0b11111];
    let (a, a_end) = play_out(77, &choices);
    let (b, b_end) = play_out(77, &choices);

    assert_eq!(a, b);
    assert_eq!(a_end, b_end);
}

#[test]
fn test_dealt_storms_come_from_catalog() {
    let catalog = StormCatalog::standard();
    let mut session = GameSession::new(5);
    while let Some(card) = session.active_storm_card() {
        assert_eq!(catalog.get(card.id), Some(card));
        session.pass();
    }
}

#[test]
fn test_custom_config() {
    let config = SessionConfig::default()
        .with_hand_size(3)
        .with_storm_deck_size(5)
        .with_copies_per_action(2);
    let session = SessionBuilder::new().config(config).build(9).unwrap();
    let snapshot = session.snapshot();

    assert_eq!(snapshot.hand.len(), 3);
    assert_eq!(snapshot.storm_deck_count, 4);
    assert_eq!(session.total_action_cards(), 16);
}

#[test]
fn test_result_messages() {
    assert_eq!(GameResult::Victory.headline(), "You survived the storm!");
    assert_eq!(GameResult::Defeat.headline(), "The light has gone out...");
    assert!(!GameResult::Defeat.is_win());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_game_invariants_hold(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<u8>(), 1..24),
    ) {
        let mut session = GameSession::new(seed);
        let storms = session.storm_deck_len() + 1;
        let mut turn = 0;

        while !session.is_over() {
            prop_assert!(turn < storms);
            let selected = choose(&session, choices[turn % choices.len()]);
            let before = session.light_strength();
            let outcome = session.resolve_turn(&selected, true);

            prop_assert!((0..=10).contains(&outcome.new_light_strength));
            prop_assert_eq!(outcome.new_light_strength - before, outcome.light_strength_delta);
            prop_assert_eq!(session.total_action_cards(), 40);
            prop_assert!(session.hand().selection().is_empty());
            prop_assert_eq!(
                session.storm_deck_len()
                    + session.storm_discard().len()
                    + usize::from(session.active_storm_card().is_some()),
                storms
            );
            if outcome.new_light_strength == 0 {
                prop_assert_eq!(outcome.terminal, Some(GameResult::Defeat));
            }
            turn += 1;
        }

        if session.light_strength() > 0 {
            prop_assert_eq!(session.status().result(), Some(GameResult::Victory));
            prop_assert_eq!(session.storm_deck_len(), 0);
        }
    }
}
