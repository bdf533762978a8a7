//! Property tests over random seeds and click sequences.

use proptest::prelude::*;

use match_it::core::{Deck, GameConfig, GameRng, TileIndex, TileStatus};
use match_it::game::{EventLog, MatchGame, Phase, SelectOutcome, Session};

/// A click on a tile (possibly off the board) or a timer fire.
#[derive(Clone, Debug)]
enum Input {
    Click(u8),
    Fire,
    Restart,
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        8 => (0u8..18).prop_map(Input::Click),
        3 => Just(Input::Fire),
        1 => Just(Input::Restart),
    ]
}

proptest! {
    /// Test that any seed deals eight well-formed pairs.
    #[test]
    fn prop_every_deal_is_eight_pairs(seed in any::<u64>()) {
        let deck = Deck::shuffled(8, &mut GameRng::new(seed));
        prop_assert_eq!(deck.len(), 16);
        prop_assert!(deck.is_well_formed());
        let counts = deck.symbol_counts();
        prop_assert_eq!(counts.len(), 8);
        prop_assert!(counts.values().all(|&c| c == 2));
    }

    /// Test that random input never breaks phase or status invariants.
    #[test]
    fn prop_state_machine_invariants(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 0..200),
    ) {
        let game = MatchGame::new(GameConfig::default(), GameRng::new(seed)).unwrap();
        let mut session = Session::new(game, EventLog::new());
        let mut pending = None;

        for input in inputs {
            let tries_before = session.game().tries();
            let selection_before = session.game().selection().len();

            match input {
                Input::Click(i) => {
                    let index = TileIndex(i);
                    let was_face_up = session
                        .game()
                        .tile(index)
                        .is_some_and(|t| t.status().is_face_up());
                    if let Some(ticket) = session.on_tile_clicked(index) {
                        pending = Some(ticket);
                        prop_assert_eq!(session.game().tries(), tries_before + 1);
                        prop_assert_eq!(session.game().phase(), Phase::Resolving);
                    }
                    if was_face_up {
                        prop_assert_eq!(session.game().selection().len(), selection_before);
                    }
                }
                Input::Fire => {
                    let completions_before = session.observer().completions();
                    if let Some(ticket) = pending.take() {
                        if let Some(resolution) = session.on_resolve_timer_fired(ticket) {
                            prop_assert!(session.game().selection().is_empty());
                            prop_assert_eq!(session.game().tries(), tries_before);
                            let expected = completions_before + usize::from(resolution.completed);
                            prop_assert_eq!(session.observer().completions(), expected);
                            prop_assert_eq!(
                                resolution.completed,
                                session.game().phase() == Phase::Complete
                            );
                        }
                    }
                    prop_assert!(session.observer().completions() - completions_before <= 1);
                }
                Input::Restart => {
                    session.on_restart_requested();
                    prop_assert_eq!(session.game().tries(), 0);
                    prop_assert_eq!(session.game().score(), 100);
                }
            }

            let game = session.game();
            prop_assert!(game.selection().len() <= 2);

            let revealed = game
                .tiles()
                .iter()
                .filter(|t| t.status() == TileStatus::Revealed)
                .count();
            prop_assert_eq!(revealed, game.selection().len());

            let matched = game
                .tiles()
                .iter()
                .filter(|t| t.status() == TileStatus::Matched)
                .count();
            prop_assert_eq!(matched, game.matched_pairs() * 2);

            let penalized = game.tries().saturating_sub(13) as i64;
            prop_assert_eq!(game.score(), 100 - 10 * penalized);
        }
    }

    /// Test that the game is complete exactly when every tile is matched.
    #[test]
    fn prop_completion_iff_all_matched(seed in any::<u64>()) {
        let mut game = MatchGame::new(GameConfig::default(), GameRng::new(seed)).unwrap();

        // Solve perfectly using the deck
        let faces = game.deck().faces().to_vec();
        for symbol in 0..8u8 {
            prop_assert_ne!(game.phase(), Phase::Complete);
            let positions: Vec<u8> = faces
                .iter()
                .enumerate()
                .filter(|(_, f)| f.0 == symbol)
                .map(|(i, _)| i as u8)
                .collect();
            game.select_tile(TileIndex(positions[0]));
            let outcome = game.select_tile(TileIndex(positions[1]));
            let is_match = matches!(outcome, SelectOutcome::PairComplete { is_match: true, .. });
            prop_assert!(is_match);
            game.resolve();
        }

        prop_assert_eq!(game.phase(), Phase::Complete);
        prop_assert_eq!(game.tries(), 8);
        prop_assert_eq!(game.score(), 100);
    }
}
