//! Terminal presentation driven by scripted input.

use std::io::Cursor;
use std::time::Duration;

use match_it::cli::PlayerColor;
use match_it::console::{self, Console};
use match_it::core::{Deck, GameConfig, GameRng, Symbol};
use match_it::game::{MatchGame, Phase, Session};

fn labels() -> Vec<String> {
    ["ant", "bee", "cat", "dog", "eel", "fox", "gnu", "hen"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn scenario_session() -> Session<Console<Vec<u8>>> {
    let deck =
        Deck::from_faces([0, 1, 0, 2, 1, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7].map(Symbol)).unwrap();
    let config = GameConfig::default().with_resolve_delay(Duration::from_millis(5));
    let game = MatchGame::with_deck(config, deck, GameRng::new(42)).unwrap();
    Session::new(game, Console::new(Vec::new(), PlayerColor::Blue, labels()))
}

fn play(session: &mut Session<Console<Vec<u8>>>, script: &str) -> Vec<Duration> {
    let mut waits = Vec::new();
    console::run(session, Cursor::new(script), |d| waits.push(d)).unwrap();
    waits
}

fn output(session: Session<Console<Vec<u8>>>) -> String {
    let (_, console) = session.into_parts();
    String::from_utf8(console.into_inner()).unwrap()
}

/// Test that the first frame shows a hidden board and the score.
#[test]
fn test_initial_render() {
    let mut session = scenario_session();
    play(&mut session, "q\n");

    let out = output(session);
    assert!(out.contains("Score: 100   Tries: 0"));
    assert!(out.contains("[ 0 ] [ 1 ] [ 2 ] [ 3 ]"));
    assert!(out.contains("[12 ] [13 ] [14 ] [15 ]"));
    assert!(!out.contains("ant"));
}

/// Test that a completed pair sleeps for the delay before resolving.
#[test]
fn test_pair_waits_for_delay_then_resolves() {
    let mut session = scenario_session();
    let waits = play(&mut session, "0\n2\n");

    assert_eq!(waits, vec![Duration::from_millis(5)]);
    assert_eq!(session.game().matched_pairs(), 1);
    assert_eq!(session.game().tries(), 1);

    let out = output(session);
    assert!(out.contains("ant"));
    assert!(out.contains("Tries: 1"));
}

/// Test that unrecognized input prints the usage line.
#[test]
fn test_unknown_input_prints_usage() {
    let mut session = scenario_session();
    play(&mut session, "hello\n\n99\n");

    assert_eq!(session.game().phase(), Phase::Idle);
    let out = output(session);
    assert!(out.contains("Enter a tile number 0-15, r to restart, q to quit"));
}

/// Test that the restart command clears tries and the selection.
#[test]
fn test_restart_command() {
    let mut session = scenario_session();
    play(&mut session, "0\n1\n5\nr\n");

    assert_eq!(session.game().tries(), 0);
    assert!(session.game().selection().is_empty());
}

/// Test that finishing every pair prints the final tally.
#[test]
fn test_full_game_prints_game_over() {
    let mut session = scenario_session();
    let script = "0\n2\n1\n4\n3\n5\n6\n7\n8\n9\n10\n11\n12\n13\n14\n15\n";
    let waits = play(&mut session, script);

    assert_eq!(waits.len(), 8);
    assert_eq!(session.game().phase(), Phase::Complete);

    let out = output(session);
    assert!(out.contains("Game Over!\n Score: 100\n Number of tries: 8"));
}

/// Test that quitting ignores any remaining input.
#[test]
fn test_quit_stops_reading() {
    let mut session = scenario_session();
    play(&mut session, "0\nq\n1\n");

    assert_eq!(session.game().phase(), Phase::OneSelected);
}
