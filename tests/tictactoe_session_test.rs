//! Tests for full tic-tac-toe sessions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::io::Cursor;
use strictly_tictactoe_cli::{
    Console, GameMode, GameOutcome, GameSession, RandomMover, run_multiplayer_session,
    run_single_player_session,
};

fn script(moves: &[u8]) -> String {
    moves.iter().map(|m| format!("{}\n", m)).collect()
}

fn play_multiplayer(moves: &[u8]) -> (GameOutcome, String) {
    let mut console = Console::new(Cursor::new(script(moves)), Vec::new());
    let outcome = run_multiplayer_session(&mut console).expect("session completes");
    (outcome, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn test_tie_when_board_fills() {
    let (outcome, _) = play_multiplayer(&[1, 2, 3, 5, 4, 6, 8, 7, 9]);
    assert_eq!(outcome, GameOutcome::Tie);
    assert_eq!(outcome.label(GameMode::Multiplayer), "tie");
}

#[test]
fn test_full_board_never_prompts_second_player_again() {
    // Extra input after the ninth move must be left unread.
    let (outcome, output) = play_multiplayer(&[1, 2, 3, 5, 4, 6, 8, 7, 9, 1, 1]);
    assert_eq!(outcome, GameOutcome::Tie);
    assert_eq!(output.matches("Player 1's turn: ").count(), 5);
    assert_eq!(output.matches("Player 2's turn: ").count(), 4);
    assert!(!output.contains("already filled"));
}

#[test]
fn test_win_on_ninth_move_is_win() {
    let (outcome, _) = play_multiplayer(&[1, 2, 3, 5, 4, 6, 8, 9, 7]);
    assert_eq!(outcome, GameOutcome::FirstPlayerWin);
    assert_eq!(outcome.label(GameMode::Multiplayer), "player1");
}

#[test]
fn test_win_detected_immediately() {
    // X holds 1, 5, 9 after its third move; O is never asked again.
    let (outcome, output) = play_multiplayer(&[1, 2, 5, 3, 9, 4]);
    assert_eq!(outcome, GameOutcome::FirstPlayerWin);
    assert_eq!(output.matches("Player 2's turn: ").count(), 2);
}

#[test]
fn test_second_player_win() {
    let (outcome, _) = play_multiplayer(&[1, 3, 2, 5, 9, 7]);
    assert_eq!(outcome, GameOutcome::SecondPlayerWin);
    assert_eq!(outcome.label(GameMode::Multiplayer), "player2");
}

#[test]
fn test_rejections_extend_the_turn() {
    let input = "abc\n10\n5\n5\n0\n1\n2\n4\n3\n7\n";
    let mut console = Console::new(Cursor::new(input), Vec::new());
    let outcome = run_multiplayer_session(&mut console).unwrap();
    // X: 5, 2, 3 ... O: 1, 4, 7 wins the left column.
    assert_eq!(outcome, GameOutcome::SecondPlayerWin);

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Please only type numbers while playing"));
    assert!(output.contains("Only numbers from 1 to 9 are allowed"));
    assert!(output.contains("That cell is already filled"));
}

#[test]
fn test_board_rendered_after_every_move() {
    let (_, output) = play_multiplayer(&[1, 2, 3, 5, 4, 6, 8, 7, 9]);
    // Nine renders of nine cells each.
    assert_eq!(output.matches(" [").count(), 81);
    assert!(output.ends_with(" [X] [O] [X]\n [X] [O] [O]\n [O] [X] [X]\n"));
}

#[test]
fn test_single_player_outcome_labels() {
    let mut seen = HashSet::new();
    for seed in 0..200 {
        let input = script(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let outcome = run_single_player_session(&mut console, StdRng::seed_from_u64(seed))
            .expect("lowest-free-cell human never runs out of input");
        seen.insert(outcome.label(GameMode::SinglePlayer));
    }
    assert!(seen.is_subset(&HashSet::from(["user", "ai", "tie"])));
    assert!(seen.contains("user"));
}

#[test]
fn test_single_player_reaches_every_outcome() {
    let mut seen = HashSet::new();
    let mut input_rng = StdRng::seed_from_u64(2024);

    for seed in 0..300 {
        // A careless human: random numbers, some out of range, some garbage.
        let input: String = (0..1000)
            .map(|_| match input_rng.random_range(0..12) {
                11 => "oops\n".to_string(),
                n => format!("{}\n", n),
            })
            .collect();
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let outcome = run_single_player_session(&mut console, StdRng::seed_from_u64(seed))
            .expect("session completes");
        seen.insert(outcome);
    }

    assert_eq!(seen.len(), 3, "outcomes seen: {:?}", seen);
}

#[test]
fn test_random_vs_random_reaches_every_outcome() {
    let mut seen = HashSet::new();
    for seed in 0..500 {
        let mut first = RandomMover::new("First", StdRng::seed_from_u64(seed));
        let mut second = RandomMover::new("Second", StdRng::seed_from_u64(seed + 10_000));
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let outcome = GameSession::new()
            .run(&mut first, &mut second, &mut console)
            .expect("random players never need input");
        seen.insert(outcome);
    }
    assert!(seen.contains(&GameOutcome::FirstPlayerWin));
    assert!(seen.contains(&GameOutcome::SecondPlayerWin));
    assert!(seen.contains(&GameOutcome::Tie));
}

#[test]
fn test_invalid_utf8_input_is_reprompted() {
    let mut input = vec![0xff, 0xfe, b'\n'];
    input.extend_from_slice(b"1\n2\n4\n5\n7\n");
    let mut console = Console::new(Cursor::new(input), Vec::new());
    let outcome = run_multiplayer_session(&mut console).unwrap();
    assert_eq!(outcome, GameOutcome::FirstPlayerWin);

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Please only type numbers while playing"));
}

#[test]
fn test_input_closed_mid_game() {
    let mut console = Console::new(Cursor::new("1\n2\n"), Vec::new());
    let err = run_multiplayer_session(&mut console).unwrap_err();
    assert!(err.is_closed());
}
