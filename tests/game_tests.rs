//! Whole games and sessions: setup, win detection, replay, dice fairness.

use std::io::Cursor;

use rust_pig::core::{Die, GameConfig, PlayerId, PlayerRoster, RandomDie, ScriptedDie};
use rust_pig::{GameOutcome, SessionEnd, SetupError, TerminalTable, TurnEngine};

type BufferTable = TerminalTable<Cursor<Vec<u8>>, Vec<u8>>;

fn table(input: &str) -> BufferTable {
    TerminalTable::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Faces and input for one turn that rolls seventeen sixes and holds 102.
fn big_hold() -> (Vec<u8>, String) {
    let faces = vec![6; 17];
    let mut input = "r\n".repeat(16);
    input.push_str("h\n");
    (faces, input)
}

#[test]
fn test_setup_rejects_bad_player_counts() {
    for bad in [0, -5] {
        let config = GameConfig::new().player_count(bad).seed(Some(1));
        assert!(matches!(
            rust_pig::setup(&config),
            Err(SetupError::InvalidPlayerCount(n)) if n == bad
        ));
    }

    let config = GameConfig::new().player_count(1000).seed(Some(1));
    assert!(matches!(
        rust_pig::setup(&config),
        Err(SetupError::TooManyPlayers(1000))
    ));
}

#[test]
fn test_setup_defaults() {
    let engine = rust_pig::setup(&GameConfig::default()).unwrap();
    assert_eq!(engine.state().roster.len(), 2);
    assert_eq!(engine.state().winning_score(), 100);
    assert!(!engine.state().is_game_over());
}

#[test]
fn test_one_turn_can_overshoot_and_end_game() {
    let (faces, input) = big_hold();
    let mut engine = TurnEngine::new(PlayerRoster::new(3).unwrap(), ScriptedDie::new(faces));
    let mut table = table(&input);

    let outcome = engine.play_game(&mut table).unwrap();

    assert_eq!(
        outcome,
        GameOutcome::Finished {
            winner: PlayerId::new(0),
            scores: vec![102, 0, 0],
        }
    );

    let text = String::from_utf8(table.into_output()).unwrap();
    assert!(text.starts_with("\nWelcome to the game of Pig!\n\n"));
    assert!(text.ends_with(
        "\nPlayer 1 wins with 102 points!\n\nFinal Scores:\n\
         Player 1: 102 points\nPlayer 2: 0 points\nPlayer 3: 0 points\n"
    ));
}

#[test]
fn test_second_player_can_win() {
    // Player 1 busts, player 2 holds 102.
    let (mut faces, input) = big_hold();
    faces.insert(0, 1);
    let mut engine = TurnEngine::new(PlayerRoster::new(2).unwrap(), ScriptedDie::new(faces));
    let mut table = table(&input);

    let outcome = engine.play_game(&mut table).unwrap();

    assert_eq!(
        outcome,
        GameOutcome::Finished {
            winner: PlayerId::new(1),
            scores: vec![0, 102],
        }
    );
}

#[test]
fn test_replay_resets_scores_and_cursor() {
    let (faces, input) = big_hold();
    let all_faces: Vec<u8> = faces.iter().chain(faces.iter()).copied().collect();
    let session_input = format!("{input}Y\n{input}n\n");

    let mut engine = TurnEngine::new(PlayerRoster::new(2).unwrap(), ScriptedDie::new(all_faces));
    let mut table = table(&session_input);

    let end = engine.run_session(&mut table).unwrap();

    assert_eq!(end, SessionEnd::Finished { games_played: 2 });
    // The second game started from zero with player 1 up first.
    assert_eq!(engine.state().roster.scores(), vec![102, 0]);

    let text = String::from_utf8(table.into_output()).unwrap();
    assert_eq!(text.matches("Welcome to the game of Pig!").count(), 2);
    assert!(text.ends_with("(y/n): Thanks for playing!\n"));
}

#[test]
fn test_anything_but_y_declines() {
    for reply in ["yes\n", "n\n", "\n", ""] {
        let (faces, input) = big_hold();
        let mut engine =
            TurnEngine::new(PlayerRoster::new(1).unwrap(), ScriptedDie::new(faces));
        let mut table = table(&format!("{input}{reply}"));

        let end = engine.run_session(&mut table).unwrap();
        assert_eq!(end, SessionEnd::Finished { games_played: 1 }, "reply {:?}", reply);
    }
}

#[test]
fn test_seeded_game_always_holding_finishes() {
    let config = GameConfig::new().player_count(2).seed(Some(7));
    let mut engine = rust_pig::setup(&config).unwrap();
    let mut table = table(&"h\n".repeat(5000));

    let outcome = engine.play_game(&mut table).unwrap();

    let (winner, scores) = match outcome {
        GameOutcome::Finished { winner, scores } => (winner, scores),
        GameOutcome::Quit => panic!("game should finish, not quit"),
    };
    let best = *scores.iter().max().unwrap();
    assert!(best >= 100);
    assert_eq!(scores[winner.index()], best);
    assert_eq!(scores.iter().position(|&s| s == best), Some(winner.index()));
    assert!(engine.state().is_concluded());
}

#[test]
fn test_same_seed_same_game() {
    let play = || {
        let config = GameConfig::new().player_count(3).seed(Some(2024));
        let mut engine = rust_pig::setup(&config).unwrap();
        let mut table = table(&"r\nh\n".repeat(5000));
        let outcome = engine.play_game(&mut table).unwrap();
        (outcome, table.into_output())
    };

    assert_eq!(play(), play());
}

/// Chi-square goodness of fit over 60 000 rolls, 5 degrees of freedom.
/// 20.515 is the critical value at p = 0.001.
#[test]
fn test_die_faces_uniform() {
    let mut die = RandomDie::seeded(0xD1CE);
    let mut counts = [0u32; 6];
    let n = 60_000;
    for _ in 0..n {
        let face = die.roll();
        assert!((1..=6).contains(&face));
        counts[(face - 1) as usize] += 1;
    }

    let expected = n as f64 / 6.0;
    let chi2: f64 = counts
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    assert!(chi2 < 20.515, "chi-square {} for counts {:?}", chi2, counts);
}

/// Consecutive rolls shouldn't depend on each other: chi-square over the
/// 36 (previous, next) pairs, 35 degrees of freedom, critical 66.619.
#[test]
fn test_die_rolls_independent() {
    let mut die = RandomDie::seeded(0xBEEF);
    let mut pairs = [[0u32; 6]; 6];
    let n = 36_000;
    for _ in 0..n {
        let a = die.roll();
        let b = die.roll();
        pairs[(a - 1) as usize][(b - 1) as usize] += 1;
    }

    let expected = n as f64 / 36.0;
    let chi2: f64 = pairs
        .iter()
        .flatten()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    assert!(chi2 < 66.619, "chi-square {} for pairs {:?}", chi2, pairs);
}
