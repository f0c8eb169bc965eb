//! End-to-end session tests driving the console with scripted input.

use std::io::Cursor;
use tictactoe_solo::{Console, GameConfig, RandomMoveSource, ScriptedMoveSource, Session};

fn quiet_config() -> GameConfig {
    GameConfig::default().with_clear_screen(false)
}

fn computer(cells: &[(usize, usize)]) -> ScriptedMoveSource {
    ScriptedMoveSource::from_cells("computer", cells).unwrap()
}

#[test]
fn test_three_rounds_two_wins_one_loss() {
    let input = concat!(
        // Round 1: top row
        "1\n1\n", "1\n2\n", "1\n3\n", "y\n",
        // Round 2: top row again
        "1\n1\n", "1\n2\n", "1\n3\n", "Y\n",
        // Round 3: computer completes the bottom row
        "1\n1\n", "1\n2\n", "2\n3\n",
        "maybe\n", "n\n",
    );
    let computer = computer(&[(1, 0), (1, 1), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2)]);

    let mut out = Vec::new();
    let console = Console::new(Cursor::new(input), &mut out);
    let stats = Session::new(console, computer, &quiet_config()).run().unwrap();

    assert_eq!(*stats.rounds_played(), 3);
    assert_eq!(*stats.player_wins(), 2);
    assert_eq!(*stats.computer_wins(), 1);
    assert_eq!(*stats.ties(), 0);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("YOU WIN!").count(), 2);
    assert_eq!(text.matches("YOU LOSE!").count(), 1);
    assert!(text.contains("Round 3, the score is (PLAYER) 2 - 0 (COMPUTER)"));
    assert_eq!(text.matches("Enter either Y or N (not case sensitive)").count(), 1);
    assert!(text.contains("Thanks for playing!\nRounds played: 3\nPlayer Score: 2\nComputer Score: 1\nTies: 0"));
}

#[test]
fn test_tie_round() {
    let input = "1\n1\n1\n3\n2\n1\n3\n2\n3\n3\nN\n";
    let computer = computer(&[(0, 1), (1, 1), (2, 0), (1, 2)]);

    let mut out = Vec::new();
    let console = Console::new(Cursor::new(input), &mut out);
    let stats = Session::new(console, computer, &quiet_config()).run().unwrap();

    assert_eq!(*stats.ties(), 1);
    assert_eq!(*stats.rounds_played(), 1);

    let text = String::from_utf8(out).unwrap();
    let final_board = " X | O | X \n---|---|---\n X | O | O \n---|---|---\n O | X | X \nIT'S A TIE!";
    assert!(text.contains(final_board));
}

#[test]
fn test_end_of_input_mid_round_is_not_counted() {
    let input = "2\n2\n";
    let computer = computer(&[(0, 0)]);

    let mut out = Vec::new();
    let console = Console::new(Cursor::new(input), &mut out);
    let stats = Session::new(console, computer, &quiet_config()).run().unwrap();

    assert_eq!(*stats.rounds_played(), 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("Thanks for playing!\nRounds played: 0\nPlayer Score: 0\nComputer Score: 0\nTies: 0\n"));
}

#[test]
fn test_end_of_input_at_play_again_prompt_stops() {
    let input = "1\n1\n1\n2\n1\n3\n";
    let computer = computer(&[(2, 0), (2, 1)]);

    let mut out = Vec::new();
    let console = Console::new(Cursor::new(input), &mut out);
    let stats = Session::new(console, computer, &quiet_config()).run().unwrap();

    assert_eq!(*stats.rounds_played(), 1);
    assert_eq!(*stats.player_wins(), 1);
}

#[test]
fn test_random_opponent_round_completes() {
    // Cycle through every cell; occupied picks are rejected and re-prompted.
    let cycle: String = (1..=3)
        .flat_map(|row| (1..=3).map(move |col| format!("{row}\n{col}\n")))
        .collect();
    let input = format!("{}n\n", cycle.repeat(6));

    let mut out = Vec::new();
    let console = Console::new(Cursor::new(input), &mut out);
    let config = GameConfig::default().with_seed(Some(17));
    let stats = Session::new(console, RandomMoveSource::with_seed(17), &config)
        .run()
        .unwrap();

    assert_eq!(*stats.rounds_played(), 1);
    assert_eq!(stats.player_wins() + stats.computer_wins() + stats.ties(), 1);

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("\x1b[2J\x1b[H"));
    assert!(text.contains("Round 1, the score is (PLAYER) 0 - 0 (COMPUTER)"));
}

#[test]
fn test_custom_symbols() {
    let config = GameConfig::from_toml(
        "player_symbol = \"@\"\ncomputer_symbol = \"#\"\nclear_screen = false",
    )
    .unwrap();
    let input = "1\n1\n1\n2\n1\n3\nn\n";
    let computer = computer(&[(1, 1), (2, 2)]);

    let mut out = Vec::new();
    let console = Console::new(Cursor::new(input), &mut out);
    Session::new(console, computer, &config).run().unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(" @ | @ | @ \n---|---|---\n   | # |   \n---|---|---\n   |   | # "));
    assert!(!text.contains('\x1b'));
}
