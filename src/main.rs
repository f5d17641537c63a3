//! Goban: a Go rules-and-state engine.
//!
//! The engine itself is a library consumed by a search driver; this
//! binary is a small console demo of the move machinery.
//!
//! ## Usage
//!
//! - `goban` - Play a random self-play game and print the result
//! - `goban demo` - Same as above
//! - `goban demo --seed 7 --komi 15` - Reproducible game, explicit komi
//! - `goban score` - Play a fixed demonstration game and print its score

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand};

use goban::board::{format_point, parse_point};
use goban::constants::{DEFAULT_KOMI, DRAW, FORFEIT_MOVE, MAX_GAME_LEN, NULL_MOVE, SOUTH};
use goban::game::GoGame;

/// Moves of the fixed demonstration game: black builds a wall and
/// captures the white cutting stone at D5.
const DEMO_GAME: &[&str] = &["D4", "D5", "C5", "A1", "E5", "A2", "D6"];

/// Goban: a Go rules-and-state engine
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a random self-play game and print the final position
    Demo {
        /// Seed for the random move picker
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Compensation score for white, in double-point units
        #[arg(long, default_value_t = DEFAULT_KOMI)]
        komi: i32,
    },
    /// Play a fixed demonstration sequence and print the area score
    Score,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { seed, komi }) => run_demo(seed, komi),
        Some(Commands::Score) => run_score(),
        None => run_demo(42, DEFAULT_KOMI),
    }
}

/// Self-play with uniformly random legal moves until the game ends.
fn run_demo(seed: u64, komi: i32) -> Result<()> {
    println!("Goban: random self-play demo (seed {seed})\n");

    let game = random_game(seed, komi);

    println!(
        "game over after {} plies, last move {}",
        game.length(),
        format_point(game.last_move())
    );
    println!("\n{}", game.to_board());
    println!("score: {}", game.score());
    println!(
        "winner: {}",
        match game.winner() {
            SOUTH => "black",
            DRAW => "draw",
            _ => "white",
        }
    );

    Ok(())
}

/// Replay the fixed demonstration game and print its area score.
fn run_score() -> Result<()> {
    let game = fixed_game()?;

    println!("Goban: fixed demonstration game\n");
    println!("{}", game.to_board());
    println!("score: {}", game.score());

    Ok(())
}

/// Play random legal moves until the game ends or the ply cap is hit.
fn random_game(seed: u64, komi: i32) -> GoGame {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut game = GoGame::new();
    game.set_komi_score(komi);

    while !game.has_ended() && game.length() < MAX_GAME_LEN {
        let moves = legal_moves(&mut game);
        let mv = moves[rng.usize(..moves.len())];
        game.make_move(mv);
    }

    game
}

/// Play the fixed demonstration moves on a fresh game.
fn fixed_game() -> Result<GoGame> {
    let mut game = GoGame::new();

    for text in DEMO_GAME {
        let mv = parse_point(text)?;
        ensure!(game.is_legal(mv), "demo move {text} is not legal");
        game.make_move(mv);
    }

    Ok(game)
}

/// All legal moves for the player to move. Never empty, the forfeit
/// move is always legal.
fn legal_moves(game: &mut GoGame) -> Vec<usize> {
    let mut moves = Vec::with_capacity(FORFEIT_MOVE + 1);
    game.reset_cursor();

    loop {
        let mv = game.next_move();
        if mv == NULL_MOVE {
            break;
        }
        moves.push(mv);
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_game_captures_and_scores() {
        let game = fixed_game().unwrap();
        assert_eq!(game.length(), DEMO_GAME.len());

        // Black: four stones plus the captured point at D5; white: two
        // stones in the corner; the rest of the board is open.
        assert_eq!(game.score(), 6 - DEFAULT_KOMI);
    }

    #[test]
    fn test_random_game_respects_ply_cap() {
        let game = random_game(7, DEFAULT_KOMI);
        assert!(game.length() <= MAX_GAME_LEN);
    }
}
