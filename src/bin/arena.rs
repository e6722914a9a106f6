//! Self-play evaluation: pits two difficulties against each other
//!
//! Games are seeded by their index, so a run is reproducible; sides
//! swap every other game to cancel the first-move advantage.

use anyhow::{anyhow, bail, Result};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use std::sync::mpsc::channel;
use std::thread;
use std::time::Instant;

use connect4_engine::board::{Board, Player};
use connect4_engine::strategy::Difficulty;

const DEFAULT_GAMES: usize = 200;

struct Outcome {
    winner: Option<Player>,
    moves: usize,
}

fn parse_difficulty(arg: &str) -> Result<Difficulty> {
    match arg.to_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        "expert" => Ok(Difficulty::Expert),
        other => Err(anyhow!("unknown difficulty '{}'", other)),
    }
}

/// Plays one full game, `first` moving first
fn play_game(first: Difficulty, second: Difficulty, seed: u64) -> Outcome {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut current = Player::One;
    let mut moves = 0;

    loop {
        let difficulty = match current {
            Player::One => first,
            Player::Two => second,
        };
        let column = difficulty.run(&board, current, &mut rng);
        board
            .drop_piece(column, current)
            .expect("strategy returned an unplayable column");
        moves += 1;

        if board.has_four_in_a_row(current) {
            return Outcome {
                winner: Some(current),
                moves,
            };
        }
        if board.is_full() {
            return Outcome {
                winner: None,
                moves,
            };
        }
        current = current.opponent();
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: arena <easy|medium|hard|expert> <easy|medium|hard|expert> [games]");
    }
    let side_a = parse_difficulty(&args[0])?;
    let side_b = parse_difficulty(&args[1])?;
    let games: usize = match args.get(2) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_GAMES,
    };

    let start = Instant::now();
    let (tx, rx) = channel();

    thread::spawn(move || {
        (0..games).into_par_iter().for_each_with(tx, |tx, index| {
            // swap seats on odd games
            let (first, second) = if index % 2 == 0 {
                (side_a, side_b)
            } else {
                (side_b, side_a)
            };
            let outcome = play_game(first, second, index as u64);
            let winner = outcome.winner.map(|player| match (player, index % 2) {
                (Player::One, 0) | (Player::Two, 1) => side_a,
                _ => side_b,
            });
            tx.send((winner, outcome.moves))
                .expect("result channel closed");
        });
    });

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let mut wins_a = 0usize;
    let mut wins_b = 0usize;
    let mut draws = 0usize;
    let mut total_moves = 0usize;

    for _ in 0..games {
        let (winner, moves) = rx.recv()?;
        match winner {
            Some(difficulty) if difficulty == side_a => wins_a += 1,
            Some(_) => wins_b += 1,
            None => draws += 1,
        }
        total_moves += moves;
        progress.inc(1);
    }
    progress.finish();

    println!(
        "{} games in {}",
        games,
        HumanDuration(start.elapsed())
    );
    println!(
        "{}: {} wins, {}: {} wins, draws: {}",
        side_a.name(),
        wins_a,
        side_b.name(),
        wins_b,
        draws
    );
    println!(
        "mean game length: {:.1} moves",
        total_moves as f64 / games as f64
    );
    Ok(())
}
