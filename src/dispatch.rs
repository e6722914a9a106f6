//! Routes a difficulty to its strategy, off-thread for the heavy ones

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use std::thread;

use crate::board::{Board, Player};
use crate::strategy::{self, Difficulty};

/// A single move request for the worker thread
///
/// Holds its own copy of the board, so nothing the worker does is
/// visible to the caller before the column is read back. Each task is
/// consumed by exactly one strategy invocation.
pub struct SearchTask {
    board: Board,
    player: Player,
    difficulty: Difficulty,
    seed: u64,
}

impl SearchTask {
    pub fn new(board: &Board, player: Player, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            board: *board,
            player,
            difficulty,
            seed,
        }
    }

    /// Runs the requested search and yields the chosen column
    pub fn run(self) -> usize {
        let mut rng = StdRng::seed_from_u64(self.seed);
        match self.difficulty {
            Difficulty::Hard => strategy::hard(&self.board, self.player, &mut rng),
            _ => strategy::expert(&self.board, self.player, &mut rng),
        }
    }
}

/// Chooses a column for `player` at the given difficulty
///
/// Easy and Medium answer on the caller's context. Hard and Expert run
/// on a worker thread that is joined before returning; if the worker
/// cannot be started (or dies), the dispatch degrades to Medium and
/// says so at warn level.
///
/// Whenever the board has at least one open column, the returned
/// column is a valid move.
pub fn choose_column(
    board: &Board,
    difficulty: Difficulty,
    player: Player,
    rng: &mut impl Rng,
) -> usize {
    match difficulty {
        Difficulty::Easy => strategy::easy(board, player, rng),
        Difficulty::Medium => strategy::medium(board, player, rng),
        Difficulty::Hard | Difficulty::Expert => {
            let task = SearchTask::new(board, player, difficulty, rng.gen());
            let worker = thread::Builder::new()
                .name("ai-search".into())
                .spawn(move || task.run());
            match worker {
                Ok(handle) => match handle.join() {
                    Ok(column) => column,
                    Err(_) => {
                        warn!("search worker died, falling back to medium");
                        strategy::medium(board, player, rng)
                    }
                },
                Err(err) => {
                    warn!("could not start search worker ({}), falling back to medium", err);
                    strategy::medium(board, player, rng)
                }
            }
        }
    }
}
