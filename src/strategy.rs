//! The four move-choosing policies
//!
//! Each strategy is a pure function of the board and the side to move;
//! nothing is remembered between calls. All of them scan columns in
//! ascending order, so the lowest-indexed candidate wins ties, and all
//! of them simulate on private board copies only.
//!
//! Calling a strategy on a full board violates the caller contract:
//! check [`Board::is_full`] first.

use rand::Rng;

use crate::board::{Board, Player};
use crate::eval::differential_score;
use crate::threat::count_immediate_wins;
use crate::COLS;

/// Score penalty for leaving the opponent a double threat
const FORK_PENALTY: i32 = 100_000;

/// Strength of the computer opponent
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    /// Runs the strategy this difficulty stands for on the caller's
    /// own execution context
    pub fn run(self, board: &Board, player: Player, rng: &mut impl Rng) -> usize {
        match self {
            Difficulty::Easy => easy(board, player, rng),
            Difficulty::Medium => medium(board, player, rng),
            Difficulty::Hard => hard(board, player, rng),
            Difficulty::Expert => expert(board, player, rng),
        }
    }
}

/// The first column where `player` completes four-in-a-row, if any
fn winning_column(board: &Board, player: Player) -> Option<usize> {
    (0..COLS).find(|&column| {
        let mut probe = *board;
        probe.drop_piece(column, player).is_ok() && probe.has_four_in_a_row(player)
    })
}

/// Samples random columns until one is playable
///
/// No look-ahead at all: this level happily overlooks both wins and
/// losses.
pub fn easy(board: &Board, _player: Player, rng: &mut impl Rng) -> usize {
    debug_assert!(!board.is_full(), "no playable column on a full board");
    loop {
        let column = rng.gen_range(0..COLS);
        if board.is_valid_move(column) {
            return column;
        }
    }
}

/// Takes an immediate win, else blocks an immediate loss, else plays
/// randomly
pub fn medium(board: &Board, player: Player, rng: &mut impl Rng) -> usize {
    if let Some(column) = winning_column(board, player) {
        return column;
    }
    if let Some(column) = winning_column(board, player.opponent()) {
        return column;
    }
    easy(board, player, rng)
}

/// One-ply greedy search over the differential score
pub fn hard(board: &Board, player: Player, rng: &mut impl Rng) -> usize {
    let mut best: Option<(usize, i32)> = None;
    for column in 0..COLS {
        let mut probe = *board;
        if probe.drop_piece(column, player).is_err() {
            continue;
        }
        let score = differential_score(&probe, player);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((column, score));
        }
    }
    match best {
        Some((column, _)) => column,
        None => easy(board, player, rng),
    }
}

/// Layered two-ply policy: win, block, build a trap, then pick the
/// move with the best worst-case reply
///
/// An opponent reply that sets up a double threat is treated as
/// catastrophic regardless of its positional score.
pub fn expert(board: &Board, player: Player, rng: &mut impl Rng) -> usize {
    let opponent = player.opponent();

    if let Some(column) = winning_column(board, player) {
        return column;
    }
    if let Some(column) = winning_column(board, opponent) {
        return column;
    }

    // build a double threat when one move away from it
    for column in 0..COLS {
        let mut probe = *board;
        if probe.drop_piece(column, player).is_err() {
            continue;
        }
        if count_immediate_wins(&probe, player) >= 2 {
            return column;
        }
    }

    // maximin: rank each candidate by its worst opponent reply
    let mut best: Option<(usize, i32)> = None;
    for column in 0..COLS {
        let mut probe = *board;
        if probe.drop_piece(column, player).is_err() {
            continue;
        }

        let mut worst: Option<i32> = None;
        for reply in 0..COLS {
            let mut answered = probe;
            if answered.drop_piece(reply, opponent).is_err() {
                continue;
            }
            let mut score = differential_score(&answered, player);
            if count_immediate_wins(&answered, opponent) >= 2 {
                score -= FORK_PENALTY;
            }
            if worst.map_or(true, |low| score < low) {
                worst = Some(score);
            }
        }

        // no legal reply leaves the one-ply score as the worst case
        let worst = worst.unwrap_or_else(|| differential_score(&probe, player));
        if best.map_or(true, |(_, top)| worst > top) {
            best = Some((column, worst));
        }
    }

    match best {
        Some((column, _)) => column,
        None => medium(board, player, rng),
    }
}
