//! Positional scoring for the heuristic strategies

use crate::board::{Board, Player};
use crate::{COLS, CONNECT, ROWS};

/// Bonus for each own piece sitting in the middle column
const CENTER_BONUS: i32 = 3;

/// Value of a window holding exactly `count` of the player's pieces
///
/// Windows with zero or one piece are worthless; opponent pieces in
/// the window are ignored.
fn window_bonus(count: usize) -> i32 {
    match count {
        2 => 10,
        3 => 50,
        4 => 1000,
        _ => 0,
    }
}

/// Scores `board` for `player`, higher being more desirable
///
/// Every run of four cells along the four board axes is scored
/// independently; overlapping windows are each counted, so a strong
/// cluster is rewarded more than once.
pub fn score_position(board: &Board, player: Player) -> i32 {
    let target = player.cell();
    let mut score = 0;

    // middle column bonus
    let center = COLS / 2;
    for row in 0..ROWS {
        if board.get(row, center) == target {
            score += CENTER_BONUS;
        }
    }

    // horizontal windows
    for row in 0..ROWS {
        for column in 0..=COLS - CONNECT {
            let count = (0..CONNECT)
                .filter(|&i| board.get(row, column + i) == target)
                .count();
            score += window_bonus(count);
        }
    }

    // vertical windows
    for row in 0..=ROWS - CONNECT {
        for column in 0..COLS {
            let count = (0..CONNECT)
                .filter(|&i| board.get(row + i, column) == target)
                .count();
            score += window_bonus(count);
        }
    }

    // diagonal \ windows
    for row in 0..=ROWS - CONNECT {
        for column in 0..=COLS - CONNECT {
            let count = (0..CONNECT)
                .filter(|&i| board.get(row + i, column + i) == target)
                .count();
            score += window_bonus(count);
        }
    }

    // diagonal / windows
    for row in 0..=ROWS - CONNECT {
        for column in CONNECT - 1..COLS {
            let count = (0..CONNECT)
                .filter(|&i| board.get(row + i, column - i) == target)
                .count();
            score += window_bonus(count);
        }
    }

    score
}

/// `player`'s score minus the opponent's on the same board
///
/// This is the value the deeper strategies rank candidate moves by.
pub fn differential_score(board: &Board, player: Player) -> i32 {
    score_position(board, player) - score_position(board, player.opponent())
}
