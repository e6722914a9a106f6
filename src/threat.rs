//! Immediate-win counting, used to spot unstoppable traps

use crate::board::{Board, Player};
use crate::COLS;

/// Counts the columns where dropping a piece wins for `player` at once
///
/// A count of two or more is a trap: the opponent can only block one
/// column per turn.
pub fn count_immediate_wins(board: &Board, player: Player) -> usize {
    let mut wins = 0;
    for column in 0..COLS {
        let mut probe = *board;
        if probe.drop_piece(column, player).is_err() {
            continue;
        }
        if probe.has_four_in_a_row(player) {
            wins += 1;
        }
    }
    wins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_immediate_wins() {
        let board = Board::new();
        assert_eq!(count_immediate_wins(&board, Player::One), 0);
        assert_eq!(count_immediate_wins(&board, Player::Two), 0);
    }

    #[test]
    fn open_ended_three_counts_both_ends() {
        let mut board = Board::new();
        for column in 2..5 {
            board.drop_piece(column, Player::One).unwrap();
        }
        // columns 1 and 5 both complete the run
        assert_eq!(count_immediate_wins(&board, Player::One), 2);
        assert_eq!(count_immediate_wins(&board, Player::Two), 0);
    }

    #[test]
    fn blocked_three_counts_one_end() {
        let mut board = Board::new();
        for column in 2..5 {
            board.drop_piece(column, Player::One).unwrap();
        }
        board.drop_piece(1, Player::Two).unwrap();
        assert_eq!(count_immediate_wins(&board, Player::One), 1);
    }

    #[test]
    fn a_won_column_must_still_be_playable() {
        let mut board = Board::new();
        // vertical three in a full-to-the-brim column is not a win-in-one
        for _ in 0..3 {
            board.drop_piece(0, Player::Two).unwrap();
        }
        for _ in 0..3 {
            board.drop_piece(0, Player::One).unwrap();
        }
        assert_eq!(count_immediate_wins(&board, Player::Two), 0);
    }
}
