//! The move log the game layer uses for undo
//!
//! The engine never reads this; it exists so the console game can
//! retract moves.

use crate::board::{Board, Player};

/// One committed move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Recorded {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// A stack of committed moves, newest last
#[derive(Clone, Debug, Default)]
pub struct History {
    moves: Vec<Recorded>,
}

impl History {
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn push(&mut self, row: usize, column: usize, player: Player) {
        self.moves.push(Recorded {
            row,
            column,
            player,
        });
    }

    pub fn last(&self) -> Option<Recorded> {
        self.moves.last().copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Pops the latest move and lifts its piece off the board
    pub fn undo(&mut self, board: &mut Board) -> Option<Recorded> {
        let recorded = self.moves.pop()?;
        let lifted = board.lift_piece(recorded.column);
        debug_assert_eq!(lifted, Some(recorded.player));
        Some(recorded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_restores_the_previous_board() {
        let mut board = Board::new();
        let mut history = History::new();

        let before = board;
        let row = board.drop_piece(4, Player::One).unwrap();
        history.push(row, 4, Player::One);

        let undone = history.undo(&mut board).unwrap();
        assert_eq!(undone, Recorded { row, column: 4, player: Player::One });
        assert_eq!(board, before);
        assert!(history.is_empty());
    }

    #[test]
    fn undo_pops_newest_first() {
        let mut board = Board::new();
        let mut history = History::new();

        for (column, player) in [(2, Player::One), (2, Player::Two), (6, Player::One)].iter() {
            let row = board.drop_piece(*column, *player).unwrap();
            history.push(row, *column, *player);
        }

        assert_eq!(history.undo(&mut board).map(|m| m.column), Some(6));
        assert_eq!(history.undo(&mut board).map(|m| m.player), Some(Player::Two));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn undo_on_empty_history_is_none() {
        let mut board = Board::new();
        let mut history = History::new();
        assert_eq!(history.undo(&mut board), None);
    }
}
