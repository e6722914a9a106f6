//! Turn-taking state machine around the live board
//!
//! The game layer owns the only mutable board. AI turns ask the
//! dispatch for a column and apply it here; the engine itself never
//! touches the live board.

use rand::Rng;
use thiserror::Error;

use crate::board::{Board, MoveError, Player};
use crate::dispatch::choose_column;
use crate::history::History;
use crate::strategy::Difficulty;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsAi,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum PlayError {
    #[error("the game is already over")]
    GameOver,
    #[error(transparent)]
    Move(#[from] MoveError),
}

pub struct Game {
    board: Board,
    current: Player,
    mode: GameMode,
    ai_seat: Option<Player>,
    difficulty: Difficulty,
    history: History,
    state: GameState,
}

impl Game {
    /// Starts a fresh game; `ai_seat` is honored only in [`GameMode::PlayerVsAi`]
    pub fn new(
        mode: GameMode,
        starting_player: Player,
        ai_seat: Player,
        difficulty: Difficulty,
    ) -> Self {
        let ai_seat = match mode {
            GameMode::PlayerVsAi => Some(ai_seat),
            GameMode::PlayerVsPlayer => None,
        };
        Self {
            board: Board::new(),
            current: starting_player,
            mode,
            ai_seat,
            difficulty,
            history: History::new(),
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    pub fn ai_to_move(&self) -> bool {
        self.state == GameState::Playing && self.ai_seat == Some(self.current)
    }

    /// Asks the dispatch for the AI's column without touching the board
    pub fn ai_column(&self, rng: &mut impl Rng) -> usize {
        choose_column(&self.board, self.difficulty, self.current, rng)
    }

    /// Applies the current player's move, then switches sides if the
    /// game goes on
    pub fn play(&mut self, column: usize) -> Result<GameState, PlayError> {
        if self.state != GameState::Playing {
            return Err(PlayError::GameOver);
        }

        let row = self.board.drop_piece(column, self.current)?;
        self.history.push(row, column, self.current);

        self.state = if self.board.has_four_in_a_row(self.current) {
            GameState::Won(self.current)
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };

        if self.state == GameState::Playing {
            self.current = self.current.opponent();
        }
        Ok(self.state)
    }

    /// Retracts up to two moves (the AI's reply and the human's move),
    /// returning how many came off
    pub fn undo_round(&mut self) -> usize {
        let mut undone = 0;
        for _ in 0..2 {
            match self.history.undo(&mut self.board) {
                Some(recorded) => {
                    self.current = recorded.player;
                    undone += 1;
                }
                None => break,
            }
        }
        if undone > 0 {
            self.state = GameState::Playing;
        }
        undone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_player_game() -> Game {
        Game::new(
            GameMode::PlayerVsPlayer,
            Player::One,
            Player::Two,
            Difficulty::Easy,
        )
    }

    #[test]
    fn play_alternates_sides() {
        let mut game = two_player_game();
        assert_eq!(game.current_player(), Player::One);
        game.play(0).unwrap();
        assert_eq!(game.current_player(), Player::Two);
        game.play(1).unwrap();
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn play_detects_a_win() {
        let mut game = two_player_game();
        // One stacks column 0, Two stacks column 6
        for _ in 0..3 {
            game.play(0).unwrap();
            game.play(6).unwrap();
        }
        assert_eq!(game.play(0).unwrap(), GameState::Won(Player::One));
        assert_eq!(game.state(), GameState::Won(Player::One));
    }

    #[test]
    fn no_moves_after_the_game_is_over() {
        let mut game = two_player_game();
        for _ in 0..3 {
            game.play(0).unwrap();
            game.play(6).unwrap();
        }
        game.play(0).unwrap();
        assert_eq!(game.play(3), Err(PlayError::GameOver));
    }

    #[test]
    fn full_column_is_reported() {
        let mut game = two_player_game();
        for _ in 0..6 {
            game.play(2).unwrap();
        }
        assert_eq!(
            game.play(2),
            Err(PlayError::Move(MoveError::ColumnFull(2)))
        );
    }

    #[test]
    fn undo_round_retracts_both_halves() {
        let mut game = two_player_game();
        game.play(3).unwrap();
        game.play(4).unwrap();
        let board_after_two = *game.board();

        game.play(5).unwrap();
        game.play(6).unwrap();

        assert_eq!(game.undo_round(), 2);
        assert_eq!(*game.board(), board_after_two);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn undo_round_with_no_history_does_nothing() {
        let mut game = two_player_game();
        assert_eq!(game.undo_round(), 0);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn undo_reopens_a_finished_game() {
        let mut game = two_player_game();
        for _ in 0..3 {
            game.play(0).unwrap();
            game.play(6).unwrap();
        }
        game.play(0).unwrap();
        assert_eq!(game.undo_round(), 2);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.current_player(), Player::Two);
        // the winning threat is still on the board once Two has replied
        game.play(6).unwrap();
        assert_eq!(game.play(0).unwrap(), GameState::Won(Player::One));
    }

    #[test]
    fn ai_seat_only_moves_in_ai_mode() {
        let pvp = two_player_game();
        assert!(!pvp.ai_to_move());

        let pvai = Game::new(
            GameMode::PlayerVsAi,
            Player::Two,
            Player::Two,
            Difficulty::Medium,
        );
        assert!(pvai.ai_to_move());
    }

    #[test]
    fn ai_column_is_always_playable() {
        let game = Game::new(
            GameMode::PlayerVsAi,
            Player::One,
            Player::One,
            Difficulty::Medium,
        );
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let column = game.ai_column(&mut rng);
            assert!(game.board().is_valid_move(column));
        }
    }
}
