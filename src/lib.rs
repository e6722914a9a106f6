//! A tiered opponent for playing the board game 'Connect 4'
//!
//! The engine chooses a column for the side to move at one of four
//! difficulty levels, from uniformly random play up to a two-ply
//! worst-case search with trap detection. The caller owns the live
//! board and applies the chosen move itself.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::board::{Board, Player};
//! use connect4_engine::dispatch::choose_column;
//! use connect4_engine::strategy::Difficulty;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let board = Board::new();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let column = choose_column(&board, Difficulty::Expert, Player::One, &mut rng);
//! assert!(board.is_valid_move(column));
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod eval;

pub mod threat;

pub mod strategy;

pub mod dispatch;

pub mod history;

pub mod game;


/// The number of rows on the game board, row 0 being the top
pub const ROWS: usize = 6;

/// The number of columns on the game board
pub const COLS: usize = 7;

/// The length of an aligned run that wins the game
pub const CONNECT: usize = 4;

// ensure a winning run fits on the board in every orientation
const_assert!(CONNECT <= ROWS);
const_assert!(CONNECT <= COLS);
