//! A Connect 4 game model with a minimax opponent
//!
//! The crate holds the authoritative game state and a fixed-depth
//! alpha-beta search that picks a column for the computer player.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_bot::{board::Board, config::SearchConfig, search::SearchEngine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has three on the bottom row and is to move
//! let board = Board::from_moves("112233")?;
//! let engine = SearchEngine::new(SearchConfig::with_depth(4)?);
//!
//! // columns are 0-indexed, so this is the fourth column
//! assert_eq!(engine.select_move(&board)?, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod config;

pub mod history;

pub mod terminal;

pub mod board;

pub mod evaluator;

pub mod search;

pub mod session;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const WIN_LENGTH: usize = 4;

// a window must fit on the board in every orientation
const_assert!(WIN_LENGTH <= WIDTH && WIN_LENGTH <= HEIGHT);
// move columns are stored as u8 in the history
const_assert!(WIDTH <= u8::MAX as usize);
