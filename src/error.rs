//! Usage errors reported back to the caller

use crate::WIDTH;

/// Recoverable errors from moves, undo and the game session.
///
/// None of these leave the board partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {0} out of range, columns must be between 1 and {}", WIDTH)]
    ColumnOutOfRange(usize),

    /// `column` is 0-indexed, the message shows it 1-indexed
    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("there are no moves to undo")]
    EmptyHistory,

    #[error("the bot is still thinking")]
    SearchInProgress,

    #[error("it is not your turn")]
    NotYourTurn,
}

/// Errors from move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no move can be proposed for a finished game")]
    GameOver,

    #[error("every column is full")]
    BoardFull,
}

/// Errors from building a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("search depth must be at least 1 ply, got {0}")]
    InvalidDepth(usize),

    #[error("unknown player '{0}', expected 'one', 'two' or 'none'")]
    UnknownPlayer(String),
}
