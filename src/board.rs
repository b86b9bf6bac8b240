//! The authoritative game state

use anyhow::{anyhow, Result};

use std::fmt;

use crate::{error::GameError, history::MoveHistory, terminal, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// 1 or 2, as shown to players
    pub fn number(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWin => Some(Player::One),
            Outcome::PlayerTwoWin => Some(Player::Two),
            _ => None,
        }
    }
}

/// A Connect 4 position together with the moves that led to it
///
/// Cloning gives a fully independent copy, which is how the search explores
/// hypothetical moves without touching the live game.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
    active: Player,
    history: MoveHistory,
    outcome: Outcome,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            active: Player::One,
            history: MoveHistory::new(),
            outcome: Outcome::Playing,
        }
    }

    /// Builds a board from a string of 1-indexed column digits, e.g. `"4453"`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => board.play_checked(column as usize)?,
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Plays a 1-indexed column as typed by a player
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<(), GameError> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(GameError::ColumnOutOfRange(column_one_indexed));
        }
        self.apply_move(column_one_indexed - 1)
    }

    /// Drops a tile of the active player into a 0-indexed column
    ///
    /// On error the board is left untouched.
    pub fn apply_move(&mut self, column: usize) -> Result<(), GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if column >= WIDTH {
            return Err(GameError::ColumnOutOfRange(column + 1));
        }
        if self.is_column_full(column) {
            return Err(GameError::ColumnFull(column));
        }
        self.play(column);
        Ok(())
    }

    /// Plays a move known to be legal
    ///
    /// # Panics
    /// If the game is over or the column is full. Callers such as the search
    /// only offer playable columns, so either case is a bug.
    pub fn play(&mut self, column: usize) {
        assert!(!self.outcome.is_over(), "move played after the game ended");
        assert!(self.playable(column), "column {} is not playable", column);

        self.cells[column + WIDTH * self.heights[column]] = self.active.cell();
        self.heights[column] += 1;
        self.active = self.active.other();
        self.history.push(column);
        self.outcome = terminal::detect(&self.cells);
    }

    /// Takes back the most recent move
    pub fn undo(&mut self) -> Result<(), GameError> {
        let column = self.history.pop().ok_or(GameError::EmptyHistory)?;

        self.heights[column] -= 1;
        self.cells[column + WIDTH * self.heights[column]] = Cell::Empty;
        self.active = self.active.other();
        // a position reached by a legal move sequence is never terminal
        // before its last move
        self.outcome = Outcome::Playing;
        Ok(())
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.heights[column] >= HEIGHT
    }

    /// True if a tile can be dropped into the column right now
    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && !self.is_column_full(column)
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h >= HEIGHT)
    }

    /// The 0-indexed columns that still have room, left to right
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| !self.is_column_full(column))
    }

    pub fn cell(&self, column: usize, row: usize) -> Cell {
        assert!(column < WIDTH && row < HEIGHT, "({}, {}) is off the board", column, row);
        self.cells[column + WIDTH * row]
    }

    pub fn cells(&self) -> &[Cell; WIDTH * HEIGHT] {
        &self.cells
    }

    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    pub fn active_turn(&self) -> Player {
        self.active
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The moves played so far as a 1-indexed move string
    pub fn moves(&self) -> String {
        self.history.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the grid top row first, `X` for player one and `O` for player two
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for column in 0..WIDTH {
                let tile = match self.cell(column, row) {
                    Cell::PlayerOne => 'X',
                    Cell::PlayerTwo => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }
        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        writeln!(f, "{}", cols)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("moves", &self.moves())
            .field("active", &self.active)
            .field("outcome", &self.outcome)
            .finish()
    }
}
