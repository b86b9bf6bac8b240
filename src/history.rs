//! The ordered record of played columns

use std::fmt;

use crate::{HEIGHT, WIDTH};

/// Append-only stack of the 0-indexed columns played so far
///
/// Its length always matches the number of tiles on the board, so replaying
/// it onto an empty board reproduces the position exactly.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    columns: [u8; WIDTH * HEIGHT],
    len: usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self {
            columns: [0; WIDTH * HEIGHT],
            len: 0,
        }
    }

    pub fn push(&mut self, column: usize) {
        assert!(column < WIDTH, "column {} outside the board", column);
        assert!(self.len < WIDTH * HEIGHT, "more moves than tiles");
        self.columns[self.len] = column as u8;
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let column = self.columns[self.len];
        // keep unused slots zeroed so equal histories compare equal
        self.columns[self.len] = 0;
        Some(column as usize)
    }

    pub fn last(&self) -> Option<usize> {
        self.as_slice().last().map(|&c| c as usize)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.columns = [0; WIDTH * HEIGHT];
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().map(|&c| c as usize)
    }

    fn as_slice(&self) -> &[u8] {
        &self.columns[..self.len]
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats as the 1-indexed move string accepted by `Board::from_moves`
impl fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in self.iter() {
            write!(f, "{}", column + 1)?;
        }
        Ok(())
    }
}

impl fmt::Debug for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
