//! Static scoring of positions at the search horizon

use crate::board::{Board, Cell, Player};
use crate::terminal::WINDOWS;
use crate::WIN_LENGTH;

/// Score of a window holding three tiles of one player and nothing of the other
pub const THREE_SCORE: i32 = 100;

/// Score of a window holding two tiles of one player and nothing of the other
pub const TWO_SCORE: i32 = 10;

/// Scores one window from the point of view of `perspective`
///
/// Windows holding tiles of both players can never be completed and score 0.
pub fn score_window(window: &[Cell; WIN_LENGTH], perspective: Player) -> i32 {
    let own = window.iter().filter(|&&c| c == perspective.cell()).count();
    let opponent = window.iter().filter(|&&c| c == perspective.other().cell()).count();

    let (count, sign) = match (own, opponent) {
        (0, 0) => return 0,
        (n, 0) => (n, 1),
        (0, n) => (n, -1),
        _ => return 0,
    };
    sign * match count {
        3 => THREE_SCORE,
        2 => TWO_SCORE,
        _ => 0,
    }
}

/// Sums the window scores over every row, column and diagonal
pub fn score(board: &Board, perspective: Player) -> i32 {
    let cells = board.cells();
    WINDOWS
        .iter()
        .map(|window| {
            let mut tiles = [Cell::Empty; WIN_LENGTH];
            for (tile, &idx) in tiles.iter_mut().zip(window.iter()) {
                *tile = cells[idx];
            }
            score_window(&tiles, perspective)
        })
        .sum()
}
