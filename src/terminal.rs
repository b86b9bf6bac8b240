//! Win and draw detection over a board grid
//!
//! Every check works on the full set of 4-tile windows in all four
//! orientations, so the result only depends on the grid contents and never
//! on the order the tiles were played in.

use crate::board::{Cell, Outcome, Player};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

/// The number of windows of `WIN_LENGTH` tiles on the board
pub const NUM_WINDOWS: usize = (WIDTH + 1 - WIN_LENGTH) * HEIGHT
    + WIDTH * (HEIGHT + 1 - WIN_LENGTH)
    + 2 * (WIDTH + 1 - WIN_LENGTH) * (HEIGHT + 1 - WIN_LENGTH);

/// Cell indices of every window: horizontal, vertical, diagonal `/`, diagonal `\`
pub static WINDOWS: [[usize; WIN_LENGTH]; NUM_WINDOWS] = windows();

const fn windows() -> [[usize; WIN_LENGTH]; NUM_WINDOWS] {
    // (dx, dy) steps for each orientation
    const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
    let reach = WIN_LENGTH as isize - 1;

    let mut windows = [[0; WIN_LENGTH]; NUM_WINDOWS];
    let mut n = 0;
    let mut d = 0;
    while d < DIRECTIONS.len() {
        let (dx, dy) = DIRECTIONS[d];
        let mut column = 0;
        while column < WIDTH {
            let mut row = 0;
            while row < HEIGHT {
                let end_x = column as isize + dx * reach;
                let end_y = row as isize + dy * reach;
                if end_x >= 0 && end_x < WIDTH as isize && end_y >= 0 && end_y < HEIGHT as isize {
                    let mut i = 0;
                    while i < WIN_LENGTH {
                        let x = column as isize + dx * i as isize;
                        let y = row as isize + dy * i as isize;
                        windows[n][i] = x as usize + WIDTH * y as usize;
                        i += 1;
                    }
                    n += 1;
                }
                row += 1;
            }
            column += 1;
        }
        d += 1;
    }
    assert!(n == NUM_WINDOWS);
    windows
}

/// Returns the player owning a full window, if any
pub fn winner(cells: &[Cell; WIDTH * HEIGHT]) -> Option<Player> {
    WINDOWS.iter().find_map(|window| {
        let owner = cells[window[0]].player()?;
        if window[1..].iter().all(|&idx| cells[idx] == owner.cell()) {
            Some(owner)
        } else {
            None
        }
    })
}

/// Determines the outcome of a grid
pub fn detect(cells: &[Cell; WIDTH * HEIGHT]) -> Outcome {
    match winner(cells) {
        Some(Player::One) => Outcome::PlayerOneWin,
        Some(Player::Two) => Outcome::PlayerTwoWin,
        None if cells.iter().all(|cell| !cell.is_empty()) => Outcome::Draw,
        None => Outcome::Playing,
    }
}
