use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_bot::{
    board::{Board, Cell},
    HEIGHT, WIDTH,
};

/// Draws the board in colour below the cursor, top row first
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits on the line of the bottom row
    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for (idx, cell) in board.cells().iter().enumerate() {
        let (pos_x, pos_y) = (
            origin_x + (idx % WIDTH) as u16,
            origin_y - 1 - (idx / WIDTH) as u16,
        );

        stdout
            .queue(MoveTo(pos_x, pos_y))?
            .queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match cell {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
    }
    stdout
        .queue(MoveTo(origin_x + WIDTH as u16, origin_y - 1))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
