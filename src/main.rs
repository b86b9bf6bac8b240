use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use std::io::{stdin, stdout, Write};
use std::thread;
use std::time::Duration;

use connect4_bot::{
    board::Outcome,
    config::{Mode, SearchConfig, SessionConfig, DEFAULT_DEPTH},
    session::GameSession,
};

mod display;

/// Play Connect 4 in the terminal, optionally against a minimax bot
#[derive(Parser)]
#[command(name = "connect4", version, about, long_about = None)]
struct Cli {
    /// Which player the bot controls: one, two or none
    #[arg(long, default_value = "two")]
    bot: Mode,

    /// How many plies the bot searches ahead
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut session = GameSession::new(SessionConfig {
        mode: cli.bot,
        search: SearchConfig::with_depth(cli.depth)?,
        ..SessionConfig::default()
    })?;

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        display::draw(session.board())?;
        if let Some(error) = session.last_error() {
            println!("Oops! {}", error);
        }

        match session.board().outcome() {
            Outcome::Playing => {
                if session.is_bot_turn() {
                    bot_move(&mut session);
                    continue;
                }

                let player = session.board().active_turn().number();
                print!("Player {} move (1-7, u: undo, r: restart, q: quit) > ", player);
                stdout().flush()?;
                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    break;
                }

                match input_str.trim() {
                    "q" => break,
                    // rejected actions are shown by the session on the next draw
                    "u" => {
                        let _ = session.undo();
                    }
                    "r" => session.restart(),
                    other => match other.parse::<usize>() {
                        Ok(column) => {
                            let _ = session.play_checked(column);
                        }
                        Err(_) => println!("Invalid number: {}", other),
                    },
                }
            }

            // end states
            outcome => {
                match outcome.winner() {
                    Some(player) => println!("Player {} wins!", player.number()),
                    None => println!("Draw!"),
                }

                print!("Play again? y/n: ");
                stdout().flush()?;
                let mut buffer = String::new();
                stdin.read_line(&mut buffer)?;
                match buffer.to_lowercase().chars().next() {
                    Some('y') => session.restart(),
                    _ => break,
                }
            }
        }
    }
    Ok(())
}

/// Runs the bot search in the background while a spinner keeps the
/// terminal alive, then reports what the bot found
fn bot_move(session: &mut GameSession) {
    if !session.start_search() {
        return;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
    spinner.set_message("AI is thinking...");
    spinner.enable_steady_tick(100);

    let column = loop {
        if let Some(column) = session.poll_search() {
            break Some(column);
        }
        if !session.is_thinking() {
            break None;
        }
        thread::sleep(Duration::from_millis(20));
    };
    spinner.finish_and_clear();

    let column = match column {
        Some(column) => column,
        None => {
            println!("The bot could not find a move");
            return;
        }
    };

    if let Some(report) = session.last_report() {
        // the bot moved, so the board now shows its opponent to move
        let bot = session.board().active_turn().other().number();
        let human = session.board().active_turn().number();
        if let Some(distance) = session.engine().score_to_win_distance(report.score) {
            let winner = if report.score > 0 { bot } else { human };
            let ply_string = if distance == 1 { "ply" } else { "plies" };
            println!(
                "Player {} can force a win in at most {} {}.",
                winner, distance, ply_string
            );
        }
    }
    println!("Best move: {}", column + 1);
}
