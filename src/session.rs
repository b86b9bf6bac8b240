//! A single game between players, one of whom may be the search
//!
//! The session is the only writer of the live board. Bot moves are searched
//! on a background thread from a snapshot of the board, and the answer is
//! applied through the same path as human moves once it arrives. While a
//! search is outstanding, human moves and undo are refused.

use log::{debug, info, warn};

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

use crate::{
    board::{Board, Outcome},
    config::{Mode, SessionConfig},
    error::{ConfigError, GameError, SearchError},
    search::{SearchEngine, SearchReport},
};

pub struct GameSession {
    board: Board,
    config: SessionConfig,
    engine: SearchEngine,
    pending: Option<Receiver<Result<SearchReport, SearchError>>>,
    last_report: Option<SearchReport>,
    last_error: Option<(GameError, Instant)>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(),
            config,
            engine: SearchEngine::new(config.search),
            pending: None,
            last_report: None,
            last_error: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// True while a bot search is outstanding
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// True if the game is running and the bot is to move
    pub fn is_bot_turn(&self) -> bool {
        !self.board.outcome().is_over() && self.mode().bot() == Some(self.board.active_turn())
    }

    /// The analysis behind the last bot move
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }

    /// The message of the last rejected action, until it has been shown for
    /// the configured time
    pub fn last_error(&self) -> Option<String> {
        match self.last_error {
            Some((err, at)) if at.elapsed() < self.config.error_display => Some(err.to_string()),
            _ => None,
        }
    }

    /// Plays a human move in a 0-indexed column
    pub fn play(&mut self, column: usize) -> Result<(), GameError> {
        let result = self.human_guard().and_then(|_| self.board.apply_move(column));
        self.record(result)
    }

    /// Plays a human move in a 1-indexed column as typed by a player
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<(), GameError> {
        let result = self
            .human_guard()
            .and_then(|_| self.board.play_checked(column_one_indexed));
        self.record(result)
    }

    /// Takes back moves until a human is to move again
    ///
    /// Against the bot this is usually two plies, the bot's reply and the
    /// human move before it.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.pending.is_some() {
            return self.record(Err(GameError::SearchInProgress));
        }
        let result = self.take_back_to_human();
        debug!("undo, moves now '{}'", self.board.moves());
        self.record(result)
    }

    fn take_back_to_human(&mut self) -> Result<(), GameError> {
        self.board.undo()?;
        // a lone bot opening move leaves nothing more to take back
        if self.mode().bot() == Some(self.board.active_turn()) && !self.board.history().is_empty() {
            self.board.undo()?;
        }
        Ok(())
    }

    /// Starts a new game, discarding any outstanding search
    pub fn restart(&mut self) {
        if self.pending.take().is_some() {
            warn!("restarting while the bot is thinking, its move will be discarded");
        }
        self.board.restart();
        self.last_report = None;
        self.last_error = None;
        info!("new game");
    }

    /// Starts a bot search if it is the bot's turn and none is running
    ///
    /// Returns whether a search was started.
    pub fn start_search(&mut self) -> bool {
        if self.pending.is_some() || !self.is_bot_turn() {
            return false;
        }

        let (tx, rx) = mpsc::channel();
        let board = self.board.clone();
        let engine = self.engine;
        thread::spawn(move || {
            let result = engine.analyse(&board);
            if tx.send(result).is_err() {
                debug!("search result for '{}' dropped", board.moves());
            }
        });
        self.pending = Some(rx);
        debug!("bot search started for '{}'", self.board.moves());
        true
    }

    /// Applies the bot move if its search has finished, without blocking
    pub fn poll_search(&mut self) -> Option<usize> {
        let rx = self.pending.as_ref()?;
        let received = match rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => None,
        };
        self.finish_search(received)
    }

    /// Waits for the bot search to finish and applies its move
    pub fn wait_search(&mut self) -> Option<usize> {
        let rx = self.pending.as_ref()?;
        let received = rx.recv().ok();
        self.finish_search(received)
    }

    fn finish_search(
        &mut self,
        received: Option<Result<SearchReport, SearchError>>,
    ) -> Option<usize> {
        self.pending = None;
        match received {
            Some(Ok(report)) => {
                let column = report.column;
                // the board cannot have changed since the search cloned it
                self.board.play(column);
                info!("bot plays column {} (score {})", column + 1, report.score);
                self.last_report = Some(report);
                self.log_outcome();
                Some(column)
            }
            Some(Err(err)) => {
                warn!("bot search failed: {}", err);
                None
            }
            None => {
                warn!("bot search ended without an answer");
                None
            }
        }
    }

    fn human_guard(&self) -> Result<(), GameError> {
        if self.pending.is_some() {
            return Err(GameError::SearchInProgress);
        }
        if self.is_bot_turn() {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    fn record<T>(&mut self, result: Result<T, GameError>) -> Result<T, GameError> {
        match &result {
            Ok(_) => {
                self.last_error = None;
                self.log_outcome();
            }
            Err(err) => {
                debug!("rejected: {}", err);
                self.last_error = Some((*err, Instant::now()));
            }
        }
        result
    }

    fn log_outcome(&self) {
        match self.board.outcome() {
            Outcome::Playing => {}
            Outcome::Draw => info!("game drawn after '{}'", self.board.moves()),
            outcome => {
                if let Some(winner) = outcome.winner() {
                    info!("player {} wins after '{}'", winner.number(), self.board.moves());
                }
            }
        }
    }
}
