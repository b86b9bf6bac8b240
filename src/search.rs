//! Move selection by fixed-depth minimax with alpha-beta pruning

use log::debug;
use rayon::prelude::*;

use crate::{
    board::{Board, Outcome, Player},
    config::SearchConfig,
    error::SearchError,
    evaluator, WIDTH,
};

/// Base score of a won position, far above any heuristic score
pub const WIN_SCORE: i32 = 100_000;

/// Returns the columns ordered from the middle outwards, left before right,
/// as the middle columns are often better moves
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (1 - i % 2) * (i / 2) - (i % 2) * (i / 2 + 1);
        i += 1;
    }
    move_order
}

/// The result of a search from one position
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// The chosen 0-indexed column
    pub column: usize,
    /// The minimax value of the chosen column
    pub score: i32,
    /// The value of every playable column, in search order
    pub scores: Vec<(usize, i32)>,
    /// The number of positions visited (for diagnostics only)
    pub node_count: usize,
}

/// Picks moves for the player to move by looking a fixed number of plies ahead
///
/// # Position Scoring
/// Scores are from the point of view of the player the engine moves for.
/// A win is worth [`WIN_SCORE`] plus the plies left unsearched when it
/// happens, so quicker wins score higher; a loss is the negation, so slower
/// losses score higher. Draws are 0 and positions at the horizon get the
/// window heuristic of [`evaluator::score`].
#[derive(Copy, Clone, Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn depth(&self) -> usize {
        self.config.depth()
    }

    /// Returns the best 0-indexed column for the player to move
    pub fn select_move(&self, board: &Board) -> Result<usize, SearchError> {
        self.analyse(board).map(|report| report.column)
    }

    /// Searches every playable column and reports all of their values
    ///
    /// Each root move is searched with a full window, so they are independent
    /// and run in parallel. Ties go to the earliest column in [`move_order`].
    pub fn analyse(&self, board: &Board) -> Result<SearchReport, SearchError> {
        if board.is_full() {
            return Err(SearchError::BoardFull);
        }
        if board.outcome().is_over() {
            return Err(SearchError::GameOver);
        }

        let perspective = board.active_turn();
        let depth = self.depth();
        let candidates: Vec<usize> = move_order()
            .iter()
            .copied()
            .filter(|&column| board.playable(column))
            .collect();

        let results: Vec<(usize, i32, usize)> = candidates
            .par_iter()
            .map(|&column| {
                let mut next = board.clone();
                next.play(column);
                let mut searcher = Searcher::new(perspective);
                // the opponent moves next and minimises
                let score = searcher.minimax(&next, depth - 1, i32::MIN, i32::MAX, false);
                (column, score, searcher.node_count)
            })
            .collect();

        let mut best: Option<(usize, i32)> = None;
        let mut node_count = 1;
        for &(column, score, nodes) in results.iter() {
            node_count += nodes;
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((column, score)),
            }
        }
        // a non-full board always has a candidate
        let (column, score) = best.ok_or(SearchError::BoardFull)?;
        let scores: Vec<(usize, i32)> = results.iter().map(|&(c, s, _)| (c, s)).collect();

        debug!(
            "searched {} to depth {}: {} nodes, scores {:?}, best column {} ({})",
            board.moves(),
            depth,
            node_count,
            scores,
            column + 1,
            score
        );

        Ok(SearchReport {
            column,
            score,
            scores,
            node_count,
        })
    }

    /// Evaluates `board` for the player who maximises, searching `depth` plies
    ///
    /// `maximizing` tells whether the player to move in `board` is that
    /// player. Pruning only skips work; the value matches a full-width search
    /// when called with the widest window.
    pub fn minimax(
        &self,
        board: &Board,
        depth: usize,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> i32 {
        let perspective = if maximizing {
            board.active_turn()
        } else {
            board.active_turn().other()
        };
        Searcher::new(perspective).minimax(board, depth, alpha, beta, maximizing)
    }

    /// Converts a decided score to the number of plies until the game ends,
    /// counted from the searched position. Undecided scores give `None`.
    pub fn score_to_win_distance(&self, score: i32) -> Option<usize> {
        let margin = score.abs() - WIN_SCORE;
        if margin < 0 {
            return None;
        }
        Some(self.depth().saturating_sub(margin as usize))
    }
}

/// Scores a finished game, or returns `None` while it is still being played
pub fn terminal_score(outcome: Outcome, perspective: Player, depth: usize) -> Option<i32> {
    match outcome {
        Outcome::Playing => None,
        Outcome::Draw => Some(0),
        _ if outcome.winner() == Some(perspective) => Some(WIN_SCORE + depth as i32),
        _ => Some(-WIN_SCORE - depth as i32),
    }
}

struct Searcher {
    perspective: Player,
    node_count: usize,
}

impl Searcher {
    fn new(perspective: Player) -> Self {
        Self {
            perspective,
            node_count: 0,
        }
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.node_count += 1;

        if let Some(score) = terminal_score(board.outcome(), self.perspective, depth) {
            return score;
        }
        if depth == 0 {
            return evaluator::score(board, self.perspective);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for &column in move_order().iter() {
            if !board.playable(column) {
                continue;
            }
            let mut next = board.clone();
            next.play(column);
            let score = self.minimax(&next, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            // the other player will never let the game reach this branch
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
