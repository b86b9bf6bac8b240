#[cfg(test)]
pub mod test {
    use anyhow::Result;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::board::{Board, Cell, Outcome, Player};
    use crate::config::SearchConfig;
    use crate::error::SearchError;
    use crate::evaluator;
    use crate::search::{move_order, terminal_score, SearchEngine, WIN_SCORE};
    use crate::{HEIGHT, WIDTH};

    // a full board with no alignment, ending with six moves in column 7
    const DRAWN_GAME: &str = "311111122222233333444445555556666664777777";

    fn engine(depth: usize) -> Result<SearchEngine> {
        Ok(SearchEngine::new(SearchConfig::with_depth(depth)?))
    }

    /// Plain minimax without pruning
    fn full_width(board: &Board, perspective: Player, depth: usize, maximizing: bool) -> i32 {
        if let Some(score) = terminal_score(board.outcome(), perspective, depth) {
            return score;
        }
        if depth == 0 {
            return evaluator::score(board, perspective);
        }
        let order = move_order();
        let scores = order
            .iter()
            .filter(|&&column| board.playable(column))
            .map(|&column| {
                let mut next = board.clone();
                next.play(column);
                full_width(&next, perspective, depth - 1, !maximizing)
            });
        if maximizing {
            scores.max().unwrap()
        } else {
            scores.min().unwrap()
        }
    }

    fn random_position(rng: &mut StdRng, max_moves: usize) -> Board {
        let mut board = Board::new();
        let moves = rng.gen_range(0..=max_moves);
        for _ in 0..moves {
            let columns: Vec<usize> = board.playable_columns().collect();
            let column = columns[rng.gen_range(0..columns.len())];
            let mut next = board.clone();
            next.play(column);
            if next.outcome().is_over() {
                break;
            }
            board = next;
        }
        board
    }

    #[test]
    pub fn history_tracks_every_tile() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let mut board = Board::new();
            while !board.outcome().is_over() {
                let columns: Vec<usize> = board.playable_columns().collect();
                let column = columns[rng.gen_range(0..columns.len())];

                // undo is a left inverse of a legal move
                let before = board.clone();
                board.apply_move(column)?;
                board.undo()?;
                assert_eq!(board, before);

                board.apply_move(column)?;
                let tiles = board.cells().iter().filter(|c| !c.is_empty()).count();
                assert_eq!(board.history().len(), tiles);
            }

            // replaying the history rebuilds the exact position
            let replayed = Board::from_moves(board.moves())?;
            assert_eq!(replayed, board);
        }
        Ok(())
    }

    #[test]
    pub fn tiles_never_float() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let board = random_position(&mut rng, 40);
            for column in 0..WIDTH {
                for row in 0..HEIGHT {
                    let filled = !board.cell(column, row).is_empty();
                    assert_eq!(filled, row < board.height(column));
                }
            }
        }
        Ok(())
    }

    #[test]
    pub fn full_board_is_a_draw() -> Result<()> {
        let board = Board::from_moves(DRAWN_GAME)?;
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Draw);

        let engine = engine(4)?;
        assert_eq!(engine.select_move(&board), Err(SearchError::BoardFull));
        Ok(())
    }

    #[test]
    pub fn finished_game_has_no_move() -> Result<()> {
        let board = Board::from_moves("1212121")?;
        assert_eq!(engine(3)?.select_move(&board), Err(SearchError::GameOver));
        Ok(())
    }

    #[test]
    pub fn last_open_column_is_chosen() -> Result<()> {
        let board = Board::from_moves(&DRAWN_GAME[..36])?;
        assert_eq!(board.playable_columns().collect::<Vec<_>>(), vec![6]);
        for depth in 1..=8 {
            assert_eq!(engine(depth)?.select_move(&board)?, 6);
        }
        Ok(())
    }

    #[test]
    pub fn takes_the_winning_move() -> Result<()> {
        // XO.....
        // XO.....
        // XO.....  player one to move
        let vertical = Board::from_moves("121212")?;
        // XX.....
        // XX..OOO  player two to move
        let horizontal = Board::from_moves("1516272")?;

        for depth in 1..=6 {
            let engine = engine(depth)?;
            let report = engine.analyse(&vertical)?;
            assert_eq!(report.column, 0);
            assert_eq!(report.score, WIN_SCORE + depth as i32 - 1);
            assert_eq!(engine.score_to_win_distance(report.score), Some(1));

            assert_eq!(engine.select_move(&horizontal)?, 3);
        }
        Ok(())
    }

    #[test]
    pub fn blocks_the_opponent() -> Result<()> {
        // X......
        // XO.....
        // XO.....  player two to move
        let vertical = Board::from_moves("12121")?;
        // X......
        // XX..OOO  player one to move
        let horizontal = Board::from_moves("152617")?;

        for depth in 1..=6 {
            let engine = engine(depth)?;
            assert_eq!(engine.select_move(&vertical)?, 0);
            assert_eq!(engine.select_move(&horizontal)?, 3);
        }
        Ok(())
    }

    #[test]
    pub fn delays_a_forced_loss() -> Result<()> {
        // ..OO...
        // ..XXX..  player two to move, both ends of the row are open
        let board = Board::from_moves("33445")?;
        for depth in 2..=5 {
            let engine = engine(depth)?;
            let report = engine.analyse(&board)?;
            assert_eq!(report.score, -WIN_SCORE - (depth as i32 - 2));
            assert_eq!(engine.score_to_win_distance(report.score), Some(2));
        }
        Ok(())
    }

    #[test]
    pub fn pruning_does_not_change_the_result() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(42);
        let depth = 5;
        let engine = engine(depth)?;

        for _ in 0..30 {
            let board = random_position(&mut rng, 30);
            let perspective = board.active_turn();

            let mut expected_column = None;
            let mut expected_score = i32::MIN;
            let mut expected_scores = vec![];
            for &column in move_order().iter() {
                if !board.playable(column) {
                    continue;
                }
                let mut next = board.clone();
                next.play(column);
                let score = full_width(&next, perspective, depth - 1, false);
                expected_scores.push((column, score));
                if score > expected_score {
                    expected_score = score;
                    expected_column = Some(column);
                }
            }

            let report = engine.analyse(&board)?;
            assert_eq!(Some(report.column), expected_column, "position {}", board.moves());
            assert_eq!(report.score, expected_score);
            assert_eq!(report.scores, expected_scores);

            let root = engine.minimax(&board, depth, i32::MIN, i32::MAX, true);
            assert_eq!(root, full_width(&board, perspective, depth, true));
        }
        Ok(())
    }

    #[test]
    pub fn search_leaves_the_board_alone() -> Result<()> {
        let board = Board::from_moves("4433")?;
        let before = board.clone();
        let report = engine(6)?.analyse(&board)?;
        assert_eq!(board, before);
        assert!(report.node_count > report.scores.len());
        Ok(())
    }

    #[test]
    pub fn ties_go_to_the_center() -> Result<()> {
        // a lone tile completes no window, so every first move scores 0
        // at depth 1 and the tie goes to the middle
        let report = engine(1)?.analyse(&Board::new())?;
        assert_eq!(
            report.scores.iter().map(|&(c, _)| c).collect::<Vec<_>>(),
            move_order().to_vec()
        );
        assert_eq!(report.column, 3);

        // mirrored columns score the same, and the left one is searched first
        let board = Board::from_moves("4")?;
        let report = engine(2)?.analyse(&board)?;
        let score_of = |column: usize| report.scores.iter().find(|&&(c, _)| c == column).unwrap().1;
        for column in 0..WIDTH / 2 {
            assert_eq!(score_of(column), score_of(WIDTH - 1 - column));
        }
        let best = report.scores.iter().map(|&(_, s)| s).max().unwrap();
        let first_best = report.scores.iter().find(|&&(_, s)| s == best).unwrap().0;
        assert_eq!(report.column, first_best);
        assert!(report.column <= WIDTH / 2);
        Ok(())
    }

    #[test]
    pub fn default_depth_opening() -> Result<()> {
        let board = Board::from_moves("4")?;
        let engine = SearchEngine::default();
        assert_eq!(engine.depth(), 10);
        let column = engine.select_move(&board)?;
        let mut next = board.clone();
        next.apply_move(column)?;
        assert_eq!(next.cell(column, next.height(column) - 1), Cell::PlayerTwo);
        Ok(())
    }
}
