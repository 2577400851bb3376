use super::evaluator::{DECISIVE_SCORE, Evaluator, MAXIMIZER, Score};
use super::grid::Grid;
use super::types::{Move, Player, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Full-width minimax over every empty cell, with optional alpha-beta.
///
/// Tentative moves are written into the grid passed in and undone before the
/// next sibling is tried, so the grid is unchanged once `search` returns.
pub struct Searcher<'a> {
    evaluator: &'a Evaluator,
    pruning: bool,
}

impl<'a> Searcher<'a> {
    pub fn new(evaluator: &'a Evaluator, pruning: bool) -> Self {
        Self { evaluator, pruning }
    }

    pub fn search(&self, grid: &mut Grid, depth: u32, maximizing: bool) -> Move {
        self.search_with_stats(grid, depth, maximizing).0
    }

    /// Returns the best first move for the side to play. Ties keep the move
    /// found first in row-major order. A terminal root yields `Move::none`
    /// carrying the position's value.
    pub fn search_with_stats(
        &self,
        grid: &mut Grid,
        depth: u32,
        maximizing: bool,
    ) -> (Move, SearchStats) {
        let mut stats = SearchStats { nodes: 1 };

        let score = self.evaluator.evaluate(grid);
        if score.is_decisive() || depth == 0 || grid.is_full() {
            return (Move::none(terminal_value(score, depth)), stats);
        }

        let mark = side_to_move(maximizing).mark();
        let mut best = Move::none(if maximizing { i32::MIN } else { i32::MAX });
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;

        for pos in candidates(grid) {
            grid.set(pos, mark);
            let value = self.minimax(grid, depth - 1, !maximizing, alpha, beta, &mut stats);
            grid.clear(pos);

            let improves = if maximizing {
                value > best.score
            } else {
                value < best.score
            };
            if improves {
                best = Move::at(pos, value);
            }

            if self.pruning {
                if maximizing {
                    alpha = alpha.max(value);
                } else {
                    beta = beta.min(value);
                }
            }
        }

        (best, stats)
    }

    fn minimax(
        &self,
        grid: &mut Grid,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        let score = self.evaluator.evaluate(grid);
        if score.is_decisive() || depth == 0 || grid.is_full() {
            return terminal_value(score, depth);
        }

        let mark = side_to_move(maximizing).mark();
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in candidates(grid) {
            grid.set(pos, mark);
            let value = self.minimax(grid, depth - 1, !maximizing, alpha, beta, stats);
            grid.clear(pos);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if self.pruning && alpha >= beta {
                break;
            }
        }

        best
    }
}

fn side_to_move(maximizing: bool) -> Player {
    if maximizing {
        MAXIMIZER
    } else {
        MAXIMIZER.opponent()
    }
}

/// Empty cells in row-major order, collected before the grid is mutated.
fn candidates(grid: &Grid) -> Vec<Position> {
    grid.empty_positions().collect()
}

/// Decided positions gain the remaining depth, so quicker wins and slower
/// losses rank higher.
fn terminal_value(score: Score, remaining_depth: u32) -> i32 {
    let bonus = remaining_depth as i32;
    match score {
        Score::Decisive(player) if player == MAXIMIZER => DECISIVE_SCORE + bonus,
        Score::Decisive(_) => -(DECISIVE_SCORE + bonus),
        Score::Heuristic(value) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::score_table::TieredScoreTable;
    use crate::connect::types::Mark;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn evaluator(win_length: usize) -> Evaluator {
        Evaluator::new(win_length, TieredScoreTable::reference(win_length))
    }

    fn random_open_position(rng: &mut StdRng, size: usize, stones: usize, evaluator: &Evaluator) -> Grid {
        loop {
            let mut grid = Grid::new(size);
            let mut player = Player::One;
            for _ in 0..stones {
                let empties: Vec<Position> = grid.empty_positions().collect();
                let pos = empties[rng.random_range(0..empties.len())];
                grid.set(pos, player.mark());
                player = player.opponent();
            }
            if !evaluator.evaluate(&grid).is_decisive() {
                return grid;
            }
        }
    }

    #[test]
    fn test_completes_diagonal_for_immediate_win() {
        let evaluator = evaluator(3);
        for depth in [2, 3] {
            for pruning in [false, true] {
                let mut grid = Grid::new(5);
                grid.set(Position::new(0, 0), Mark::Player2);
                grid.set(Position::new(1, 1), Mark::Player2);

                let best = Searcher::new(&evaluator, pruning).search(&mut grid, depth, true);
                assert_eq!(best.position, Some(Position::new(2, 2)), "depth {} pruning {}", depth, pruning);
                assert_eq!(best.score, DECISIVE_SCORE + depth as i32 - 1);
            }
        }
    }

    #[test]
    fn test_blocks_opponent_threat() {
        #[rustfmt::skip]
        let mut grid = Grid::from_rows(&[
            "....O",
            ".....",
            "XX...",
            ".....",
            ".....",
        ]);
        let evaluator = evaluator(3);
        let best = Searcher::new(&evaluator, false).search(&mut grid, 2, true);
        assert_eq!(best.position, Some(Position::new(2, 2)));
    }

    #[test]
    fn test_prefers_centre_on_empty_board() {
        let evaluator = evaluator(3);
        let mut grid = Grid::new(3);
        let best = Searcher::new(&evaluator, false).search(&mut grid, 1, true);
        assert_eq!(best, Move::at(Position::new(1, 1), 8));
    }

    #[test]
    fn test_ties_keep_first_move_in_row_major_order() {
        let evaluator = evaluator(3);
        let mut grid = Grid::new(4);
        let best = Searcher::new(&evaluator, false).search(&mut grid, 1, true);
        assert_eq!(best, Move::at(Position::new(1, 1), 8));
    }

    #[test]
    fn test_minimizing_side_plays_for_player_one() {
        #[rustfmt::skip]
        let mut grid = Grid::from_rows(&[
            "X....",
            ".X...",
            ".....",
            "...O.",
            "..O..",
        ]);
        let evaluator = evaluator(3);
        let best = Searcher::new(&evaluator, false).search(&mut grid, 1, false);
        assert_eq!(best.position, Some(Position::new(2, 2)));
        assert_eq!(best.score, -DECISIVE_SCORE);
    }

    #[test]
    fn test_full_board_returns_no_move() {
        #[rustfmt::skip]
        let mut grid = Grid::from_rows(&[
            "XOX",
            "XOO",
            "OXX",
        ]);
        let evaluator = evaluator(3);
        let expected = evaluator.evaluate(&grid).value();
        let best = Searcher::new(&evaluator, false).search(&mut grid, 4, true);
        assert_eq!(best, Move::none(expected));
    }

    #[test]
    fn test_decided_root_returns_no_move() {
        #[rustfmt::skip]
        let mut grid = Grid::from_rows(&[
            "XXX",
            "OO.",
            "...",
        ]);
        let evaluator = evaluator(3);
        let best = Searcher::new(&evaluator, false).search(&mut grid, 2, true);
        assert_eq!(best, Move::none(-(DECISIVE_SCORE + 2)));
    }

    #[test]
    fn test_search_restores_grid() {
        let evaluator = evaluator(3);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..30 {
            let stones = rng.random_range(0..6);
            let mut grid = random_open_position(&mut rng, 4, stones, &evaluator);
            let before = grid.clone();
            for pruning in [false, true] {
                Searcher::new(&evaluator, pruning).search(&mut grid, 3, rng.random_bool(0.5));
                assert_eq!(grid, before);
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        #[rustfmt::skip]
        let grid = Grid::from_rows(&[
            ".....",
            ".XO..",
            "..X..",
            ".O...",
            ".....",
        ]);
        let evaluator = evaluator(3);
        let searcher = Searcher::new(&evaluator, false);
        let first = searcher.search(&mut grid.clone(), 3, true);
        for _ in 0..3 {
            assert_eq!(searcher.search(&mut grid.clone(), 3, true), first);
        }
    }

    #[test]
    fn test_pruning_returns_the_same_move() {
        let evaluator = evaluator(3);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..40 {
            let stones = rng.random_range(0..7);
            let grid = random_open_position(&mut rng, 4, stones, &evaluator);
            let maximizing = rng.random_bool(0.5);

            let (plain, plain_stats) = Searcher::new(&evaluator, false)
                .search_with_stats(&mut grid.clone(), 3, maximizing);
            let (pruned, pruned_stats) = Searcher::new(&evaluator, true)
                .search_with_stats(&mut grid.clone(), 3, maximizing);

            assert_eq!(plain, pruned, "board:\n{}", grid);
            assert!(pruned_stats.nodes <= plain_stats.nodes);
        }
    }
}
