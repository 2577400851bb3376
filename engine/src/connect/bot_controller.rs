use std::time::Instant;

use super::evaluator::Evaluator;
use super::grid::Grid;
use super::searcher::Searcher;
use super::types::Position;
use crate::log;

pub struct BotInput<'a> {
    pub grid: &'a Grid,
    pub evaluator: &'a Evaluator,
    pub depth: u32,
    pub pruning: bool,
}

/// Picks the engine's cell. The search runs on a private copy of the grid;
/// if it yields nothing while cells are free, the first empty cell is used.
pub fn calculate_engine_move(input: &BotInput) -> Option<Position> {
    if input.grid.is_full() {
        return None;
    }

    let mut working = input.grid.clone();
    let searcher = Searcher::new(input.evaluator, input.pruning);

    let started = Instant::now();
    let (best, stats) = searcher.search_with_stats(&mut working, input.depth, true);
    let elapsed = started.elapsed();

    match best.position {
        Some(pos) => {
            log!(
                "Engine chose {} with score {} after {} nodes in {} ms (depth {}, pruning {})",
                pos,
                best.score,
                stats.nodes,
                elapsed.as_millis(),
                input.depth,
                input.pruning
            );
            Some(pos)
        }
        None => {
            let fallback = input.grid.first_empty();
            log!("Search returned no move, falling back to {:?}", fallback);
            fallback
        }
    }
}
