use super::grid::Grid;
use super::score_table::TieredScoreTable;
use super::streak::Streak;
use super::types::{AXES, Player};

/// Magnitude of a decided position. Config validation keeps every heuristic
/// sum strictly below it.
pub const DECISIVE_SCORE: i32 = 100_000_000;

/// The engine's side. Its streaks add to the heuristic, the opponent's subtract.
pub const MAXIMIZER: Player = Player::Two;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Decisive(Player),
    Heuristic(i32),
}

impl Score {
    pub fn is_decisive(self) -> bool {
        matches!(self, Score::Decisive(_))
    }

    /// Signed value from the maximizer's point of view.
    pub fn value(self) -> i32 {
        match self {
            Score::Decisive(player) if player == MAXIMIZER => DECISIVE_SCORE,
            Score::Decisive(_) => -DECISIVE_SCORE,
            Score::Heuristic(value) => value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Evaluator {
    win_length: usize,
    table: TieredScoreTable,
}

impl Evaluator {
    pub fn new(win_length: usize, table: TieredScoreTable) -> Self {
        Self { win_length, table }
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Largest absolute heuristic a `size`x`size` board could accumulate with
    /// `table`: at most one streak starts per cell and axis.
    pub fn heuristic_bound(size: usize, table: &TieredScoreTable) -> u64 {
        (size as u64) * (size as u64) * (AXES.len() as u64) * u64::from(table.max_weight())
    }

    /// Heuristic sums are clamped strictly inside the decisive range.
    pub fn evaluate(&self, grid: &Grid) -> Score {
        let mut total = 0i64;

        for (pos, mark) in grid.occupied() {
            let Some(player) = mark.player() else {
                continue;
            };

            for dir in AXES {
                let Some(streak) = Streak::starting_at(grid, pos, dir) else {
                    continue;
                };

                if streak.length >= self.win_length {
                    return Score::Decisive(player);
                }

                let weight = i64::from(self.table.weight(streak.length, streak.open_ends(grid)));
                if player == MAXIMIZER {
                    total = total.saturating_add(weight);
                } else {
                    total = total.saturating_sub(weight);
                }
            }
        }

        let limit = i64::from(DECISIVE_SCORE) - 1;
        Score::Heuristic(i32::try_from(total.clamp(-limit, limit)).unwrap_or_default())
    }
}
