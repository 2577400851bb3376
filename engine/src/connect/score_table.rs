use super::evaluator::DECISIVE_SCORE;
use crate::error::ConfigError;

/// Heuristic weights indexed by `[streak_length - 1][open_ends]`.
///
/// Covers lengths `1..win_length`; a streak of `win_length` is decisive and
/// never looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieredScoreTable {
    rows: Vec<[u32; 3]>,
}

impl TieredScoreTable {
    /// Default weights: 1/5/50 for one open end on lengths 1/2/3, quadrupling
    /// for longer streaks. Two open ends are worth double, closed streaks zero.
    pub fn reference(win_length: usize) -> Self {
        let mut rows = Vec::with_capacity(win_length.saturating_sub(1));
        let mut one_open = 1u32;
        for length in 1..win_length {
            one_open = match length {
                1 => 1,
                2 => 5,
                3 => 50,
                _ => one_open.saturating_mul(4),
            };
            rows.push([0, one_open, one_open.saturating_mul(2)]);
        }
        Self { rows }
    }

    pub fn from_rows(win_length: usize, rows: Vec<[u32; 3]>) -> Result<Self, ConfigError> {
        let expected = win_length.saturating_sub(1);
        if rows.len() != expected {
            return Err(ConfigError::Invalid(format!(
                "score table needs {} rows (streak lengths 1..{}), got {}",
                expected,
                win_length,
                rows.len()
            )));
        }
        let decisive = i64::from(DECISIVE_SCORE);
        if let Some(weight) = rows.iter().flatten().find(|&&w| i64::from(w) >= decisive) {
            return Err(ConfigError::Invalid(format!(
                "score table weight {} must stay below the decisive score {}",
                weight, DECISIVE_SCORE
            )));
        }
        Ok(Self { rows })
    }

    /// Weight for a streak; zero for lengths the table does not cover.
    pub fn weight(&self, length: usize, open_ends: usize) -> u32 {
        length
            .checked_sub(1)
            .and_then(|row| self.rows.get(row))
            .and_then(|row| row.get(open_ends))
            .copied()
            .unwrap_or(0)
    }

    pub fn max_weight(&self) -> u32 {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn rows(&self) -> &[[u32; 3]] {
        &self.rows
    }
}
