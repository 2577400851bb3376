use serde::{Deserialize, Serialize};

use super::evaluator::{DECISIVE_SCORE, Evaluator};
use super::score_table::TieredScoreTable;
use crate::config::Validate;
use crate::error::ConfigError;

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 19;
pub const MIN_WIN_LENGTH: usize = 2;
pub const MAX_WIN_LENGTH: usize = 8;
pub const MAX_SEARCH_DEPTH: u32 = 8;
/// Upper limit on leaf positions a full-width search may visit.
pub const MAX_SEARCH_LEAVES: u64 = 1_000_000_000;

/// Fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: usize,
    pub win_length: usize,
    pub single_player: bool,
    pub search_depth: u32,
    #[serde(default)]
    pub pruning: bool,
    /// Rows for streak lengths `1..win_length`, columns for 0/1/2 open ends.
    /// `None` selects `TieredScoreTable::reference`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_table: Option<Vec<[u32; 3]>>,
}

impl GameConfig {
    /// 7x7 board, four in a row.
    pub fn connect_four() -> Self {
        Self {
            board_size: 7,
            win_length: 4,
            single_player: true,
            search_depth: 4,
            pruning: false,
            score_table: None,
        }
    }

    /// 5x5 board, three in a row.
    pub fn connect_three() -> Self {
        Self {
            board_size: 5,
            win_length: 3,
            single_player: true,
            search_depth: 4,
            pruning: false,
            score_table: None,
        }
    }

    pub fn with_single_player(mut self, single_player: bool) -> Self {
        self.single_player = single_player;
        self
    }

    pub fn with_search_depth(mut self, search_depth: u32) -> Self {
        self.search_depth = search_depth;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_score_table(mut self, rows: Vec<[u32; 3]>) -> Self {
        self.score_table = Some(rows);
        self
    }

    pub fn resolve_score_table(&self) -> Result<TieredScoreTable, ConfigError> {
        match &self.score_table {
            Some(rows) => TieredScoreTable::from_rows(self.win_length, rows.clone()),
            None => Ok(TieredScoreTable::reference(self.win_length)),
        }
    }

    /// Leaves of a full-width search from an empty board:
    /// `cells * (cells - 1) * ... * (cells - depth + 1)`, saturating.
    pub fn worst_case_leaves(&self) -> u64 {
        let cells = (self.board_size as u64).saturating_mul(self.board_size as u64);
        (0..u64::from(self.search_depth))
            .map(|k| cells.saturating_sub(k).max(1))
            .fold(1u64, u64::saturating_mul)
    }

    pub fn evaluator(&self) -> Result<Evaluator, ConfigError> {
        Ok(Evaluator::new(self.win_length, self.resolve_score_table()?))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::connect_four()
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Invalid(format!(
                "board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            )));
        }
        if self.win_length < MIN_WIN_LENGTH || self.win_length > MAX_WIN_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "win length must be between {} and {}, got {}",
                MIN_WIN_LENGTH, MAX_WIN_LENGTH, self.win_length
            )));
        }
        if self.win_length > self.board_size {
            return Err(ConfigError::Invalid(format!(
                "win length ({}) cannot exceed board size ({})",
                self.win_length, self.board_size
            )));
        }
        if self.search_depth == 0 || self.search_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "search depth must be between 1 and {}, got {}",
                MAX_SEARCH_DEPTH, self.search_depth
            )));
        }
        let leaves = self.worst_case_leaves();
        if leaves > MAX_SEARCH_LEAVES {
            return Err(ConfigError::Invalid(format!(
                "search depth {} on a {}x{} board visits up to {} positions, limit is {}",
                self.search_depth, self.board_size, self.board_size, leaves, MAX_SEARCH_LEAVES
            )));
        }

        let table = self.resolve_score_table()?;
        let bound = Evaluator::heuristic_bound(self.board_size, &table);
        if bound >= DECISIVE_SCORE as u64 {
            return Err(ConfigError::Invalid(format!(
                "score table can reach {} on a {}x{} board, which overlaps decisive scores",
                bound, self.board_size, self.board_size
            )));
        }
        Ok(())
    }
}
