mod bot_controller;
mod evaluator;
mod grid;
mod score_table;
mod searcher;
mod session;
mod settings;
mod streak;
mod types;
mod win_detector;

pub use bot_controller::{BotInput, calculate_engine_move};
pub use evaluator::{DECISIVE_SCORE, Evaluator, MAXIMIZER, Score};
pub use grid::Grid;
pub use score_table::TieredScoreTable;
pub use searcher::{SearchStats, Searcher};
pub use session::{GameSession, MoveOutcome, SessionSnapshot, TurnState};
pub use settings::{
    GameConfig, MAX_BOARD_SIZE, MAX_SEARCH_DEPTH, MAX_SEARCH_LEAVES, MAX_WIN_LENGTH, MIN_BOARD_SIZE,
    MIN_WIN_LENGTH,
};
pub use streak::{Streak, count_beyond, count_streak};
pub use types::{AXES, Direction, GameStatus, Mark, Move, Player, Position, WinningLine};
pub use win_detector::{has_win_through, winning_line_through};
