pub mod config;
pub mod connect;
pub mod error;
pub mod logger;

pub use connect::{
    GameConfig, GameSession, GameStatus, Mark, Move, MoveOutcome, Player, Position,
    SessionSnapshot, TurnState, WinningLine,
};
pub use error::{ConfigError, GameError, SearchRejection};
