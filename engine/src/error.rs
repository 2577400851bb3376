use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("game is already over")]
    GameOver,
    #[error("engine move unavailable: {0}")]
    InvalidSearchState(SearchRejection),
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

/// Why the engine refused to pick a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchRejection {
    #[error("session is in two-player mode")]
    TwoPlayerSession,
    #[error("it is not the engine's turn")]
    NotEngineTurn,
    #[error("game is already over")]
    GameOver,
    #[error("board has no empty cells")]
    BoardFull,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("failed to access config file: {0}")]
    Io(String),
    #[error("failed to parse config: {0}")]
    Format(String),
}
