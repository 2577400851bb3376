use super::bot_controller::{BotInput, calculate_engine_move};
use super::evaluator::{Evaluator, MAXIMIZER};
use super::grid::Grid;
use super::settings::GameConfig;
use super::types::{GameStatus, Player, Position, WinningLine};
use super::win_detector::winning_line_through;
use crate::config::Validate;
use crate::error::{GameError, SearchRejection};
use crate::log;

/// Whose turn it is and what was played last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub current: Player,
    pub last_move: Option<Position>,
    pub game_over: bool,
}

impl TurnState {
    fn new() -> Self {
        Self {
            current: Player::One,
            last_move: None,
            game_over: false,
        }
    }
}

/// Everything a frontend needs to redraw after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub grid: Grid,
    /// `None` once the game is over.
    pub next_turn: Option<Player>,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    pub winning_line: Option<WinningLine>,
    pub single_player: bool,
}

impl SessionSnapshot {
    /// True when the computer opponent won a single-player game.
    pub fn engine_won(&self) -> bool {
        self.single_player && self.status.winner() == Some(GameSession::ENGINE_PLAYER)
    }
}

pub type MoveOutcome = Result<SessionSnapshot, GameError>;

/// One game from the first move to a win or draw.
///
/// Player 1 always opens. In single-player mode player 2 is the engine.
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    turn: TurnState,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    evaluator: Evaluator,
}

impl GameSession {
    pub const ENGINE_PLAYER: Player = MAXIMIZER;

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let evaluator = config.evaluator()?;

        log!(
            "New {}x{} session, {} in a row, {}, search depth {}",
            config.board_size,
            config.board_size,
            config.win_length,
            if config.single_player { "single player" } else { "two players" },
            config.search_depth
        );

        Ok(Self {
            grid: Grid::new(config.board_size),
            turn: TurnState::new(),
            status: GameStatus::InProgress,
            winning_line: None,
            evaluator,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_engine_turn(&self) -> bool {
        self.config.single_player
            && !self.status.is_terminal()
            && self.turn.current == Self::ENGINE_PLAYER
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.grid.clone(),
            next_turn: (!self.status.is_terminal()).then_some(self.turn.current),
            status: self.status,
            last_move: self.turn.last_move,
            winning_line: self.winning_line,
            single_player: self.config.single_player,
        }
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// A rejected move leaves the session untouched. A winning move ends the
    /// game without passing the turn.
    pub fn take_turn(&mut self, row: usize, col: usize) -> MoveOutcome {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let pos = Position::new(row, col);
        let player = self.turn.current;
        self.grid.place(pos, player.mark())?;
        self.turn.last_move = Some(pos);

        log!("{} played {}", player, pos);

        if let Some(line) = winning_line_through(&self.grid, pos, player.mark(), self.config.win_length) {
            self.finish(GameStatus::won_by(player));
            self.winning_line = Some(line);
            log!("{} wins with a line from {} to {}", player, line.start, line.end);
        } else if self.grid.is_full() {
            self.finish(GameStatus::Draw);
            log!("Board is full, game drawn");
        } else {
            self.turn.current = player.opponent();
        }

        Ok(self.snapshot())
    }

    /// Computes the engine's reply without applying it.
    pub fn request_engine_move(&self) -> Result<Position, GameError> {
        if !self.config.single_player {
            return Err(GameError::InvalidSearchState(SearchRejection::TwoPlayerSession));
        }
        if self.status.is_terminal() {
            return Err(GameError::InvalidSearchState(SearchRejection::GameOver));
        }
        if self.turn.current != Self::ENGINE_PLAYER {
            return Err(GameError::InvalidSearchState(SearchRejection::NotEngineTurn));
        }

        let input = BotInput {
            grid: &self.grid,
            evaluator: &self.evaluator,
            depth: self.config.search_depth,
            pruning: self.config.pruning,
        };
        calculate_engine_move(&input)
            .ok_or(GameError::InvalidSearchState(SearchRejection::BoardFull))
    }

    /// Computes the engine's reply and plays it through `take_turn`.
    pub fn play_engine_turn(&mut self) -> MoveOutcome {
        let pos = self.request_engine_move()?;
        self.take_turn(pos.row, pos.col)
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.turn.game_over = true;
    }
}
