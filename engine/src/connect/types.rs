use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Player::One => Mark::Player1,
            Player::Two => Mark::Player2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Mark {
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Player1 => Some(Player::One),
            Mark::Player2 => Some(Player::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Player1 => 'X',
            Mark::Player2 => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves `steps` cells along `dir`. Returns `None` on underflow; the board
    /// bounds are checked by `Grid`.
    pub fn offset(self, dir: Direction, steps: usize) -> Option<Position> {
        let steps = isize::try_from(steps).ok()?;
        let row = self.row.checked_add_signed(dir.d_row.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(dir.d_col.checked_mul(steps)?)?;
        Some(Position::new(row, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    pub const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }

    pub const fn reversed(self) -> Self {
        Self::new(-self.d_row, -self.d_col)
    }
}

/// One direction per undirected axis: horizontal, vertical, main diagonal,
/// anti-diagonal. Walking the reverse covers the other half of each axis.
pub const AXES: [Direction; 4] = [
    Direction::new(0, 1),
    Direction::new(1, 0),
    Direction::new(1, 1),
    Direction::new(-1, 1),
];

/// A search result. `position` is `None` when there was nothing to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub position: Option<Position>,
    pub score: i32,
}

impl Move {
    pub fn at(position: Position, score: i32) -> Self {
        Self {
            position: Some(position),
            score,
        }
    }

    pub fn none(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Player1Won,
    Player2Won,
    Draw,
}

impl GameStatus {
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::One => GameStatus::Player1Won,
            Player::Two => GameStatus::Player2Won,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Player1Won => Some(Player::One),
            GameStatus::Player2Won => Some(Player::Two),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// End cells of a completed run, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(player: Player, start: Position, end: Position) -> Self {
        Self { player, start, end }
    }

    /// Number of cells covered by the line.
    pub fn cell_count(&self) -> usize {
        self.start.row.abs_diff(self.end.row).max(self.start.col.abs_diff(self.end.col)) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_non_negative() {
        let origin = Position::new(0, 3);
        assert_eq!(origin.offset(Direction::new(0, 1), 2), Some(Position::new(0, 5)));
        assert_eq!(origin.offset(Direction::new(-1, 1), 1), None);
        assert_eq!(origin.offset(Direction::new(1, -1), 3), Some(Position::new(3, 0)));
        assert_eq!(origin.offset(Direction::new(1, -1), 4), None);
    }

    #[test]
    fn test_axes_do_not_contain_opposites() {
        for (i, a) in AXES.iter().enumerate() {
            for b in &AXES[i + 1..] {
                assert_ne!(a.reversed(), *b);
            }
        }
    }

    #[test]
    fn test_players_alternate() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().mark(), Mark::Player1);
        assert_eq!(Mark::Player2.player(), Some(Player::Two));
        assert_eq!(Mark::Empty.player(), None);
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::won_by(Player::Two).winner(), Some(Player::Two));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(GameStatus::Draw.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_winning_line_length() {
        let line = WinningLine::new(Player::One, Position::new(3, 6), Position::new(6, 3));
        assert_eq!(line.cell_count(), 4);
    }
}
