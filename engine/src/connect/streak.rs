use super::grid::Grid;
use super::types::{Direction, Mark, Position};

/// Counts consecutive `mark` cells from `start` (inclusive) along `dir`.
pub fn count_streak(grid: &Grid, start: Position, dir: Direction, mark: Mark) -> usize {
    let mut count = 0;
    let mut cursor = Some(start);
    while let Some(pos) = cursor {
        if grid.get(pos) != Some(mark) {
            break;
        }
        count += 1;
        cursor = grid.step(pos, dir);
    }
    count
}

/// Like `count_streak`, but starts at the neighbour of `origin`, so `origin`
/// itself is not counted.
pub fn count_beyond(grid: &Grid, origin: Position, dir: Direction, mark: Mark) -> usize {
    grid.step(origin, dir)
        .map_or(0, |next| count_streak(grid, next, dir, mark))
}

/// A maximal run of one mark along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    pub mark: Mark,
    pub start: Position,
    pub dir: Direction,
    pub length: usize,
}

impl Streak {
    /// Returns the streak that begins at `start`, or `None` when the cell is
    /// empty or the run actually begins earlier along `dir`.
    pub fn starting_at(grid: &Grid, start: Position, dir: Direction) -> Option<Streak> {
        let mark = grid.get(start).filter(|mark| !mark.is_empty())?;
        let continues_backwards = grid
            .step(start, dir.reversed())
            .is_some_and(|prev| grid.get(prev) == Some(mark));
        if continues_backwards {
            return None;
        }
        Some(Streak {
            mark,
            start,
            dir,
            length: count_streak(grid, start, dir, mark),
        })
    }

    pub fn end(&self) -> Position {
        self.start
            .offset(self.dir, self.length.saturating_sub(1))
            .unwrap_or(self.start)
    }

    /// In-bounds empty cells directly before the start and after the end (0..=2).
    pub fn open_ends(&self, grid: &Grid) -> usize {
        let before = grid.step(self.start, self.dir.reversed());
        let after = grid.step(self.end(), self.dir);
        [before, after]
            .into_iter()
            .flatten()
            .filter(|pos| grid.get(*pos) == Some(Mark::Empty))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::types::AXES;

    const RIGHT: Direction = Direction::new(0, 1);
    const DOWN: Direction = Direction::new(1, 0);

    #[test]
    fn test_count_streak_includes_start() {
        #[rustfmt::skip]
        let grid = Grid::from_rows(&[
            "XXX.X",
            ".....",
            ".....",
            ".....",
            ".....",
        ]);
        assert_eq!(count_streak(&grid, Position::new(0, 0), RIGHT, Mark::Player1), 3);
        assert_eq!(count_streak(&grid, Position::new(0, 1), RIGHT, Mark::Player1), 2);
        assert_eq!(count_streak(&grid, Position::new(0, 3), RIGHT, Mark::Player1), 0);
        assert_eq!(count_streak(&grid, Position::new(0, 4), RIGHT, Mark::Player1), 1);
    }

    #[test]
    fn test_count_beyond_excludes_origin() {
        #[rustfmt::skip]
        let grid = Grid::from_rows(&[
            "O....",
            "O....",
            "O....",
            "X....",
            ".....",
        ]);
        assert_eq!(count_beyond(&grid, Position::new(0, 0), DOWN, Mark::Player2), 2);
        assert_eq!(count_beyond(&grid, Position::new(0, 0), DOWN.reversed(), Mark::Player2), 0);
        assert_eq!(count_beyond(&grid, Position::new(4, 0), DOWN, Mark::Player1), 0);
    }

    #[test]
    fn test_streak_start_detection() {
        #[rustfmt::skip]
        let grid = Grid::from_rows(&[
            ".....",
            ".OO..",
            ".....",
            ".....",
            ".....",
        ]);
        let streak = Streak::starting_at(&grid, Position::new(1, 1), RIGHT).unwrap();
        assert_eq!(streak.length, 2);
        assert_eq!(streak.end(), Position::new(1, 2));
        assert_eq!(streak.open_ends(&grid), 2);
        assert!(Streak::starting_at(&grid, Position::new(1, 2), RIGHT).is_none());
        assert!(Streak::starting_at(&grid, Position::new(0, 0), RIGHT).is_none());
    }

    #[test]
    fn test_open_ends_count_blocked_and_edge_sides() {
        #[rustfmt::skip]
        let grid = Grid::from_rows(&[
            "XXO..",
            ".X...",
            ".....",
            ".....",
            ".....",
        ]);
        let row = Streak::starting_at(&grid, Position::new(0, 0), RIGHT).unwrap();
        assert_eq!(row.length, 2);
        assert_eq!(row.open_ends(&grid), 0);

        let column = Streak::starting_at(&grid, Position::new(0, 1), DOWN).unwrap();
        assert_eq!(column.length, 2);
        assert_eq!(column.open_ends(&grid), 1);
    }

    #[test]
    fn test_anti_diagonal_streak() {
        #[rustfmt::skip]
        let grid = Grid::from_rows(&[
            "...",
            ".O.",
            "O..",
        ]);
        let anti = AXES[3];
        let streak = Streak::starting_at(&grid, Position::new(2, 0), anti).unwrap();
        assert_eq!(streak.length, 2);
        assert_eq!(streak.end(), Position::new(1, 1));
        assert_eq!(streak.open_ends(&grid), 1);
    }
}
