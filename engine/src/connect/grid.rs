use std::fmt;

use super::types::{Direction, Mark, Position};
use crate::error::GameError;

/// Square board of cell marks, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Mark>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    /// Builds a square grid from rows of `.`, `X` (player 1) and `O` (player 2).
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut grid = Self::new(size);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), size, "row {} is not {} wide", row, size);
            for (col, symbol) in line.chars().enumerate() {
                let mark = match symbol {
                    'X' => Mark::Player1,
                    'O' => Mark::Player2,
                    _ => Mark::Empty,
                };
                grid.set(Position::new(row, col), mark);
            }
        }
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(self.index(pos)).copied()
    }

    /// Writes `mark` into an empty, in-bounds cell.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), GameError> {
        match self.get(pos) {
            None => Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            }),
            Some(Mark::Empty) => {
                self.set(pos, mark);
                Ok(())
            }
            Some(_) => Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            }),
        }
    }

    /// Unchecked write used by search to place and undo tentative moves.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        let index = self.index(pos);
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, pos: Position) {
        self.set(pos, Mark::Empty);
    }

    /// Neighbouring cell along `dir`, if it is on the board.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        pos.offset(dir, 1).filter(|next| self.contains(*next))
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Mark)> + '_ {
        self.positions()
            .zip(self.cells.iter().copied())
            .filter(|(_, mark)| !mark.is_empty())
    }

    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions()
            .zip(self.cells.iter().copied())
            .filter(|(_, mark)| mark.is_empty())
            .map(|(pos, _)| pos)
    }

    pub fn first_empty(&self) -> Option<Position> {
        self.empty_positions().next()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| !mark.is_empty())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> + '_ {
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|mark| mark.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
