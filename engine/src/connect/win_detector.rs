use super::grid::Grid;
use super::streak::count_beyond;
use super::types::{AXES, Mark, Position, WinningLine};

/// True when a run of at least `win_length` `mark` cells passes through `pos`.
///
/// Only the lines through `pos` are inspected, so callers pass the cell that
/// was just played instead of rescanning the board.
pub fn has_win_through(grid: &Grid, pos: Position, mark: Mark, win_length: usize) -> bool {
    winning_line_through(grid, pos, mark, win_length).is_some()
}

/// Same check as `has_win_through`, reporting the full run on the first
/// winning axis.
pub fn winning_line_through(
    grid: &Grid,
    pos: Position,
    mark: Mark,
    win_length: usize,
) -> Option<WinningLine> {
    let player = mark.player()?;
    if grid.get(pos) != Some(mark) {
        return None;
    }

    for dir in AXES {
        let forward = count_beyond(grid, pos, dir, mark);
        let backward = count_beyond(grid, pos, dir.reversed(), mark);

        if forward + backward + 1 >= win_length {
            let start = pos.offset(dir.reversed(), backward)?;
            let end = pos.offset(dir, forward)?;
            return Some(WinningLine::new(player, start, end));
        }
    }

    None
}
