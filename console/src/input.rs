use thiserror::Error;

/// Coordinates are typed 1-based and converted to the engine's 0-based cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { row: usize, col: usize },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("enter a row and a column, e.g. `4 4`, or `q` to quit")]
    Empty,
    #[error("could not read `{0}` as a cell, expected `row col`")]
    Malformed(String),
    #[error("rows and columns start at 1")]
    ZeroCoordinate,
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(InputError::Malformed(line.to_string()));
    };
    let row: usize = row.parse().map_err(|_| InputError::Malformed(line.to_string()))?;
    let col: usize = col.parse().map_err(|_| InputError::Malformed(line.to_string()))?;

    if row == 0 || col == 0 {
        return Err(InputError::ZeroCoordinate);
    }

    Ok(Command::Place {
        row: row - 1,
        col: col - 1,
    })
}
