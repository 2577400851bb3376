use std::io::{self, BufRead, Write};

use connect_engine::{GameSession, SessionSnapshot, log};

use crate::input::{Command, parse_command};
use crate::render::{render_board, render_status};

/// Plays one game on `input`/`output` until it ends, the player quits or the
/// input runs dry. Returns the last snapshot.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    output: &mut W,
) -> io::Result<SessionSnapshot> {
    let mut snapshot = session.snapshot();

    loop {
        write!(output, "\n{}", render_board(&snapshot))?;
        writeln!(output, "{}", render_status(&snapshot))?;

        if snapshot.status.is_terminal() {
            return Ok(snapshot);
        }

        if session.is_engine_turn() {
            snapshot = session.play_engine_turn().map_err(io::Error::other)?;
            if let Some(pos) = snapshot.last_move {
                writeln!(output, "Engine plays {} {}", pos.row + 1, pos.col + 1)?;
            }
            continue;
        }

        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            log!("Input closed, leaving the game");
            return Ok(snapshot);
        }

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(snapshot),
            Ok(Command::Place { row, col }) => match session.take_turn(row, col) {
                Ok(next) => snapshot = next,
                Err(err) => writeln!(output, "Move rejected: {}", err)?,
            },
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
}
