use connect_engine::{GameStatus, Player, SessionSnapshot};

pub fn render_board(snapshot: &SessionSnapshot) -> String {
    let size = snapshot.grid.size();
    let mut out = String::from("   ");
    for col in 1..=size {
        out.push_str(&format!("{:>3}", col));
    }
    out.push('\n');

    for (row, cells) in snapshot.grid.rows().enumerate() {
        out.push_str(&format!("{:>3}", row + 1));
        for mark in cells {
            out.push_str(&format!("{:>3}", mark.symbol()));
        }
        out.push('\n');
    }
    out
}

fn player_name(snapshot: &SessionSnapshot, player: Player) -> String {
    if snapshot.single_player && player == Player::Two {
        "Engine (O)".to_string()
    } else {
        format!("{} ({})", player, player.mark().symbol())
    }
}

pub fn render_status(snapshot: &SessionSnapshot) -> String {
    match (snapshot.status, snapshot.next_turn) {
        (GameStatus::Draw, _) => "Draw: the board is full".to_string(),
        (status, _) if status.is_terminal() => match status.winner() {
            Some(winner) => format!("{} wins", player_name(snapshot, winner)),
            None => "Game over".to_string(),
        },
        (_, Some(player)) => format!("{} to move", player_name(snapshot, player)),
        (_, None) => "Game over".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_engine::{GameConfig, GameSession};

    #[test]
    fn test_render_board_with_headers() {
        let config = GameConfig {
            board_size: 3,
            win_length: 3,
            ..GameConfig::connect_three()
        };
        let mut session = GameSession::new(config).unwrap();
        let snapshot = session.take_turn(1, 1).unwrap();
        let expected = "     1  2  3\n  1  .  .  .\n  2  .  X  .\n  3  .  .  .\n";
        assert_eq!(render_board(&snapshot), expected);
    }

    #[test]
    fn test_status_names_the_engine() {
        let mut session = GameSession::new(GameConfig::connect_three()).unwrap();
        let snapshot = session.take_turn(0, 0).unwrap();
        assert_eq!(render_status(&snapshot), "Engine (O) to move");
    }

    #[test]
    fn test_status_for_two_player_win() {
        let mut session = GameSession::new(GameConfig::connect_three().with_single_player(false)).unwrap();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            session.take_turn(row, col).unwrap();
        }
        assert_eq!(render_status(&session.snapshot()), "Player 1 (X) to move");
        let snapshot = session.take_turn(0, 2).unwrap();
        assert_eq!(render_status(&snapshot), "Player 1 (X) wins");
    }
}
