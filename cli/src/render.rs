use minato_core::{CellState, GameSession, Phase, Snapshot};
use std::io::{self, Write};

fn cell_char(state: CellState, triggered: bool) -> char {
    match state.adjacent_mines() {
        Some(0) => '.',
        Some(count) => char::from(b'0' + count),
        None => match state {
            CellState::Flagged => 'F',
            CellState::ExposedMine if triggered => 'X',
            CellState::ExposedMine => '*',
            _ => '#',
        },
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Pending => "ready",
        Phase::InProgress => "playing",
        Phase::Won => "you won :)",
        Phase::Lost => "game over x_x",
    }
}

pub fn write_board(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    let side = session.grid().side();

    write!(out, "{:3}", "")?;
    for col in 0..side {
        write!(out, "{col:>2}")?;
    }
    writeln!(out)?;

    for row in 0..side {
        write!(out, "{row:>3}")?;
        for col in 0..side {
            let coords = (row, col);
            let triggered = session.triggered_mine() == Some(coords);
            write!(out, "{:>2}", cell_char(session.cell_at(coords), triggered))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_status(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    writeln!(
        out,
        "{} | score {}/{} | high score {} | mines left {}",
        phase_label(session.phase()),
        session.score(),
        session.max_score(),
        session.high_score(),
        session.mines_left()
    )
}

pub fn write_json(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &Snapshot::from_session(session))?;
    writeln!(out)
}
