use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub coords: Coord2,
    pub state: CellState,
}

/// Everything a view needs to draw a session, detached from it.
///
/// `mines` is only filled once the game is over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub score: CellCount,
    pub high_score: CellCount,
    pub max_score: CellCount,
    pub side: Coord,
    pub mine_count: CellCount,
    pub mines_left: isize,
    pub cells: Vec<CellView>,
    pub triggered_mine: Option<Coord2>,
    pub mines: Option<Vec<Coord2>>,
}

impl Snapshot {
    pub fn from_session(session: &GameSession) -> Self {
        let grid = session.grid();
        Self {
            phase: session.phase(),
            score: session.score(),
            high_score: session.high_score(),
            max_score: session.max_score(),
            side: grid.side(),
            mine_count: session.mine_count(),
            mines_left: session.mines_left(),
            cells: Self::cells_of(session, grid.iter_cells()),
            triggered_mine: session.triggered_mine(),
            mines: session.mines().map(<[Coord2]>::to_vec),
        }
    }

    /// Views of just the given cells, typically [`RevealReport::changed`].
    pub fn cells_of(
        session: &GameSession,
        coords: impl IntoIterator<Item = Coord2>,
    ) -> Vec<CellView> {
        coords
            .into_iter()
            .map(|coords| CellView {
                coords,
                state: session.cell_at(coords),
            })
            .collect()
    }

    pub fn cell_at(&self, (row, col): Coord2) -> Option<CellState> {
        if row >= self.side || col >= self.side {
            return None;
        }
        let index = usize::from(row) * usize::from(self.side) + usize::from(col);
        self.cells.get(index).map(|cell| cell.state)
    }
}
