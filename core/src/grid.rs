use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Neighbor offsets `(row, col)` in row-major order, center excluded.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it stays on a board of the given side.
fn apply_delta((row, col): Coord2, (d_row, d_col): (i8, i8), side: Coord) -> Option<Coord2> {
    let row = row.checked_add_signed(d_row)?;
    let col = col.checked_add_signed(d_col)?;
    (row < side && col < side).then_some((row, col))
}

/// Square board geometry: which cells exist and who their neighbors are.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    side: Coord,
}

impl Grid {
    /// Whether `cell_count` can be laid out as a square board.
    pub fn valid_cell_count(cell_count: CellCount) -> bool {
        Self::side_for(cell_count).is_ok()
    }

    /// Integer square root of `cell_count`, rejecting zero and non-squares.
    pub fn side_for(cell_count: CellCount) -> Result<Coord> {
        let side = cell_count.isqrt();
        if cell_count == 0 || side * side != cell_count {
            return Err(GameError::NotSquare(cell_count));
        }
        side.try_into()
            .map_err(|_| GameError::NotSquare(cell_count))
    }

    pub fn from_cell_count(cell_count: CellCount) -> Result<Self> {
        let side = Self::side_for(cell_count)?;
        Ok(Self { side })
    }

    pub fn from_side(side: Coord) -> Result<Self> {
        if side == 0 {
            return Err(GameError::NotSquare(0));
        }
        Ok(Self { side })
    }

    pub const fn side(&self) -> Coord {
        self.side
    }

    pub const fn cell_count(&self) -> CellCount {
        square(self.side)
    }

    /// Cells that may hold a mine, one less when a first-move cell is kept clear.
    pub const fn placeable_cells(&self, with_exclusion: bool) -> CellCount {
        if with_exclusion {
            self.cell_count() - 1
        } else {
            self.cell_count()
        }
    }

    pub(crate) fn nd_dim(&self) -> (usize, usize) {
        (self.side.into(), self.side.into())
    }

    pub const fn contains(&self, (row, col): Coord2) -> bool {
        row < self.side && col < self.side
    }

    pub fn validate(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// All cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = Coord2> + use<> {
        let side = self.side;
        (0..side).flat_map(move |row| (0..side).map(move |col| (row, col)))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.side)
    }

    /// The up to 8 cells touching `coords`, always in the same order.
    pub fn neighbors(&self, coords: Coord2) -> SmallVec<[Coord2; 8]> {
        self.iter_neighbors(coords).collect()
    }
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    side: Coord,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, side: Coord) -> Self {
        Self {
            center,
            side,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(coords) = apply_delta(self.center, delta, self.side) {
                return Some(coords);
            }
        }
        None
    }
}
