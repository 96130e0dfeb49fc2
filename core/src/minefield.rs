use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Set of mine positions on a [`Grid`].
///
/// Membership is answered from a dense mask, the coordinates are also kept in placement order so that the mine set
/// reported at the end of a game is stable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineField {
    grid: Grid,
    mine_mask: Array2<bool>,
    mine_coords: Vec<Coord2>,
}

impl MineField {
    /// Places `mine_count` mines uniformly at random, never on `excluded`.
    ///
    /// Coordinates are sampled until enough distinct ones are collected, which only terminates while some cell is left
    /// free, hence the strict bound on `mine_count`.
    pub fn generate<R: Rng + ?Sized>(
        grid: Grid,
        mine_count: CellCount,
        excluded: Option<Coord2>,
        rng: &mut R,
    ) -> Result<Self> {
        if let Some(coords) = excluded {
            grid.validate(coords).map_err(|_| GameError::InvalidCoords)?;
        }

        let placeable = grid.placeable_cells(excluded.is_some());
        if mine_count >= placeable {
            return Err(GameError::TooManyMines {
                requested: mine_count,
                max_mines: placeable.saturating_sub(1),
            });
        }

        if mine_count.saturating_mul(3) > grid.cell_count() {
            log::warn!(
                "Dense minefield, {} mines on {} cells",
                mine_count,
                grid.cell_count()
            );
        }

        let side = grid.side();
        let mut field = Self::empty(grid);
        while field.count() < mine_count {
            let coords = (rng.random_range(0..side), rng.random_range(0..side));
            if Some(coords) == excluded {
                continue;
            }
            field.insert(coords);
        }

        log::trace!("Placed {} mines, excluded {:?}", mine_count, excluded);
        Ok(field)
    }

    /// Builds a field from known mine positions, duplicates are ignored.
    pub fn from_coords(grid: Grid, mine_coords: &[Coord2]) -> Result<Self> {
        let mut field = Self::empty(grid);
        for &coords in mine_coords {
            if !grid.contains(coords) {
                return Err(GameError::InvalidCoords);
            }
            field.insert(coords);
        }

        if field.count() >= grid.cell_count() {
            return Err(GameError::TooManyMines {
                requested: field.count(),
                max_mines: grid.cell_count() - 1,
            });
        }

        Ok(field)
    }

    fn empty(grid: Grid) -> Self {
        Self {
            grid,
            mine_mask: Array2::default(grid.nd_dim()),
            mine_coords: Vec::new(),
        }
    }

    fn insert(&mut self, coords: Coord2) {
        let cell = &mut self.mine_mask[coords.to_nd_index()];
        if !*cell {
            *cell = true;
            self.mine_coords.push(coords);
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn count(&self) -> CellCount {
        self.mine_coords.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.grid.cell_count() - self.count()
    }

    /// Mine positions in placement order.
    pub fn coords(&self) -> &[Coord2] {
        &self.mine_coords
    }
}
