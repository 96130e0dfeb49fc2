use alloc::{collections::VecDeque, vec::Vec};
use hashbrown::HashSet;
use ndarray::Array2;

use crate::*;

/// Adjacency counts and flood-fill reveal over a fixed grid and mine field.
#[derive(Copy, Clone, Debug)]
pub struct RevealEngine<'a> {
    grid: Grid,
    field: &'a MineField,
}

impl<'a> RevealEngine<'a> {
    pub fn new(grid: Grid, field: &'a MineField) -> Self {
        Self { grid, field }
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.grid
            .iter_neighbors(coords)
            .filter(|&pos| self.field.contains(pos))
            .count() as u8
    }

    /// Reveals `start` and, through zero-count cells, every cell connected to it.
    ///
    /// Returns each newly revealed coordinate exactly once, in reveal order. Flagged cells are opened by the cascade
    /// like hidden ones. `start` must not be a mine; nothing happens if it is, if it is already revealed or if it lies
    /// outside the grid.
    pub fn reveal(&self, board: &mut Array2<CellState>, start: Coord2) -> Vec<Coord2> {
        let mut revealed = Vec::new();

        if !self.grid.contains(start) {
            return revealed;
        }
        if self.field.contains(start) {
            log::warn!("Refusing to flood fill from mine at {:?}", start);
            return revealed;
        }
        if !board[start.to_nd_index()].is_unrevealed() {
            return revealed;
        }

        let mut visited = HashSet::new();
        visited.insert(start);
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let adjacent_mines = self.adjacent_mine_count(coords);
            board[coords.to_nd_index()] = CellState::Revealed(adjacent_mines);
            revealed.push(coords);

            if adjacent_mines != 0 {
                continue;
            }

            for pos in self.grid.iter_neighbors(coords) {
                if board[pos.to_nd_index()].is_unrevealed() && visited.insert(pos) {
                    to_visit.push_back(pos);
                }
            }
        }

        log::trace!("Revealed {} cells from {:?}", revealed.len(), start);
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(side: Coord, mines: &[Coord2]) -> (MineField, Array2<CellState>) {
        let grid = Grid::from_side(side).unwrap();
        let field = MineField::from_coords(grid, mines).unwrap();
        let board = Array2::default(grid.nd_dim());
        (field, board)
    }

    #[test]
    fn center_counts_diagonal_mines() {
        let (field, _) = setup(3, &[(0, 0), (2, 2)]);
        let engine = RevealEngine::new(field.grid(), &field);

        assert_eq!(engine.adjacent_mine_count((1, 1)), 2);
        assert_eq!(engine.adjacent_mine_count((0, 1)), 1);
        assert_eq!(engine.adjacent_mine_count((0, 2)), 0);
    }

    #[test]
    fn mine_free_board_reveals_everything_once() {
        let (field, mut board) = setup(3, &[]);
        let engine = RevealEngine::new(field.grid(), &field);

        let revealed = engine.reveal(&mut board, (0, 0));

        assert_eq!(revealed.len(), 9);
        let unique: HashSet<_> = revealed.iter().copied().collect();
        assert_eq!(unique.len(), 9);
        assert!(board.iter().all(|&cell| cell == CellState::Revealed(0)));
    }

    #[test]
    fn nonzero_cell_does_not_expand() {
        let (field, mut board) = setup(3, &[(0, 0)]);
        let engine = RevealEngine::new(field.grid(), &field);

        let revealed = engine.reveal(&mut board, (1, 1));

        assert_eq!(revealed, [(1, 1)]);
        assert_eq!(board[[1, 1]], CellState::Revealed(1));
        assert_eq!(board[[2, 2]], CellState::Hidden);
    }

    #[test]
    fn cascade_stops_at_numbered_border() {
        let (field, mut board) = setup(3, &[(2, 2)]);
        let engine = RevealEngine::new(field.grid(), &field);

        let revealed = engine.reveal(&mut board, (0, 0));

        assert_eq!(revealed.len(), 8);
        assert_eq!(board[[0, 0]], CellState::Revealed(0));
        assert_eq!(board[[1, 1]], CellState::Revealed(1));
        assert_eq!(board[[2, 1]], CellState::Revealed(1));
        assert_eq!(board[[2, 2]], CellState::Hidden);
    }

    #[test]
    fn cascade_opens_flagged_cells() {
        let (field, mut board) = setup(4, &[(3, 3)]);
        board[[0, 3]] = CellState::Flagged;
        let engine = RevealEngine::new(field.grid(), &field);

        let revealed = engine.reveal(&mut board, (0, 0));

        assert!(revealed.contains(&(0, 3)));
        assert_eq!(board[[0, 3]], CellState::Revealed(0));
    }

    #[test]
    fn already_revealed_start_is_a_no_op() {
        let (field, mut board) = setup(3, &[(0, 0)]);
        board[[1, 1]] = CellState::Revealed(1);
        let engine = RevealEngine::new(field.grid(), &field);

        assert!(engine.reveal(&mut board, (1, 1)).is_empty());
    }

    #[test]
    fn mine_start_is_refused() {
        let (field, mut board) = setup(3, &[(0, 0)]);
        let engine = RevealEngine::new(field.grid(), &field);

        assert!(engine.reveal(&mut board, (0, 0)).is_empty());
        assert_eq!(board[[0, 0]], CellState::Hidden);
    }

    #[test]
    fn start_outside_grid_reveals_nothing() {
        let (field, mut board) = setup(3, &[]);
        let engine = RevealEngine::new(field.grid(), &field);

        assert!(engine.reveal(&mut board, (3, 0)).is_empty());
        assert!(engine.reveal(&mut board, (0, 200)).is_empty());
        assert!(board.iter().all(|&cell| cell == CellState::Hidden));
    }

    #[test]
    fn large_open_board_is_filled_without_recursion() {
        let (field, mut board) = setup(u8::MAX, &[]);
        let engine = RevealEngine::new(field.grid(), &field);

        let revealed = engine.reveal(&mut board, (128, 128));

        assert_eq!(revealed.len(), usize::from(square(u8::MAX)));
    }
}
