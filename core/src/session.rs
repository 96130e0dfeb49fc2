use alloc::vec::Vec;
use ndarray::Array2;
use rand::{SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Pending -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Mines are placed on the first reveal
    Pending,
    InProgress,
    Won,
    Lost,
}

impl Phase {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Pending
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// What a single reveal did, with every cell whose state changed so the view can redraw only those.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealReport {
    pub outcome: RevealOutcome,
    pub changed: Vec<Coord2>,
}

impl RevealReport {
    fn no_change() -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            changed: Vec::new(),
        }
    }
}

/// One game of minesweeper, plus the best score seen since the session object was created.
///
/// Restarting through [`GameSession::start`] replaces the board and keeps `high_score`, nothing else survives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    grid: Grid,
    mine_field: Option<MineField>,
    board: Array2<CellState>,
    mine_count: CellCount,
    score: CellCount,
    max_score: CellCount,
    high_score: CellCount,
    phase: Phase,
    triggered_mine: Option<Coord2>,
    seed: u64,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::build(config, seed, 0)
    }

    /// Session over a known minefield, already in progress.
    pub fn with_mine_field(mine_field: MineField) -> Self {
        let grid = mine_field.grid();
        let mine_count = mine_field.count();
        Self {
            grid,
            board: Array2::default(grid.nd_dim()),
            mine_count,
            score: 0,
            max_score: mine_field.safe_cell_count(),
            high_score: 0,
            phase: Phase::InProgress,
            triggered_mine: None,
            seed: 0,
            mine_field: Some(mine_field),
        }
    }

    /// Starts a new game in place, keeping the high score.
    ///
    /// On error the current game is left as it was.
    pub fn start(&mut self, config: GameConfig, seed: u64) -> Result<()> {
        *self = Self::build(config, seed, self.high_score)?;
        Ok(())
    }

    fn build(config: GameConfig, seed: u64, high_score: CellCount) -> Result<Self> {
        let grid = config.validate()?;

        let (mine_field, phase) = if config.lazy_mines {
            (None, Phase::Pending)
        } else {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mine_field = MineField::generate(grid, config.mines, None, &mut rng)?;
            (Some(mine_field), Phase::InProgress)
        };

        log::debug!(
            "New game: {} cells, {} mines, phase {:?}, seed {}",
            config.cell_count,
            config.mines,
            phase,
            seed
        );

        Ok(Self {
            grid,
            mine_field,
            board: Array2::default(grid.nd_dim()),
            mine_count: config.mines,
            score: 0,
            max_score: config.max_score(),
            high_score,
            phase,
            triggered_mine: None,
            seed,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Seed the mines were or will be placed from, the same seed gives the same board.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn score(&self) -> CellCount {
        self.score
    }

    pub fn max_score(&self) -> CellCount {
        self.max_score
    }

    pub fn high_score(&self) -> CellCount {
        self.high_score
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// `None` until the mines are placed.
    pub fn mine_field(&self) -> Option<&MineField> {
        self.mine_field.as_ref()
    }

    /// Every mine position, only available once the game is over.
    pub fn mines(&self) -> Option<&[Coord2]> {
        if self.is_finished() {
            self.mine_field.as_ref().map(MineField::coords)
        } else {
            None
        }
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// # Panics
    ///
    /// If `coords` is outside of [`GameSession::grid`], check with [`Grid::contains`] first.
    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.board[coords.to_nd_index()]
    }

    pub fn flag_count(&self) -> CellCount {
        self.board
            .iter()
            .filter(|&&cell| cell == CellState::Flagged)
            .count() as CellCount
    }

    pub fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.flag_count() as isize)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<CellState> {
        let coords = self.grid.validate(coords)?;
        self.check_not_finished()?;

        let cell = &mut self.board[coords.to_nd_index()];
        *cell = match *cell {
            CellState::Hidden => CellState::Flagged,
            CellState::Flagged => CellState::Hidden,
            CellState::Revealed(_) | CellState::ExposedMine => {
                return Err(GameError::AlreadyRevealed);
            }
        };
        Ok(*cell)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        let coords = self.grid.validate(coords)?;
        self.check_not_finished()?;

        let mine_field = match self.mine_field.take() {
            Some(mine_field) => mine_field,
            None => self.place_mines(coords)?,
        };
        let report = self.reveal_in(&mine_field, coords);
        self.mine_field = Some(mine_field);

        Ok(report)
    }

    fn place_mines(&mut self, first_move: Coord2) -> Result<MineField> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mine_field = MineField::generate(self.grid, self.mine_count, Some(first_move), &mut rng)?;
        self.phase = Phase::InProgress;
        log::debug!("Mines placed around first move {:?}", first_move);
        Ok(mine_field)
    }

    fn reveal_in(&mut self, mine_field: &MineField, coords: Coord2) -> RevealReport {
        if mine_field.contains(coords) {
            for &mine in mine_field.coords() {
                self.board[mine.to_nd_index()] = CellState::ExposedMine;
            }
            self.triggered_mine = Some(coords);
            self.end_game(Phase::Lost);
            return RevealReport {
                outcome: RevealOutcome::HitMine,
                changed: mine_field.coords().to_vec(),
            };
        }

        if self.board[coords.to_nd_index()].is_revealed() {
            return RevealReport::no_change();
        }

        let changed = RevealEngine::new(self.grid, mine_field).reveal(&mut self.board, coords);
        self.score = self.score.saturating_add(changed.len() as CellCount);

        let outcome = if self.score >= self.max_score {
            self.end_game(Phase::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        };
        RevealReport { outcome, changed }
    }

    fn end_game(&mut self, phase: Phase) {
        self.phase = phase;
        self.high_score = self.high_score.max(self.score);
        log::debug!(
            "Game over: {:?}, score {}, high score {}",
            phase,
            self.score,
            self.high_score
        );
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.phase.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
