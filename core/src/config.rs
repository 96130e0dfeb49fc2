use core::{convert::Infallible, fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine count used by every difficulty preset.
pub const DEFAULT_MINES: CellCount = 16;

/// Board size presets offered to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Maps a difficulty name to a preset, anything unknown is medium.
    pub fn from_name(name: &str) -> Self {
        match name {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    // XXX: harder presets shrink the board while keeping the mine count, which is what raises the density
    pub const fn cell_count(self) -> CellCount {
        match self {
            Self::Easy => 100,
            Self::Medium => 81,
            Self::Hard => 49,
        }
    }

    pub const fn config(self, lazy_mines: bool) -> GameConfig {
        GameConfig::new(self.cell_count(), DEFAULT_MINES, lazy_mines)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl FromStr for Difficulty {
    type Err = Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub cell_count: CellCount,
    pub mines: CellCount,
    /// Defer mine placement until the first reveal, keeping that cell clear.
    pub lazy_mines: bool,
}

impl GameConfig {
    pub const fn new(cell_count: CellCount, mines: CellCount, lazy_mines: bool) -> Self {
        Self {
            cell_count,
            mines,
            lazy_mines,
        }
    }

    /// Checks that the board is square and that mine placement can terminate.
    pub fn validate(&self) -> Result<Grid> {
        let grid = Grid::from_cell_count(self.cell_count)?;
        let placeable = grid.placeable_cells(self.lazy_mines);
        if self.mines >= placeable {
            return Err(GameError::TooManyMines {
                requested: self.mines,
                max_mines: placeable.saturating_sub(1),
            });
        }
        Ok(grid)
    }

    /// Score at which the game is won, every safe cell revealed.
    pub const fn max_score(&self) -> CellCount {
        self.cell_count.saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().config(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn names_map_to_cell_counts() {
        assert_eq!(Difficulty::from_name("easy").cell_count(), 100);
        assert_eq!(Difficulty::from_name("medium").cell_count(), 81);
        assert_eq!(Difficulty::from_name("hard").cell_count(), 49);
    }

    #[test]
    fn unknown_names_fall_back_to_medium() {
        assert_eq!(Difficulty::from_name(""), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("EASY"), Difficulty::Medium);
        assert_eq!("nightmare".parse(), Ok(Difficulty::Medium));
    }

    #[test]
    fn display_round_trips_through_from_name() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(&difficulty.to_string()), difficulty);
        }
    }

    #[test]
    fn every_preset_is_valid() {
        for difficulty in Difficulty::ALL {
            for lazy_mines in [false, true] {
                let config = difficulty.config(lazy_mines);
                let grid = config.validate().unwrap();
                assert_eq!(grid.cell_count(), difficulty.cell_count());
                assert_eq!(config.mines, DEFAULT_MINES);
            }
        }
    }

    #[test]
    fn validate_rejects_non_square_board() {
        let config = GameConfig::new(50, 4, false);

        assert_eq!(config.validate(), Err(GameError::NotSquare(50)));
    }

    #[test]
    fn lazy_mode_needs_a_spare_cell() {
        assert!(GameConfig::new(9, 8, false).validate().is_ok());
        assert_eq!(
            GameConfig::new(9, 8, true).validate(),
            Err(GameError::TooManyMines {
                requested: 8,
                max_mines: 7
            })
        );
        assert!(GameConfig::new(9, 9, false).validate().is_err());
    }

    #[test]
    fn max_score_counts_safe_cells() {
        assert_eq!(Difficulty::Hard.config(false).max_score(), 33);
    }
}
