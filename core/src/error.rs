use thiserror::Error;

use crate::CellCount;

/// Broad classification of [`GameError`], used by callers to decide whether a game can be shown at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested board cannot exist, no session must be started from it.
    InvalidConfiguration,
    /// The move was rejected, the session is left untouched.
    InvalidOperation,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell count {0} is not a positive perfect square")]
    NotSquare(CellCount),
    #[error("Too many mines, requested {requested} but at most {max_mines} fit")]
    TooManyMines {
        requested: CellCount,
        max_mines: CellCount,
    },
    #[error("Invalid mine coordinates")]
    InvalidCoords,
    #[error("Coordinates are outside of the board")]
    OutOfBounds,
    #[error("Cell is already revealed")]
    AlreadyRevealed,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    pub const fn kind(self) -> ErrorKind {
        use GameError::*;
        match self {
            NotSquare(_) | TooManyMines { .. } | InvalidCoords => ErrorKind::InvalidConfiguration,
            OutOfBounds | AlreadyRevealed | AlreadyEnded => ErrorKind::InvalidOperation,
        }
    }

    pub const fn is_fatal(self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidConfiguration)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_fatal() {
        assert!(GameError::NotSquare(50).is_fatal());
        assert!(
            GameError::TooManyMines {
                requested: 9,
                max_mines: 8
            }
            .is_fatal()
        );
        assert!(GameError::InvalidCoords.is_fatal());
    }

    #[test]
    fn move_errors_are_not_fatal() {
        assert_eq!(GameError::AlreadyEnded.kind(), ErrorKind::InvalidOperation);
        assert_eq!(GameError::AlreadyRevealed.kind(), ErrorKind::InvalidOperation);
        assert!(!GameError::OutOfBounds.is_fatal());
    }
}
