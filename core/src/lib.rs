//! Minefield engine: square grids, mine placement, flood-fill reveal and the game session state machine.
//!
//! Rendering is left to the caller, which drives a [`GameSession`] with moves and redraws from [`RevealReport`] or
//! [`Snapshot`].

#![no_std]

extern crate alloc;

pub use config::*;
pub use error::*;
pub use grid::*;
pub use minefield::*;
pub use reveal::*;
pub use session::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod config;
mod error;
mod grid;
mod minefield;
mod reveal;
mod session;
mod snapshot;
mod tile;
mod types;
