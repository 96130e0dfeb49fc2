use crate::command::{Command, HELP};
use crate::render;
use minato_core::{CellCount, Difficulty, GameConfig, GameSession, Result};
use std::fmt;
use std::io::{self, Write};

/// Output format used after every move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Board,
    Json,
}

/// Terminal front end around a [`GameSession`]: applies commands and redraws.
#[derive(Debug)]
pub struct Game {
    session: GameSession,
    difficulty: Difficulty,
    mines: Option<CellCount>,
    lazy_mines: bool,
    seed: Option<u64>,
    output: Output,
}

impl Game {
    pub fn new(
        difficulty: Difficulty,
        mines: Option<CellCount>,
        lazy_mines: bool,
        seed: Option<u64>,
        output: Output,
    ) -> Result<Self> {
        let mut seed = seed;
        let config = Self::config_for(difficulty, mines, lazy_mines);
        let session = GameSession::new(config, next_seed(&mut seed))?;
        log::debug!("New {} game with seed {}", difficulty, session.seed());
        Ok(Self {
            session,
            difficulty,
            mines,
            lazy_mines,
            seed,
            output,
        })
    }

    fn config_for(difficulty: Difficulty, mines: Option<CellCount>, lazy_mines: bool) -> GameConfig {
        let mut config = difficulty.config(lazy_mines);
        if let Some(mines) = mines {
            config.mines = mines;
        }
        config
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        match self.output {
            Output::Board => {
                render::write_board(out, &self.session)?;
                render::write_status(out, &self.session)
            }
            Output::Json => render::write_json(out, &self.session),
        }
    }

    /// Applies a command and redraws when the board changed. Returns `false` once the player quits.
    pub fn apply(&mut self, command: Command, out: &mut impl Write) -> io::Result<bool> {
        let redraw = match command {
            Command::Reveal(coords) => {
                let result = self.session.reveal(coords).map(|report| {
                    log::debug!(
                        "{:?} at {:?}, {} cells changed",
                        report.outcome,
                        coords,
                        report.changed.len()
                    );
                    report.outcome.has_update()
                });
                Self::absorb(result).unwrap_or(false)
            }
            Command::Flag(coords) => {
                let result = self.session.toggle_flag(coords).map(|cell| {
                    log::debug!("{:?} is now {:?}", coords, cell);
                });
                Self::absorb(result).is_some()
            }
            Command::New(difficulty) => match self.restart(difficulty) {
                Ok(()) => true,
                Err(err) => {
                    let difficulty = difficulty.unwrap_or(self.difficulty);
                    self.notice(out, format_args!("Cannot start a {difficulty} game: {err}"))?;
                    false
                }
            },
            Command::Help => {
                self.notice(out, format_args!("{HELP}"))?;
                false
            }
            Command::Quit => return Ok(false),
        };
        if redraw {
            self.draw(out)?;
        }
        Ok(true)
    }

    /// Text meant for the player. In JSON mode it goes to stderr so stdout stays a stream of snapshots.
    pub fn notice(&self, out: &mut impl Write, text: fmt::Arguments<'_>) -> io::Result<()> {
        match self.output {
            Output::Board => writeln!(out, "{text}"),
            Output::Json => writeln!(io::stderr(), "{text}"),
        }
    }

    fn restart(&mut self, difficulty: Option<Difficulty>) -> Result<()> {
        let difficulty = difficulty.unwrap_or(self.difficulty);
        let config = Self::config_for(difficulty, self.mines, self.lazy_mines);
        self.session.start(config, next_seed(&mut self.seed))?;
        self.difficulty = difficulty;
        log::debug!("New {} game with seed {}", difficulty, self.session.seed());
        Ok(())
    }

    /// Rejected moves leave the board as it was, the player just sees nothing happen.
    fn absorb<T>(result: Result<T>) -> Option<T> {
        result
            .inspect_err(|err| {
                debug_assert!(!err.is_fatal());
                log::info!("Move ignored: {err}");
            })
            .ok()
    }
}

/// A forced seed is only used for the first game, later games draw a fresh one.
fn next_seed(seed: &mut Option<u64>) -> u64 {
    seed.take().unwrap_or_else(rand::random)
}
