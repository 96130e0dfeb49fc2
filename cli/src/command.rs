use minato_core::{Coord, Coord2, Difficulty};
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r <row> <col>   reveal a cell
  f <row> <col>   flag or unflag a cell
  n [difficulty]  new game (easy, medium, hard)
  ?               show this help
  q               quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    New(Option<Difficulty>),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command, type ? for help")]
    Empty,
    #[error("Unknown command `{0}`, type ? for help")]
    Unknown(String),
    #[error("Usage: {0} <row> <col>")]
    Usage(&'static str),
    #[error("Invalid coordinate `{0}`")]
    InvalidCoord(String),
}

fn parse_coords<'a>(
    name: &'static str,
    mut args: impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseError> {
    let (Some(row), Some(col), None) = (args.next(), args.next(), args.next()) else {
        return Err(ParseError::Usage(name));
    };
    let parse = |s: &str| {
        s.parse::<Coord>()
            .map_err(|_| ParseError::InvalidCoord(s.to_string()))
    };
    Ok((parse(row)?, parse(col)?))
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ParseError::Empty);
        };

        match name {
            "r" | "reveal" => parse_coords("r", words).map(Command::Reveal),
            "f" | "flag" => parse_coords("f", words).map(Command::Flag),
            "n" | "new" => Ok(Command::New(words.next().map(Difficulty::from_name))),
            "?" | "h" | "help" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!("r 3 4".parse(), Ok(Command::Reveal((3, 4))));
        assert_eq!("  flag 0 9 ".parse(), Ok(Command::Flag((0, 9))));
    }

    #[test]
    fn parses_new_game_with_optional_difficulty() {
        assert_eq!("n".parse(), Ok(Command::New(None)));
        assert_eq!("new hard".parse(), Ok(Command::New(Some(Difficulty::Hard))));
        assert_eq!(
            "n whatever".parse(),
            Ok(Command::New(Some(Difficulty::Medium)))
        );
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!("r 1".parse::<Command>(), Err(ParseError::Usage("r")));
        assert_eq!("f 1 2 3".parse::<Command>(), Err(ParseError::Usage("f")));
        assert_eq!(
            "r 1 -2".parse::<Command>(),
            Err(ParseError::InvalidCoord("-2".to_string()))
        );
        assert_eq!(
            "boom".parse::<Command>(),
            Err(ParseError::Unknown("boom".to_string()))
        );
    }
}
