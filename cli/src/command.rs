use std::str::FromStr;

use thiserror::Error;
use tripwire_core::{CellCount, Coord2};

/// A line typed by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Claim(Coord2),
    /// Start over, optionally with a different mine count
    New(Option<CellCount>),
    Board,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),
    #[error("expected `<row> <col>`")]
    MissingColumn,
    #[error("unexpected `{0}` after the command")]
    TrailingInput(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let first = words.next().ok_or(ParseCommandError::Empty)?;

        let command = match first.to_ascii_lowercase().as_str() {
            "new" | "n" | "reset" => Command::New(words.next().map(parse_number).transpose()?),
            "board" | "b" => Command::Board,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ if first.starts_with(|c: char| c.is_ascii_digit()) => {
                // accept both `1 2` and `1,2`
                let mut parts = first.split(',').filter(|part| !part.is_empty());
                let row = parse_number(parts.next().unwrap_or(first))?;
                let col = parts
                    .next()
                    .or_else(|| words.next())
                    .ok_or(ParseCommandError::MissingColumn)?;
                if let Some(extra) = parts.next() {
                    return Err(ParseCommandError::TrailingInput(extra.to_string()));
                }
                Command::Claim((row, parse_number(col)?))
            }
            _ => return Err(ParseCommandError::Unknown(first.to_string())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_number<T: FromStr>(word: &str) -> Result<T, ParseCommandError> {
    word.parse()
        .map_err(|_| ParseCommandError::InvalidNumber(word.to_string()))
}

pub const HELP: &str = "\
Commands:
  <row> <col>   claim a cell, e.g. `0 2`
  new [mines]   start a new round, optionally with another mine count
  board         show the board again
  help          show this help
  quit          leave the game";
