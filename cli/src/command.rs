use std::str::FromStr;
use sweeper_core::{Coord, Coord2, Difficulty, parse_seed_input};
use thiserror::Error;

/// One player action, as a front end would send it to the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    ToggleFlag(Coord2),
    Chord(Coord2),
    Reset,
    SetDifficulty(Difficulty),
    /// `None` picks a random seed for the next game.
    SetSeed(Option<u64>),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    UnknownVerb(String),
    #[error("{0:?} expects {1} arguments")]
    WrongArity(String, usize),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("unknown difficulty {0:?}")]
    UnknownDifficulty(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parses script moves such as `r 4 4`, `f 0 1`, `c 2 2`, `reset`,
    /// `seed 42`, `difficulty hard` or `difficulty 10 12 20`.
    ///
    /// Arguments may be separated by whitespace or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty());
        let verb = tokens.next().ok_or(ParseCommandError::Empty)?;
        let args: Vec<&str> = tokens.collect();
        let verb_lower = verb.to_ascii_lowercase();

        let expect_arity = |n: usize| {
            if args.len() == n {
                Ok(())
            } else {
                Err(ParseCommandError::WrongArity(verb.to_owned(), n))
            }
        };

        match verb_lower.as_str() {
            "r" | "reveal" => {
                expect_arity(2)?;
                Ok(Self::Reveal(parse_coords(&args)?))
            }
            "f" | "flag" => {
                expect_arity(2)?;
                Ok(Self::ToggleFlag(parse_coords(&args)?))
            }
            "c" | "chord" => {
                expect_arity(2)?;
                Ok(Self::Chord(parse_coords(&args)?))
            }
            "reset" | "new" => {
                expect_arity(0)?;
                Ok(Self::Reset)
            }
            "seed" => match args.as_slice() {
                [] => Ok(Self::SetSeed(None)),
                [seed] => Ok(Self::SetSeed(parse_seed_input(seed))),
                _ => Err(ParseCommandError::WrongArity(verb.to_owned(), 1)),
            },
            "d" | "difficulty" => match args.as_slice() {
                [name] => name
                    .parse()
                    .map(Self::SetDifficulty)
                    .map_err(|_| ParseCommandError::UnknownDifficulty((*name).to_owned())),
                [height, width, mines] => Ok(Self::SetDifficulty(Difficulty::custom(
                    parse_number(height)?,
                    parse_number(width)?,
                    parse_number(mines)?,
                ))),
                _ => Err(ParseCommandError::WrongArity(verb.to_owned(), 1)),
            },
            _ => Err(ParseCommandError::UnknownVerb(verb.to_owned())),
        }
    }
}

fn parse_coords(args: &[&str]) -> Result<Coord2, ParseCommandError> {
    Ok((parse_number::<Coord>(args[0])?, parse_number::<Coord>(args[1])?))
}

fn parse_number<T: FromStr>(token: &str) -> Result<T, ParseCommandError> {
    token
        .parse()
        .map_err(|_| ParseCommandError::InvalidNumber(token.to_owned()))
}
