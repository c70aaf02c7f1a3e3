use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Unknown difficulty, expected easy, medium or hard")]
pub struct ParseDifficultyError;
