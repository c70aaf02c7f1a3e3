use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("failed to read scores from {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write scores to {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseScoreError {
    #[error("expected name|seconds|difficulty")]
    MissingField,
    #[error("invalid seconds: {0}")]
    InvalidSeconds(#[from] ParseIntError),
}
