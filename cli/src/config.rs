//! Optional TOML configuration.
//!
//! ```toml
//! difficulty = "custom"
//! seed = 42
//!
//! [custom]
//! height = 12
//! width = 20
//! mines = 40
//!
//! [scores]
//! path = "/tmp/scores.txt"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use sweeper_core::Difficulty;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config")]
    Parse(#[from] toml::de::Error),
    #[error("unknown difficulty {0:?}, expected easy, medium, hard or custom")]
    UnknownDifficulty(String),
    #[error("difficulty \"custom\" needs a [custom] table")]
    MissingCustomBoard,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Preset name, or `custom` to use the `[custom]` table.
    pub difficulty: Option<String>,
    pub seed: Option<u64>,
    pub custom: Option<CustomBoard>,
    pub scores: ScoresConfig,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomBoard {
    pub height: usize,
    pub width: usize,
    pub mines: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoresConfig {
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// The configured board, if any. A `[custom]` table on its own selects a
    /// custom board.
    pub fn difficulty(&self) -> Result<Option<Difficulty>> {
        let custom = self
            .custom
            .map(|board| Difficulty::custom(board.height, board.width, board.mines));

        match self.difficulty.as_deref() {
            None => Ok(custom),
            Some(name) if name.eq_ignore_ascii_case("custom") => {
                custom.map(Some).ok_or(ConfigError::MissingCustomBoard)
            }
            Some(name) => name
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::UnknownDifficulty(name.to_owned())),
        }
    }
}
