use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Smallest side accepted for custom boards.
pub const MIN_CUSTOM_SIDE: Coord = 5;

/// Largest side accepted for custom boards.
pub const MAX_CUSTOM_SIDE: Coord = 50;

/// Cells kept free around the first click: the cell itself and its 8 neighbours.
pub const SAFE_ZONE_CELLS: CellCount = 9;

/// Board presets plus the player-supplied custom triple.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Custom(BoardConfig),
}

impl Difficulty {
    pub const EASY: BoardConfig = BoardConfig::new_unchecked((9, 9), 10);
    pub const MEDIUM: BoardConfig = BoardConfig::new_unchecked((16, 16), 40);
    pub const HARD: BoardConfig = BoardConfig::new_unchecked((16, 30), 99);

    /// Custom board, clamped into the accepted ranges rather than rejected.
    pub fn custom(height: usize, width: usize, mines: usize) -> Self {
        Self::Custom(BoardConfig::custom(height, width, mines))
    }

    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Easy => Self::EASY,
            Self::Medium => Self::MEDIUM,
            Self::Hard => Self::HARD,
            Self::Custom(config) => config,
        }
    }

    /// Label used to partition the score ledger.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Custom(_) => "Custom",
        }
    }

    /// Custom boards are never ranked.
    pub const fn records_scores(self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(config) => write!(
                f,
                "Custom {}x{} ({} mines)",
                config.height(),
                config.width(),
                config.mines
            ),
            preset => f.write_str(preset.label()),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Parses a preset name; custom boards go through [`Difficulty::custom`].
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "beginner" => Ok(Self::Easy),
            "medium" | "intermediate" => Ok(Self::Medium),
            "hard" | "expert" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError),
        }
    }
}
