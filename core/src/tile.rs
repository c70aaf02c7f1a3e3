use serde::{Deserialize, Serialize};

/// Canonical player-visible state stored by the board engine.
///
/// A single cell state carries both the revealed and the flagged bit, so a
/// cell can never be revealed and flagged at the same time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineCell {
    #[default]
    Hidden,
    Flagged,
    /// Revealed safe cell with its adjacent mine count.
    Revealed(u8),
    /// Mine uncovered when the game was lost.
    Mine,
}

impl EngineCell {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::Mine)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}
