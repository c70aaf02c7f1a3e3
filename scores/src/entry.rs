use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseScoreError;

/// Longest player name kept in the ledger, in characters.
pub const MAX_NAME_LEN: usize = 20;

/// Field separator of the score file.
pub const FIELD_SEPARATOR: char = '|';

/// One completed game on the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player_name: String,
    pub elapsed_secs: u64,
    pub difficulty: String,
}

impl ScoreEntry {
    /// Builds an entry that is safe to write to the score file.
    ///
    /// The file format has no escaping, so separators and control characters in
    /// the name become `_`, and the name is cut to [`MAX_NAME_LEN`] characters.
    /// Control characters are stripped from the difficulty label the same way.
    pub fn new(player_name: &str, elapsed_secs: u64, difficulty: &str) -> Self {
        let sanitized: String = player_name
            .chars()
            .map(|c| {
                if c == FIELD_SEPARATOR || c.is_control() {
                    '_'
                } else {
                    c
                }
            })
            .take(MAX_NAME_LEN)
            .collect();
        if sanitized.as_str() != player_name {
            log::warn!(
                "Player name {:?} stored as {:?} to fit the score file",
                player_name,
                sanitized
            );
        }
        let difficulty = difficulty
            .chars()
            .map(|c| if c.is_control() { '_' } else { c })
            .collect();

        Self {
            player_name: sanitized,
            elapsed_secs,
            difficulty,
        }
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.player_name,
            self.elapsed_secs,
            self.difficulty,
            sep = FIELD_SEPARATOR
        )
    }
}

impl FromStr for ScoreEntry {
    type Err = ParseScoreError;

    /// Parses one `name|seconds|difficulty` record; the label is everything after
    /// the second separator. Names longer than [`MAX_NAME_LEN`] are cut short.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut fields = line.splitn(3, FIELD_SEPARATOR);
        let (Some(player_name), Some(secs), Some(difficulty)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(ParseScoreError::MissingField);
        };

        Ok(Self {
            player_name: player_name.chars().take(MAX_NAME_LEN).collect(),
            elapsed_secs: secs.trim().parse()?,
            difficulty: difficulty.to_owned(),
        })
    }
}
