use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::*;

/// Entries kept per difficulty label.
pub const MAX_SCORES_PER_DIFFICULTY: usize = 10;

/// What a load found in the score file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Best completion times, partitioned by difficulty label.
///
/// Persistence failures never reach the caller: a file that cannot be read
/// leaves the ledger empty and a failed save keeps the in-memory state. Both are
/// logged, and [`ScoreLedger::try_load`]/[`ScoreLedger::try_save`] expose them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreLedger {
    path: Option<PathBuf>,
    partitions: BTreeMap<String, Vec<ScoreEntry>>,
    entries: Vec<ScoreEntry>,
}

impl ScoreLedger {
    /// Ledger without a backing file; saving is a no-op.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Ledger backed by `path`, loaded right away.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        log::debug!("Using score file {}", path.display());
        let mut ledger = Self {
            path: Some(path),
            ..Self::default()
        };
        ledger.load();
        ledger
    }

    /// Ledger backed by [`default_scores_path`].
    pub fn open_default() -> Self {
        Self::open(default_scores_path())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reloads from the backing file, treating any read failure as an empty ledger.
    pub fn load(&mut self) -> LoadSummary {
        match self.try_load() {
            Ok(summary) => summary,
            Err(err) => {
                log::warn!("{err}: {}, starting with no scores", source_of(&err));
                self.replace_entries(Vec::new());
                LoadSummary::default()
            }
        }
    }

    /// Reloads from the backing file. A missing file is an empty ledger, not an error.
    pub fn try_load(&mut self) -> Result<LoadSummary> {
        let Some(path) = &self.path else {
            return Ok(LoadSummary::default());
        };

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No score file at {}, starting fresh", path.display());
                self.replace_entries(Vec::new());
                return Ok(LoadSummary::default());
            }
            Err(source) => {
                return Err(LedgerError::Read {
                    path: path.clone(),
                    source,
                });
            }
        };

        let summary = self.load_from_str(&contents);
        log::info!(
            "Loaded {} scores ({} skipped) from {}",
            summary.loaded,
            summary.skipped,
            self.path().map_or_else(|| "memory".into(), |p| p.display().to_string())
        );
        Ok(summary)
    }

    /// Replaces the ledger with the records in `contents`, skipping malformed lines.
    pub fn load_from_str(&mut self, contents: &str) -> LoadSummary {
        let mut summary = LoadSummary::default();
        let mut parsed = Vec::new();

        for (line_no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<ScoreEntry>() {
                Ok(entry) => {
                    parsed.push(entry);
                    summary.loaded += 1;
                }
                Err(err) => {
                    log::warn!("Skipping score line {}: {err}", line_no + 1);
                    summary.skipped += 1;
                }
            }
        }

        self.replace_entries(parsed);
        summary
    }

    /// Rewrites the whole backing file; failures are logged and reported as `false`.
    pub fn save(&self) -> bool {
        match self.try_save() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("{err}: {}, scores not saved", source_of(&err));
                false
            }
        }
    }

    pub fn try_save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let write_err = |source| LedgerError::Write {
            path: path.clone(),
            source,
        };
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        fs::write(path, self.to_file_string()).map_err(write_err)?;
        log::debug!("Saved {} scores to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// The ledger in score-file format.
    pub fn to_file_string(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }

    /// Whether `elapsed_secs` would make the board for `difficulty`.
    pub fn is_high_score(&self, elapsed_secs: u64, difficulty: &str) -> bool {
        let kept = self.scores_by_difficulty(difficulty);
        if kept.len() < MAX_SCORES_PER_DIFFICULTY {
            return true;
        }
        kept.last()
            .is_none_or(|worst| elapsed_secs < worst.elapsed_secs)
    }

    /// [`ScoreLedger::insert_score`] followed by a best-effort [`ScoreLedger::save`].
    pub fn add_score(&mut self, entry: ScoreEntry) -> Option<usize> {
        let rank = self.insert_score(entry);
        self.save();
        rank
    }

    /// Inserts `entry` and trims its partition without touching the backing file.
    ///
    /// Returns the 1-based rank within the difficulty, or `None` when the entry did
    /// not make the cut. Ties rank after the times already on the board.
    pub fn insert_score(&mut self, entry: ScoreEntry) -> Option<usize> {
        let partition = self.partitions.entry(entry.difficulty.clone()).or_default();
        let position = partition
            .iter()
            .filter(|kept| kept.elapsed_secs <= entry.elapsed_secs)
            .count();

        log::info!(
            "Adding score {}s for {:?} on {}",
            entry.elapsed_secs,
            entry.player_name,
            entry.difficulty
        );
        partition.push(entry);
        sort_and_truncate(partition);
        self.rebuild_entries();

        (position < MAX_SCORES_PER_DIFFICULTY).then_some(position + 1)
    }

    /// All kept entries, grouped by difficulty label and sorted by time within each.
    pub fn scores(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn scores_by_difficulty(&self, difficulty: &str) -> &[ScoreEntry] {
        self.partitions
            .get(difficulty)
            .map_or(&[], Vec::as_slice)
    }

    pub fn difficulties(&self) -> impl Iterator<Item = &str> {
        self.partitions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn replace_entries(&mut self, entries: Vec<ScoreEntry>) {
        self.partitions.clear();
        for entry in entries {
            self.partitions
                .entry(entry.difficulty.clone())
                .or_default()
                .push(entry);
        }
        self.partitions.values_mut().for_each(sort_and_truncate);
        self.rebuild_entries();
    }

    fn rebuild_entries(&mut self) {
        self.entries = self.partitions.values().flatten().cloned().collect();
    }
}

fn sort_and_truncate(partition: &mut Vec<ScoreEntry>) {
    partition.sort_by_key(|entry| entry.elapsed_secs);
    partition.truncate(MAX_SCORES_PER_DIFFICULTY);
}

fn source_of(err: &LedgerError) -> &io::Error {
    match err {
        LedgerError::Read { source, .. } | LedgerError::Write { source, .. } => source,
    }
}
