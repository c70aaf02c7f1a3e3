use sweeper_core::{Board, Difficulty, MarkOutcome, RevealOutcome};
use sweeper_scores::{ScoreEntry, ScoreLedger};

use crate::Command;

/// What a [`Command`] did to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Revealed(RevealOutcome),
    Marked(MarkOutcome),
    Reset,
    DifficultyChanged(Difficulty),
    SeedChanged(Option<u64>),
}

impl Event {
    /// Whether the board changed; setup commands always count.
    pub const fn has_update(self) -> bool {
        match self {
            Self::Revealed(outcome) => outcome.has_update(),
            Self::Marked(outcome) => outcome.has_update(),
            Self::Reset | Self::DifficultyChanged(_) | Self::SeedChanged(_) => true,
        }
    }

    /// Whether this move ended the game.
    pub const fn is_game_over(self) -> bool {
        matches!(
            self,
            Self::Revealed(RevealOutcome::HitMine | RevealOutcome::Won)
        )
    }
}

/// One board and the ledger its wins are recorded in.
#[derive(Debug)]
pub struct Session {
    board: Board,
    ledger: ScoreLedger,
}

impl Session {
    pub fn new(board: Board, ledger: ScoreLedger) -> Self {
        Self { board, ledger }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn apply(&mut self, command: Command) -> Event {
        log::trace!("Applying {:?}", command);
        match command {
            Command::Reveal(coords) => Event::Revealed(self.board.reveal(coords)),
            Command::ToggleFlag(coords) => Event::Marked(self.board.toggle_flag(coords)),
            Command::Chord(coords) => Event::Revealed(self.board.reveal_adjacent(coords)),
            Command::Reset => {
                self.board.reset();
                Event::Reset
            }
            Command::SetDifficulty(difficulty) => {
                self.board.set_difficulty(difficulty);
                Event::DifficultyChanged(difficulty)
            }
            Command::SetSeed(seed) => {
                self.board.set_seed(seed);
                self.board.reset();
                Event::SeedChanged(seed)
            }
        }
    }

    /// A won game on a ranked difficulty whose time makes the board.
    pub fn qualifies_for_high_score(&self) -> bool {
        let difficulty = self.board.difficulty();
        self.board.is_won()
            && difficulty.records_scores()
            && self
                .ledger
                .is_high_score(self.board.elapsed_secs(), difficulty.label())
    }

    /// Records the finished game under `player_name` and returns its rank, or
    /// `None` when the game does not qualify.
    pub fn record_score(&mut self, player_name: &str) -> Option<usize> {
        if !self.qualifies_for_high_score() {
            log::debug!(
                "Not recording a score for {:?}: state {:?} on {}",
                player_name,
                self.board.state(),
                self.board.difficulty()
            );
            return None;
        }

        let entry = ScoreEntry::new(
            player_name,
            self.board.elapsed_secs(),
            self.board.difficulty().label(),
        );
        self.ledger.add_score(entry)
    }
}
