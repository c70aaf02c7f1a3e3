//! Persisted high-score ledger.
//!
//! Scores are kept per difficulty label, sorted by completion time and capped at
//! [`MAX_SCORES_PER_DIFFICULTY`] entries each. The backing file is plain text with
//! one `name|seconds|difficulty` record per line and is rewritten in full after
//! every insertion.

pub use entry::*;
pub use error::*;
pub use ledger::*;
pub use path::*;

mod entry;
mod error;
mod ledger;
mod path;
