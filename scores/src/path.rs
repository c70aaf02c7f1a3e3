use directories::BaseDirs;
use std::path::PathBuf;

/// Directory holding the score file, relative to the per-user base directory.
pub const SCORES_DIR: &str = ".minesweeper";

pub const SCORES_FILE: &str = "scores.txt";

/// `~/.minesweeper/scores.txt`, or the same under the roaming app-data directory on
/// Windows. Falls back to the working directory when no home can be found.
pub fn default_scores_path() -> PathBuf {
    let base = match BaseDirs::new() {
        Some(dirs) => base_dir(&dirs),
        None => {
            log::warn!("No home directory found, keeping scores in the working directory");
            PathBuf::from(".")
        }
    };
    base.join(SCORES_DIR).join(SCORES_FILE)
}

#[cfg(windows)]
fn base_dir(dirs: &BaseDirs) -> PathBuf {
    dirs.config_dir().to_path_buf()
}

#[cfg(not(windows))]
fn base_dir(dirs: &BaseDirs) -> PathBuf {
    dirs.home_dir().to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_score_file() {
        let path = default_scores_path();
        assert!(path.ends_with(".minesweeper/scores.txt"));
    }
}
