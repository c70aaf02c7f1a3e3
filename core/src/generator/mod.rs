use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout;
}

/// Draws a fresh seed for boards that did not request one.
pub fn random_seed() -> u64 {
    rand::random()
}

/// Interprets a seed typed by the player.
///
/// Negative, empty or non-numeric input means "pick randomly".
pub fn parse_seed_input(input: &str) -> Option<u64> {
    let input = input.trim();
    match input.parse::<i64>() {
        Ok(seed) => u64::try_from(seed).ok(),
        Err(_) => input.parse::<u64>().ok(),
    }
}
