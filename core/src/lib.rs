#![no_std]

extern crate alloc;

use core::ops::{BitOr, Index};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use timer::*;
pub use types::*;

mod difficulty;
mod engine;
mod error;
mod generator;
mod tile;
mod timer;
mod types;

/// Board dimensions `(height, width)` and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps sides into `[MIN_CUSTOM_SIDE, MAX_CUSTOM_SIDE]` and mines into
    /// `[1, height * width - SAFE_ZONE_CELLS]`.
    pub fn custom(height: usize, width: usize, mines: usize) -> Self {
        let clamp_side = |side: usize| {
            let side = side.clamp(MIN_CUSTOM_SIDE.into(), MAX_CUSTOM_SIDE.into());
            Coord::try_from(side).unwrap_or(MAX_CUSTOM_SIDE)
        };
        let (height, width) = (clamp_side(height), clamp_side(width));
        let max_mines = mult(height, width) - SAFE_ZONE_CELLS;
        let mines = CellCount::try_from(mines)
            .unwrap_or(CellCount::MAX)
            .clamp(1, max_mines);
        Self::new_unchecked((height, width), mines)
    }

    pub const fn height(&self) -> Coord {
        self.size.0
    }

    pub const fn width(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

/// Where the mines are, independent of what the player has seen.
///
/// Read-only once built, so `mine_count` always matches the mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        Self {
            mine_mask,
            mine_count: CellCount::try_from(mine_count).unwrap_or(CellCount::MAX),
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            size: self.size(),
            mines: self.mine_count,
        }
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.mine_mask)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        CellCount::try_from(self.mine_mask.len()).unwrap_or(CellCount::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn mine_mask(&self) -> &Array2<bool> {
        &self.mine_mask
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size()) && self[coords]
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .filter_map(|((row, col), _)| Some((Coord::try_from(row).ok()?, Coord::try_from(col).ok()?)))
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = self
            .mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count();
        // at most 8 neighbours
        count as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.mine_mask[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_counts_adjacent_mines() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((0, 2)), 0);
        assert_eq!(layout.adjacent_mine_count((0, 1)), 1);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((3, 3), &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn mine_count_matches_the_mask() {
        let mut mask: Array2<bool> = Array2::default((5, 5));
        mask[[0, 0]] = true;
        mask[[4, 4]] = true;
        let layout = MineLayout::from_mine_mask(mask);

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(usize::from(layout.mine_count()), layout.iter_mines().count());
        assert_eq!(layout.safe_cell_count(), 23);
        assert_eq!(layout.board_config(), BoardConfig::new_unchecked((5, 5), 2));
    }

    #[test]
    fn contains_mine_is_false_outside_the_board() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(1, 1)]).unwrap();
        assert!(layout.contains_mine((1, 1)));
        assert!(!layout.contains_mine((5, 5)));
    }

    #[test]
    fn outcomes_merge_with_loss_priority() {
        use RevealOutcome::*;
        assert_eq!(Revealed | HitMine, HitMine);
        assert_eq!(Won | Revealed, Won);
        assert_eq!(NoChange | NoChange, NoChange);
        assert!(!NoChange.has_update());
    }
}
