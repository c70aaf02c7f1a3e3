use alloc::vec::Vec;
use ndarray::Array2;
use rand::SeedableRng;
use rand::seq::index;
use rand_pcg::Pcg64;

use super::*;

/// Purely random placement that keeps the starting cell and its neighbours free of mines.
///
/// Mines are sampled without replacement from the eligible cells, so placement always
/// terminates. The same seed, config and start produce the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
    start: Coord2,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64, start: Coord2) -> Self {
        Self { seed, start }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout {
        let (height, width) = config.size;
        let eligible: Vec<Coord2> = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .filter(|&coords| chebyshev_distance(coords, self.start) > 1)
            .collect();

        let requested = usize::from(config.mines);
        if requested > eligible.len() {
            log::warn!(
                "Cannot keep the start area clear, requested {} mines but only {} cells are eligible",
                requested,
                eligible.len()
            );
        }
        let amount = requested.min(eligible.len());

        let mut rng = Pcg64::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        for pick in index::sample(&mut rng, eligible.len(), amount).iter() {
            mine_mask[eligible[pick].to_nd_index()] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        log::debug!(
            "Placed {} mines with seed {} around start {:?}",
            layout.mine_count(),
            self.seed,
            self.start
        );
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64, start: Coord2, config: BoardConfig) -> MineLayout {
        RandomMinefieldGenerator::new(seed, start).generate(config)
    }

    #[test]
    fn places_exact_mine_count_outside_start_area() {
        let layout = generate(42, (4, 4), Difficulty::EASY);

        assert_eq!(layout.mine_count(), 10);
        for row in 3..=5 {
            for col in 3..=5 {
                assert!(!layout.contains_mine((row, col)));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let a = generate(7, (0, 0), Difficulty::HARD);
        let b = generate(7, (0, 0), Difficulty::HARD);
        let c = generate(8, (0, 0), Difficulty::HARD);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn densest_custom_board_fills_every_eligible_cell() {
        let config = Difficulty::custom(5, 5, 16).config();
        let layout = generate(1, (2, 2), config);

        assert_eq!(layout.mine_count(), 16);
        assert_eq!(layout.safe_cell_count(), 9);
    }

    #[test]
    fn overfull_board_is_capped_without_looping() {
        let config = BoardConfig::new_unchecked((3, 3), 5);
        let layout = generate(3, (1, 1), config);

        assert_eq!(layout.mine_count(), 0);
    }

    #[test]
    fn corner_start_excludes_only_in_bounds_neighbours() {
        let config = BoardConfig::new_unchecked((3, 3), 5);
        let layout = generate(3, (0, 0), config);

        assert_eq!(layout.mine_count(), 5);
        assert!(!layout.contains_mine((0, 0)));
        assert!(!layout.contains_mine((0, 1)));
        assert!(!layout.contains_mine((1, 0)));
        assert!(!layout.contains_mine((1, 1)));
    }
}
