use super::*;

/// Uniform placement that keeps the first selected cell and its neighbors free of mines.
///
/// Positions are drawn uniformly over the whole board and rejected when they fall within
/// Chebyshev distance 1 of the anchor or were already chosen. [`GameConfig`] caps the mine
/// count so that enough candidates always remain and the loop terminates.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectionSampler {
    seed: u64,
    anchor: Coord2,
}

impl RejectionSampler {
    pub fn new(seed: u64, anchor: Coord2) -> Self {
        Self { seed, anchor }
    }

    fn accepts(&self, candidate: Coord2) -> bool {
        chebyshev(candidate, self.anchor) > 1
    }
}

impl MineGenerator for RejectionSampler {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let size = config.size();
        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());
        let mut placed: CellCount = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while placed < config.mines() {
            let candidate = (
                rng.random_range(0..config.rows()),
                rng.random_range(0..config.columns()),
            );
            if !self.accepts(candidate) {
                continue;
            }

            let slot = &mut mines[candidate.to_nd_index()];
            if !*slot {
                *slot = true;
                placed += 1;
            }
        }

        let layout = MineLayout::from_mine_mask(mines);
        log::debug!(
            "placed {} mines on {}x{} around {:?} (seed {})",
            layout.mine_count(),
            config.rows(),
            config.columns(),
            self.anchor,
            self.seed
        );
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_count_outside_anchor_zone() {
        let config = GameConfig::new(9, 9, 10).unwrap();

        for seed in 0..32 {
            let anchor = ((seed % 9) as Coord, (seed * 7 % 9) as Coord);
            let layout = RejectionSampler::new(seed, anchor).generate(config);

            assert_eq!(layout.mine_count(), 10);
            assert_eq!(layout.mine_positions().len(), 10);
            for pos in Neighbors::zone(anchor, config.size()) {
                assert!(!layout.contains_mine(pos), "mine at {pos:?} near {anchor:?}");
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::new(16, 30, 99).unwrap();

        let a = RejectionSampler::new(42, (5, 5)).generate(config);
        let b = RejectionSampler::new(42, (5, 5)).generate(config);

        assert_eq!(a, b);
    }

    #[test]
    fn fills_every_cell_outside_the_zone() {
        let config = GameConfig::new(4, 4, GameConfig::max_mines(4, 4)).unwrap();
        let layout = RejectionSampler::new(7, (1, 1)).generate(config);

        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(layout.contains_mine((i, j)), chebyshev((i, j), (1, 1)) > 1);
            }
        }
    }

    #[test]
    fn corner_anchor_only_excludes_four_cells() {
        let config = GameConfig::new(2, 3, 2).unwrap_err();
        assert!(matches!(config, GameError::InvalidConfiguration(_)));

        let config = GameConfig::new(4, 4, 7).unwrap();
        let layout = RejectionSampler::new(3, (0, 0)).generate(config);
        assert_eq!(layout.mine_count(), 7);
        assert!(!layout.contains_mine((0, 0)));
        assert!(!layout.contains_mine((0, 1)));
        assert!(!layout.contains_mine((1, 0)));
        assert!(!layout.contains_mine((1, 1)));
    }
}
