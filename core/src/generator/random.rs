use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniformly random placement that keeps a zone around the first revealed cell free of mines.
///
/// Each mine lands on a random cell; if that cell is taken or inside the start zone the search walks forward in
/// row-major order, wrapping at the end of the board, until a free cell turns up.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
    start: Coord2,
    start_zone: StartZone,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64, start: Coord2, start_zone: StartZone) -> Self {
        Self {
            seed,
            start,
            start_zone,
        }
    }

    /// Falls back to a smaller zone when the requested one leaves too little room for the mines.
    fn actual_start_zone(&self, config: GameConfig) -> StartZone {
        use StartZone::*;

        let total_cells = config.total_cells();
        match self.start_zone {
            SafeNeighborhood
                if config.mines
                    > total_cells - SafeNeighborhood.cell_count(self.start, config.size) =>
            {
                log::warn!(
                    "Cannot keep neighborhood of {:?} free of {} mines, fallback to safe cell",
                    self.start,
                    config.mines
                );
                SafeCell
            }
            zone => zone,
        }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        config.validate()?;
        let size = config.size;
        nd_index(self.start, size).ok_or(GameError::InvalidCoords)?;

        let zone = self.actual_start_zone(config);
        let total_cells = config.total_cells() as usize;
        let mut mines: Array2<bool> = Array2::default([size.0 as usize, size.1 as usize]);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for placed in 0..config.mines {
            let mut index = rng.random_range(0..total_cells);
            let mut probes = 0;

            let coords = loop {
                let coords = from_linear_index(index, size);
                if !mines[[coords.0 as usize, coords.1 as usize]]
                    && !zone.contains(self.start, coords)
                {
                    break coords;
                }

                probes += 1;
                if probes >= total_cells {
                    log::warn!(
                        "No free cell left after placing {} of {} mines",
                        placed,
                        config.mines
                    );
                    return Err(GameError::MinePlacementExhausted);
                }
                index = (index + 1) % total_cells;
            };

            mines[[coords.0 as usize, coords.1 as usize]] = true;
        }

        let layout = MineLayout::from_mine_mask(mines);
        log::debug!(
            "Placed {} mines on {:?} around start {:?} ({:?})",
            layout.mine_count(),
            size,
            self.start,
            zone
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(config: GameConfig, seed: u64, start: Coord2) -> Result<MineLayout> {
        RandomMinefieldGenerator::new(seed, start, StartZone::SafeNeighborhood).generate(config)
    }

    fn mines_of(layout: &MineLayout) -> alloc::vec::Vec<Coord2> {
        let (size_x, size_y) = layout.size();
        (0..size_y)
            .flat_map(|y| (0..size_x).map(move |x| (x, y)))
            .filter(|&coords| layout.contains_mine(coords))
            .collect()
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GameConfig::intermediate();

        let a = generate(config, 7, (3, 4)).unwrap();
        let b = generate(config, 7, (3, 4)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn places_exact_count_outside_start_neighborhood() {
        let config = GameConfig::expert();

        for seed in 0..32 {
            let layout = generate(config, seed, (10, 5)).unwrap();

            assert_eq!(layout.mine_count(), config.mines);
            for y in 4..=6 {
                for x in 9..=11 {
                    assert!(!layout.contains_mine((x, y)), "seed {seed}: mine at {:?}", (x, y));
                }
            }
        }
    }

    #[test]
    fn corner_start_clips_the_neighborhood() {
        let config = GameConfig::try_new((3, 3), 5).unwrap();

        let layout = generate(config, 1, (0, 0)).unwrap();

        assert_eq!(mines_of(&layout), [(2, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn dense_board_only_keeps_start_cell_safe() {
        let config = GameConfig::try_new((3, 3), 8).unwrap();

        let layout = generate(config, 99, (1, 1)).unwrap();

        assert_eq!(layout.mine_count(), 8);
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn full_board_is_exhausted() {
        let config = GameConfig::try_new((2, 2), 4).unwrap();

        assert_eq!(
            generate(config, 0, (0, 0)),
            Err(GameError::MinePlacementExhausted)
        );
    }

    #[test]
    fn start_outside_board_is_rejected() {
        let config = GameConfig::beginner();

        assert_eq!(generate(config, 0, (9, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn zero_mines_gives_empty_layout() {
        let layout = generate(GameConfig::try_new((1, 1), 0).unwrap(), 3, (0, 0)).unwrap();

        assert_eq!(layout.mine_count(), 0);
        assert_eq!(layout.safe_cell_count(), 1);
    }
}
