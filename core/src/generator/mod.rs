use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

/// Which cells around the first revealed cell are kept free of mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartZone {
    /// Only the revealed cell itself.
    SafeCell,
    /// The revealed cell and its in-bounds neighbors.
    SafeNeighborhood,
}

impl StartZone {
    /// Number of cells the zone covers around `start` on a board of `size`.
    pub fn cell_count(self, start: Coord2, size: Coord2) -> CellCount {
        match self {
            Self::SafeCell => 1,
            Self::SafeNeighborhood => 1 + NeighborIter::new(start, size).count() as CellCount,
        }
    }

    pub fn contains(self, start: Coord2, coords: Coord2) -> bool {
        match self {
            Self::SafeCell => coords == start,
            Self::SafeNeighborhood => {
                (coords.0 - start.0).abs() <= 1 && (coords.1 - start.1).abs() <= 1
            }
        }
    }
}
