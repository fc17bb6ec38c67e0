#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use state::*;
pub use tile::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod state;
mod tile;
mod types;

/// Board dimensions and mine count, as chosen by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps raw UI input into a valid configuration.
    pub fn new((size_x, size_y): Coord2, mines: CellCount) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let mines = mines.min(mult(size_x, size_y));
        Self::new_unchecked((size_x, size_y), mines)
    }

    /// Builds a configuration, rejecting anything out of range instead of clamping it.
    pub fn try_new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (size_x, size_y) = self.size;
        if size_x <= 0 || size_y <= 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.mines > self.total_cells() {
            return Err(GameError::InvalidMineCount);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((30, 16), 99)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((16, 16), 32)
    }
}

/// Where the mines are on a board, independent of what the player has seen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new_unchecked(size, 0).validate()?;
        let mut mine_mask: Array2<bool> = Array2::default([size.0 as usize, size.1 as usize]);

        for &coords in mine_coords {
            let index = nd_index(coords, size).ok_or(GameError::InvalidCoords)?;
            mine_mask[index] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (size_x, size_y) = self.mine_mask.dim();
        (size_x as Coord, size_y as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Whether `coords` holds a mine, `false` outside the board.
    pub fn contains_mine(&self, coords: Coord2) -> bool {
        nd_index(coords, self.size()).is_some_and(|index| self.mine_mask[index])
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.mine_mask[(x as usize, y as usize)]
    }
}
