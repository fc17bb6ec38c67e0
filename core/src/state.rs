use core::num::Saturating;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

impl Phase {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Everything a renderer or input adapter can know about the current game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    grid: Array2<Cell>,
    width: Coord,
    height: Coord,
    mine_count: CellCount,
    phase: Phase,
    awaiting_first_reveal: bool,
    revealed_safe: Saturating<CellCount>,
    flagged: Saturating<CellCount>,
}

impl GameState {
    /// Fresh board of hidden empty cells, mines still to be placed.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::blank(config))
    }

    pub(crate) fn blank(config: GameConfig) -> Self {
        let (width, height) = config.size;
        let grid = Array2::from_shape_fn([width as usize, height as usize], |(x, y)| {
            Cell::new((x as Coord, y as Coord))
        });

        Self {
            grid,
            width,
            height,
            mine_count: config.mines,
            phase: Phase::InProgress,
            awaiting_first_reveal: true,
            revealed_safe: Saturating(0),
            flagged: Saturating(0),
        }
    }

    /// Board whose mines are already known, so the first reveal places nothing.
    pub fn with_layout(layout: &MineLayout) -> Self {
        let (width, height) = layout.size();
        let grid = Array2::from_shape_fn([width as usize, height as usize], |(x, y)| {
            let coords = (x as Coord, y as Coord);
            let mut cell = Cell::new(coords);
            cell.set_kind(kind_at(layout, coords));
            cell
        });

        Self {
            grid,
            width,
            height,
            mine_count: layout.mine_count(),
            phase: Phase::InProgress,
            awaiting_first_reveal: false,
            revealed_safe: Saturating(0),
            flagged: Saturating(0),
        }
    }

    pub fn grid(&self) -> &Array2<Cell> {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn awaiting_first_reveal(&self) -> bool {
        self.awaiting_first_reveal
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe.0
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged.0
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config().total_cells() - self.mine_count
    }

    /// Bounds-checked lookup, yielding an `Invalid` cell outside the board.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        match nd_index(coords, self.size()) {
            Some(index) => self.grid[index],
            None => Cell::invalid(coords),
        }
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn count_neighbors(&self, coords: Coord2, predicate: impl Fn(&Cell) -> bool) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| predicate(&self.cell_at(pos)))
            .count() as u8
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        let index = nd_index(coords, self.size())?;
        Some(&mut self.grid[index])
    }

    /// Writes mine kinds and adjacency counts for every cell.
    pub(crate) fn apply_layout(&mut self, layout: &MineLayout) {
        for cell in self.grid.iter_mut() {
            cell.set_kind(kind_at(layout, cell.position()));
        }
        self.awaiting_first_reveal = false;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn add_revealed_safe(&mut self) {
        self.revealed_safe += 1;
    }

    pub(crate) fn set_flag(&mut self, coords: Coord2, flagged: bool) {
        if let Some(cell) = self.cell_mut(coords) {
            if cell.is_flagged() == flagged {
                return;
            }
            cell.set_flagged(flagged);
            if flagged {
                self.flagged += 1;
            } else {
                self.flagged -= 1;
            }
        }
    }

    pub(crate) fn reveal_all_mines(&mut self) {
        for cell in self.grid.iter_mut().filter(|cell| cell.is_mine()) {
            cell.reveal();
        }
    }

    pub(crate) fn flag_all_mines(&mut self) {
        for cell in self.grid.iter_mut().filter(|cell| cell.is_mine()) {
            if !cell.is_flagged() {
                cell.set_flagged(true);
                self.flagged += 1;
            }
        }
    }

    pub(crate) fn all_safe_revealed(&self) -> bool {
        self.revealed_safe == Saturating(self.safe_cell_count())
    }
}

fn kind_at(layout: &MineLayout, coords: Coord2) -> CellKind {
    if layout.contains_mine(coords) {
        CellKind::Mine
    } else {
        CellKind::from_count(layout.adjacent_mine_count(coords))
    }
}
