use alloc::vec::Vec;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::*;

/// Runs one game at a time: lazy mine placement, reveals, flags and chords.
///
/// Every mutator returns the resulting [`Phase`]. Inputs that make no sense for the current board (out of bounds,
/// already revealed, flagged, or after the game ended) leave it untouched.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    state: GameState,
    rng: SmallRng,
}

impl BoardEngine {
    /// Starts a game with mines to be placed on the first reveal, `seed` drives every later placement.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let state = GameState::new(config)?;
        log::debug!("New game {:?} with {} mines", config.size, config.mines);
        Ok(Self {
            state,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// Starts a game on a known layout, skipping first-reveal placement.
    pub fn from_layout(layout: &MineLayout, seed: u64) -> Self {
        Self {
            state: GameState::with_layout(layout),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Replaces the current game, rejecting (not clamping) bad dimensions or mine counts.
    pub fn new_game(&mut self, size: Coord2, mines: CellCount) -> Result<Phase> {
        let config = GameConfig::try_new(size, mines).inspect_err(|err| {
            log::warn!("Rejected new game {:?} with {} mines: {}", size, mines, err);
        })?;
        self.state = GameState::blank(config);
        log::debug!("New game {:?} with {} mines", size, mines);
        Ok(self.phase())
    }

    /// New game with the current dimensions and mine count.
    pub fn restart(&mut self) -> Phase {
        self.state = GameState::blank(self.state.config());
        log::debug!("Restarted {:?}", self.state.size());
        self.phase()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> &Array2<Cell> {
        self.state.grid()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.phase().is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.state.size()
    }

    pub fn config(&self) -> GameConfig {
        self.state.config()
    }

    pub fn mine_count(&self) -> CellCount {
        self.state.mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.state.flag_count()
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> isize {
        (self.state.mine_count() as isize) - (self.state.flag_count() as isize)
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.state.revealed_safe_count()
    }

    pub fn awaiting_first_reveal(&self) -> bool {
        self.state.awaiting_first_reveal()
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.state.cell_at(coords)
    }

    /// The mine that ended the game, if it was lost.
    pub fn exploded_mine(&self) -> Option<Coord2> {
        self.grid()
            .iter()
            .find(|cell| cell.is_exploded())
            .map(Cell::position)
    }

    /// What to draw for every cell.
    pub fn tiles(&self) -> Array2<Tile> {
        self.grid().map(|&cell| Tile::from(cell))
    }

    /// Whether chording at `coords` would reveal anything.
    pub fn can_chord_reveal_at(&self, coords: Coord2) -> bool {
        if self.is_finished() {
            return false;
        }

        let cell = self.state.cell_at(coords);
        let CellKind::Number(count) = cell.kind() else {
            return false;
        };
        if !cell.is_revealed() {
            return false;
        }

        let has_hidden_neighbor = self
            .state
            .iter_neighbors(coords)
            .any(|pos| self.state.cell_at(pos).is_open_to_reveal());

        has_hidden_neighbor && self.state.count_neighbors(coords, Cell::is_flagged) == count
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<Phase> {
        if self.is_finished() || !self.state.cell_at(coords).is_open_to_reveal() {
            return Ok(self.phase());
        }

        if self.state.awaiting_first_reveal() {
            self.place_mines(coords)?;
        }

        self.open_cell(coords);
        self.check_win();
        log::debug!("Reveal {:?}: {:?}", coords, self.phase());
        Ok(self.phase())
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Phase {
        let cell = self.state.cell_at(coords);
        if self.is_finished() || !cell.is_valid() || cell.is_revealed() {
            return self.phase();
        }

        self.state.set_flag(coords, !cell.is_flagged());
        log::debug!("Flag {:?}: {}", coords, !cell.is_flagged());
        self.phase()
    }

    /// Reveals every hidden, unflagged neighbor of a revealed number once enough flags surround it.
    pub fn chord_reveal(&mut self, coords: Coord2) -> Phase {
        if !self.can_chord_reveal_at(coords) {
            return self.phase();
        }

        for neighbor in self.state.iter_neighbors(coords) {
            self.open_cell(neighbor);
        }

        self.check_win();
        log::debug!("Chord {:?}: {:?}", coords, self.phase());
        self.phase()
    }

    fn place_mines(&mut self, start: Coord2) -> Result<()> {
        let seed = self.rng.next_u64();
        let layout = RandomMinefieldGenerator::new(seed, start, StartZone::SafeNeighborhood)
            .generate(self.state.config())?;
        self.state.apply_layout(&layout);
        Ok(())
    }

    /// Opens a single hidden cell, does not evaluate the win condition.
    fn open_cell(&mut self, coords: Coord2) {
        let cell = self.state.cell_at(coords);
        if !cell.is_open_to_reveal() {
            return;
        }

        match cell.kind() {
            CellKind::Mine => self.explode(coords),
            CellKind::Empty => self.flood(coords),
            CellKind::Number(_) => {
                self.reveal_safe(coords);
            }
            CellKind::Invalid => {}
        }
    }

    /// Reveals a hidden, unflagged safe cell, returning whether anything changed.
    fn reveal_safe(&mut self, coords: Coord2) -> bool {
        match self.state.cell_mut(coords) {
            Some(cell) if cell.is_open_to_reveal() && cell.kind().is_safe() => cell.reveal(),
            _ => return false,
        }
        self.state.add_revealed_safe();
        true
    }

    /// Opens the connected empty region around `start` together with the numbers bordering it.
    fn flood(&mut self, start: Coord2) {
        let mut to_visit = Vec::from([start]);
        let mut opened = 0;

        while let Some(coords) = to_visit.pop() {
            if !self.reveal_safe(coords) {
                log::trace!("Skipping cell at {:?}", coords);
                continue;
            }
            opened += 1;
            log::trace!("Flood opened cell at {:?}", coords);

            // numbers are the border of the region
            if self.state.cell_at(coords).kind() == CellKind::Empty {
                to_visit.extend(
                    self.state
                        .iter_neighbors(coords)
                        .filter(|&pos| self.state.cell_at(pos).is_open_to_reveal()),
                );
            }
        }

        log::debug!("Flood from {:?} opened {} cells", start, opened);
    }

    fn explode(&mut self, coords: Coord2) {
        if let Some(cell) = self.state.cell_mut(coords) {
            cell.explode();
        }
        self.state.reveal_all_mines();
        self.state.set_phase(Phase::Lost);
        log::debug!("Hit mine at {:?}", coords);
    }

    fn check_win(&mut self) {
        if self.is_finished() || !self.state.all_safe_revealed() {
            return;
        }

        self.state.flag_all_mines();
        self.state.set_phase(Phase::Won);
    }
}
