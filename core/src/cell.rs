use serde::{Deserialize, Serialize};

use crate::Coord2;

/// What lies underneath a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    /// Safe cell touching at least one mine.
    Number(u8),
    Mine,
    /// Sentinel for lookups outside the board, never stored in a grid.
    Invalid,
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_safe(self) -> bool {
        matches!(self, Self::Empty | Self::Number(_))
    }

    /// Kind of a safe cell with `count` adjacent mines.
    pub const fn from_count(count: u8) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Number(count)
        }
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Empty
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Coord2,
    kind: CellKind,
    revealed: bool,
    flagged: bool,
    exploded: bool,
}

impl Cell {
    pub(crate) const fn new(position: Coord2) -> Self {
        Self {
            position,
            kind: CellKind::Empty,
            revealed: false,
            flagged: false,
            exploded: false,
        }
    }

    pub(crate) const fn invalid(position: Coord2) -> Self {
        Self {
            kind: CellKind::Invalid,
            ..Self::new(position)
        }
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    /// Number of mines around this cell, zero unless the cell is a `Number`.
    pub const fn adjacent_mine_count(&self) -> u8 {
        match self.kind {
            CellKind::Number(count) => count,
            _ => 0,
        }
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_exploded(&self) -> bool {
        self.exploded
    }

    pub const fn is_mine(&self) -> bool {
        self.kind.is_mine()
    }

    pub const fn is_valid(&self) -> bool {
        !matches!(self.kind, CellKind::Invalid)
    }

    /// Hidden and not flagged, i.e. something a reveal would act on.
    pub const fn is_open_to_reveal(&self) -> bool {
        self.is_valid() && !self.revealed && !self.flagged
    }

    pub(crate) fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn explode(&mut self) {
        self.revealed = true;
        self.exploded = true;
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        self.flagged = flagged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_hidden_empty() {
        let cell = Cell::new((2, 3));

        assert_eq!(cell.position(), (2, 3));
        assert_eq!(cell.kind(), CellKind::Empty);
        assert!(!cell.is_revealed());
        assert!(!cell.is_flagged());
        assert!(!cell.is_exploded());
        assert!(cell.is_open_to_reveal());
    }

    #[test]
    fn invalid_sentinel_is_never_open_to_reveal() {
        let cell = Cell::invalid((-1, 0));

        assert!(!cell.is_valid());
        assert!(!cell.is_open_to_reveal());
        assert_eq!(cell.adjacent_mine_count(), 0);
    }

    #[test]
    fn count_zero_maps_to_empty() {
        assert_eq!(CellKind::from_count(0), CellKind::Empty);
        assert_eq!(CellKind::from_count(3), CellKind::Number(3));
    }
}
