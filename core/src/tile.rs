use serde::{Deserialize, Serialize};

use crate::{Cell, CellKind};

/// What a renderer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Unknown,
    Flag,
    Empty,
    Number(u8),
    Mine,
    Exploded,
}

impl Tile {
    /// Whether the tile is visually closed
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Unknown | Self::Flag)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<Cell> for Tile {
    fn from(cell: Cell) -> Self {
        if !cell.is_revealed() {
            return if cell.is_flagged() {
                Tile::Flag
            } else {
                Tile::Unknown
            };
        }

        match cell.kind() {
            CellKind::Empty => Tile::Empty,
            CellKind::Number(count) => Tile::Number(count),
            CellKind::Mine if cell.is_exploded() => Tile::Exploded,
            CellKind::Mine => Tile::Mine,
            CellKind::Invalid => {
                log::error!("Revealed invalid cell at {:?}", cell.position());
                Tile::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_cells_draw_closed() {
        let mut cell = Cell::new((0, 0));
        assert_eq!(Tile::from(cell), Tile::Unknown);

        cell.set_flagged(true);
        assert_eq!(Tile::from(cell), Tile::Flag);
        assert!(Tile::from(cell).is_closed());
    }

    #[test]
    fn revealed_cells_draw_their_kind() {
        let mut number = Cell::new((0, 0));
        number.set_kind(CellKind::Number(4));
        number.reveal();
        assert_eq!(Tile::from(number), Tile::Number(4));

        let mut mine = Cell::new((1, 0));
        mine.set_kind(CellKind::Mine);
        mine.reveal();
        assert_eq!(Tile::from(mine), Tile::Mine);

        mine.explode();
        assert_eq!(Tile::from(mine), Tile::Exploded);
        assert!(!Tile::from(mine).is_closed());
    }
}
