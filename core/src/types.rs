/// Single coordinate axis used for board width, height, and positions.
///
/// Signed so that cursor-derived positions left of or below the board can be passed straight through.
pub type Coord = i16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Area of a `a * b` board, zero when either side is not positive.
pub const fn mult(a: Coord, b: Coord) -> CellCount {
    if a <= 0 || b <= 0 {
        return 0;
    }
    (a as CellCount) * (b as CellCount)
}

/// Returns the `ndarray` index for `coords` when it lies inside a board of `size`.
pub fn nd_index(coords: Coord2, size: Coord2) -> Option<[usize; 2]> {
    let (x, y) = coords;
    let (max_x, max_y) = size;
    if (0..max_x).contains(&x) && (0..max_y).contains(&y) {
        Some([x as usize, y as usize])
    } else {
        None
    }
}

/// Inverse of a row-major linear index, `x` varies fastest.
pub(crate) fn from_linear_index(index: usize, (width, _): Coord2) -> Coord2 {
    let width = width as usize;
    ((index % width) as Coord, (index / width) as Coord)
}

const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: Coord2, bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;

    let next = (x.checked_add(dx)?, y.checked_add(dy)?);
    nd_index(next, bounds).map(|_| next)
}

/// Iterates the in-bounds neighbors of a cell, always in the same row-major order.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbors_follow_row_major_order() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();

        assert_eq!(
            neighbors,
            [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn neighbors_are_clipped_at_corners() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (4, 2)).collect();

        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn neighbors_of_single_cell_board_are_empty() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn nd_index_rejects_negative_and_overflowing_coords() {
        assert_eq!(nd_index((-1, 0), (3, 3)), None);
        assert_eq!(nd_index((0, 3), (3, 3)), None);
        assert_eq!(nd_index((2, 1), (3, 3)), Some([2, 1]));
    }

    #[test]
    fn from_linear_index_is_x_fastest() {
        let size = (4, 3);
        assert_eq!(from_linear_index(0, size), (0, 0));
        assert_eq!(from_linear_index(3, size), (3, 0));
        assert_eq!(from_linear_index(9, size), (1, 2));
    }
}
