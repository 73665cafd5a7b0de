//! Boundary-aware 8-connected neighborhoods.
//!
//! Every candidate offset is checked against the grid size on its own, so corners, edges and
//! degenerate one-cell-wide grids all fall out of the same rule.

use crate::*;

/// The full 8-connected neighborhood, in the order neighbors are yielded.
pub const NEIGHBOR_OFFSETS: [Offset; 8] = [
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
fn apply_delta(coords: Coord2, delta: Offset, bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Walks the candidate offsets of one cell, skipping those that leave the grid.
#[derive(Clone, Debug)]
struct Walk {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl Walk {
    const fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }

    fn next_valid(&mut self) -> Option<(Offset, Coord2)> {
        loop {
            let delta = *NEIGHBOR_OFFSETS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(coords) = apply_delta(self.center, delta, self.bounds) {
                return Some((delta, coords));
            }
        }
    }
}

/// In-bounds offsets around a single cell, see [`neighbor_offsets`].
#[derive(Clone, Debug)]
pub struct NeighborOffsets(Walk);

impl NeighborOffsets {
    /// The cell these offsets are relative to.
    pub fn center(&self) -> Coord2 {
        self.0.center
    }

    /// Resolves the remaining offsets into absolute coordinates.
    pub fn coords(self) -> NeighborIter {
        NeighborIter(self.0)
    }
}

impl Iterator for NeighborOffsets {
    type Item = Offset;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_valid().map(|(delta, _)| delta)
    }
}

/// In-bounds neighbor coordinates around a single cell, see [`neighbors`].
#[derive(Clone, Debug)]
pub struct NeighborIter(Walk);

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_valid().map(|(_, coords)| coords)
    }
}

/// Offsets `(dx, dy)` such that `coords + (dx, dy)` is still inside a grid of `size`.
pub fn neighbor_offsets(coords: Coord2, size: Coord2) -> NeighborOffsets {
    NeighborOffsets(Walk::new(coords, size))
}

/// Coordinates of the in-bounds neighbors of `coords` in a grid of `size`.
pub fn neighbors(coords: Coord2, size: Coord2) -> NeighborIter {
    NeighborIter(Walk::new(coords, size))
}

/// Enumerates every coordinate of a grid together with its in-bounds neighbor offsets.
///
/// Coordinates are produced column by column (`x` outer, `y` inner). The sequence is lazy;
/// calling [`adjacency`] again, or cloning, restarts it.
#[derive(Clone, Debug)]
pub struct Adjacency {
    size: Coord2,
    next: CellCount,
}

/// Starts an [`Adjacency`] enumeration over a grid of `size`.
pub fn adjacency(size: Coord2) -> Adjacency {
    Adjacency { size, next: 0 }
}

impl Adjacency {
    pub fn size(&self) -> Coord2 {
        self.size
    }

    fn total(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Iterator for Adjacency {
    type Item = (Coord, Coord, NeighborOffsets);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total() {
            return None;
        }

        let (x, y) = from_linear_index(self.next, self.size);
        self.next += 1;
        Some((x, y, neighbor_offsets((x, y), self.size)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.total() - self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Adjacency {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn offsets(coords: Coord2, size: Coord2) -> Vec<Offset> {
        neighbor_offsets(coords, size).collect()
    }

    #[test]
    fn corners_have_three_neighbors() {
        let size = (10, 10);
        for corner in [(0, 0), (9, 0), (0, 9), (9, 9)] {
            assert_eq!(offsets(corner, size).len(), 3, "corner {corner:?}");
        }
        assert_eq!(offsets((0, 0), size), [(1, 0), (0, 1), (1, 1)]);
        assert_eq!(offsets((9, 9), size), [(-1, -1), (0, -1), (-1, 0)]);
    }

    #[test]
    fn edges_have_five_neighbors() {
        let size = (10, 10);
        for edge in [(5, 0), (5, 9), (0, 5), (9, 5)] {
            assert_eq!(offsets(edge, size).len(), 5, "edge {edge:?}");
        }
    }

    #[test]
    fn interior_has_full_neighborhood() {
        assert_eq!(offsets((5, 5), (10, 10)), NEIGHBOR_OFFSETS);
    }

    #[test]
    fn single_column_only_looks_up_and_down() {
        let found: Vec<_> = neighbors((0, 2), (1, 5)).collect();
        assert_eq!(found, [(0, 1), (0, 3)]);
        assert_eq!(offsets((0, 0), (1, 5)), [(0, 1)]);
        assert_eq!(offsets((0, 4), (1, 5)), [(0, -1)]);
    }

    #[test]
    fn single_row_only_looks_left_and_right() {
        assert_eq!(offsets((2, 0), (5, 1)), [(-1, 0), (1, 0)]);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert!(offsets((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn center_is_not_its_own_neighbor() {
        assert!(neighbors((3, 3), (7, 7)).all(|pos| pos != (3, 3)));
    }

    #[test]
    fn offsets_resolve_to_neighbors() {
        let size = (4, 3);
        let resolved: Vec<_> = neighbor_offsets((3, 1), size).coords().collect();
        let direct: Vec<_> = neighbors((3, 1), size).collect();
        assert_eq!(resolved, direct);
    }

    #[test]
    fn adjacency_visits_every_cell_once() {
        let size = (4, 3);
        let seen: Vec<_> = adjacency(size).map(|(x, y, _)| (x, y)).collect();
        assert_eq!(seen.len(), 12);
        assert_eq!(seen[0], (0, 0));
        assert_eq!(seen[1], (0, 1));
        assert_eq!(seen[11], (3, 2));
        assert_eq!(adjacency(size).len(), 12);
    }

    #[test]
    fn adjacency_offsets_match_single_cell_query() {
        let size = (3, 5);
        for (x, y, found) in adjacency(size) {
            assert_eq!(found.center(), (x, y));
            assert_eq!(found.collect::<Vec<_>>(), offsets((x, y), size));
        }
    }

    #[test]
    fn adjacency_restarts_when_cloned() {
        let mut walk = adjacency((2, 2));
        walk.next();
        let copy = walk.clone();
        assert_eq!(walk.count(), 3);
        assert_eq!(copy.count(), 3);
        assert_eq!(adjacency((2, 2)).count(), 4);
    }
}
