use std::collections::VecDeque;

use ahash::AHashSet;

use crate::{district::District, grid::Tile};

/// Breadth-first flood fill from `start`, consuming reachable tiles from `remaining`.
/// Returns every tile reached (including `start`, which must already be absent from `remaining`).
fn flood_fill(start: Tile, remaining: &mut AHashSet<Tile>) -> Vec<Tile> {
    let mut reached = vec![start];
    let mut queue = VecDeque::from([start]);
    while let Some(tile) = queue.pop_front() {
        for neighbor in tile.neighbors() {
            if remaining.remove(&neighbor) {
                reached.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }
    reached
}

impl District {
    /// Check whether the tiles form a single 4-connected component.
    pub fn is_contiguous(&self) -> bool {
        if self.len() <= 1 { return true }

        let Some(&start) = self.tiles.iter().next() else { return true };
        let mut remaining = self.tiles.clone();
        remaining.remove(&start);
        flood_fill(start, &mut remaining);

        remaining.is_empty()
    }

    /// Split the tiles into maximal connected components.
    ///
    /// A contiguous district yields a single element equal to itself; an
    /// empty district yields no components. Components are ordered by their
    /// smallest tile.
    pub fn get_contiguous_subdistricts(&self) -> Vec<District> {
        let mut subdistricts = Vec::new();
        let mut remaining = self.tiles.clone();
        while let Some(start) = remaining.iter().min().copied() {
            remaining.remove(&start);
            subdistricts.push(District::new(flood_fill(start, &mut remaining)));
        }
        subdistricts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district(list: &[(usize, usize)]) -> District {
        list.iter().map(|&t| Tile::from(t)).collect()
    }

    #[test]
    fn trivial_districts_are_contiguous() {
        assert!(District::default().is_contiguous());
        assert!(district(&[(4, 4)]).is_contiguous());
    }

    #[test]
    fn row_is_contiguous() {
        assert!(district(&[(0, 0), (0, 1), (0, 2), (0, 3)]).is_contiguous());
    }

    #[test]
    fn diagonal_is_not_contiguous() {
        assert!(!district(&[(0, 0), (1, 1)]).is_contiguous());
    }

    #[test]
    fn gap_is_not_contiguous() {
        assert!(!district(&[(0, 2), (0, 4)]).is_contiguous());
    }

    #[test]
    fn snake_shape_is_contiguous() {
        // U shape: left column, bottom row, right column.
        assert!(district(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]).is_contiguous());
    }

    #[test]
    fn subdistricts_of_contiguous_is_self() {
        let d = district(&[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(d.get_contiguous_subdistricts(), vec![d]);
    }

    #[test]
    fn subdistricts_of_empty_is_empty() {
        assert!(District::default().get_contiguous_subdistricts().is_empty());
    }

    #[test]
    fn subdistricts_split_components() {
        let d = district(&[(0, 0), (0, 1), (2, 2), (3, 2), (0, 4)]);
        let subs = d.get_contiguous_subdistricts();
        assert_eq!(subs, vec![
            district(&[(0, 0), (0, 1)]),
            district(&[(0, 4)]),
            district(&[(2, 2), (3, 2)]),
        ]);
        assert!(subs.iter().all(District::is_contiguous));
    }
}
