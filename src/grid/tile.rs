use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single grid cell, identified by `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Tile {
    pub row: usize,
    pub col: usize,
}

impl Tile {
    #[inline] pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

    /// The (up to four) orthogonal neighbors of this tile, ignoring grid bounds on the far side.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Tile> {
        [
            self.row.checked_sub(1).map(|row| Tile::new(row, self.col)),
            self.col.checked_sub(1).map(|col| Tile::new(self.row, col)),
            self.row.checked_add(1).map(|row| Tile::new(row, self.col)),
            self.col.checked_add(1).map(|col| Tile::new(self.row, col)),
        ].into_iter().flatten()
    }

    /// Neighbors of this tile that satisfy `contains` (typically a set lookup).
    #[inline]
    pub fn neighbors_in(self, contains: impl Fn(&Tile) -> bool) -> SmallVec<[Tile; 4]> {
        self.neighbors().filter(|tile| contains(tile)).collect()
    }

    /// Returns true if any neighbor of this tile satisfies `contains`.
    #[inline]
    pub fn has_neighbor_in(self, contains: impl Fn(&Tile) -> bool) -> bool {
        self.neighbors().any(|tile| contains(&tile))
    }

    /// Returns true if `other` shares an edge with this tile.
    #[inline]
    pub fn is_adjacent(self, other: Tile) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Tile {
    #[inline] fn from((row, col): (usize, usize)) -> Self { Self::new(row, col) }
}

impl From<Tile> for (usize, usize) {
    #[inline] fn from(tile: Tile) -> Self { (tile.row, tile.col) }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
