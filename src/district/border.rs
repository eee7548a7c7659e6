use ahash::AHashSet;

use crate::{district::District, grid::Tile};

impl District {
    /// Tiles of `self` that have at least one neighbor in `other`.
    pub fn find_border(&self, other: &District) -> AHashSet<Tile> {
        self.tiles.iter()
            .filter(|tile| tile.has_neighbor_in(|t| other.contains(t)))
            .copied()
            .collect()
    }

    /// Every adjacent `(self_tile, other_tile)` pair across the boundary.
    pub fn find_border_pairs(&self, other: &District) -> AHashSet<(Tile, Tile)> {
        self.tiles.iter()
            .flat_map(|&tile| {
                tile.neighbors_in(|t| other.contains(t)).into_iter().map(move |neighbor| (tile, neighbor))
            })
            .collect()
    }

    /// Returns true if any tile of `self` is adjacent to a tile of `other`.
    pub fn borders(&self, other: &District) -> bool {
        self.tiles.iter().any(|tile| tile.has_neighbor_in(|t| other.contains(t)))
    }
}
