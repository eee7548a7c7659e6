use ahash::AHashSet;

use crate::grid::Tile;

/// A set of grid tiles forming one voting district.
///
/// Districts taking part in a `Configuration` are non-empty and contiguous.
/// A non-contiguous district may be built as input to `is_contiguous` and
/// `get_contiguous_subdistricts`; every other query assumes contiguity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct District {
    pub(super) tiles: AHashSet<Tile>,
}

impl District {
    /// Construct a district from any collection of tiles (duplicates collapse).
    pub fn new(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self { tiles: tiles.into_iter().collect() }
    }

    /// Number of tiles in the district.
    #[inline] pub fn len(&self) -> usize { self.tiles.len() }

    /// Returns true if the district has no tiles.
    #[inline] pub fn is_empty(&self) -> bool { self.tiles.is_empty() }

    /// Returns true if `tile` belongs to this district.
    #[inline] pub fn contains(&self, tile: &Tile) -> bool { self.tiles.contains(tile) }

    /// Read-only view of the tile set.
    #[inline] pub fn tiles(&self) -> &AHashSet<Tile> { &self.tiles }

    /// Iterator over the tiles, in arbitrary order.
    #[inline] pub fn iter(&self) -> impl ExactSizeIterator<Item = &Tile> + '_ { self.tiles.iter() }

    /// Tiles in sorted (row-major) order.
    pub fn sorted_tiles(&self) -> Vec<Tile> {
        let mut tiles = self.tiles.iter().copied().collect::<Vec<_>>();
        tiles.sort_unstable();
        tiles
    }

    /// A copy of this district with `tile` added.
    pub fn with_tile(&self, tile: Tile) -> Self {
        let mut district = self.clone();
        district.tiles.insert(tile);
        district
    }

    /// A copy of this district with `tile` removed.
    pub fn without_tile(&self, tile: Tile) -> Self {
        let mut district = self.clone();
        district.tiles.remove(&tile);
        district
    }

    /// A copy of this district after giving away `give` and receiving `take`.
    pub fn swapped(&self, give: Tile, take: Tile) -> Self {
        let mut district = self.clone();
        district.swap_in_place(give, take);
        district
    }

    /// Give away `give` and receive `take`, in place.
    fn swap_in_place(&mut self, give: Tile, take: Tile) {
        debug_assert!(self.tiles.contains(&give), "tile {give} not in district");
        debug_assert!(!self.tiles.contains(&take), "tile {take} already in district");
        self.tiles.remove(&give);
        self.tiles.insert(take);
    }

    /// Returns true if the two districts share at least one tile.
    pub fn overlaps(&self, other: &District) -> bool {
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        small.tiles.iter().any(|tile| large.contains(tile))
    }
}

impl FromIterator<Tile> for District {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self { Self::new(iter) }
}

impl<'a> IntoIterator for &'a District {
    type Item = &'a Tile;
    type IntoIter = std::collections::hash_set::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter { self.tiles.iter() }
}
