use anyhow::{Result, ensure};
use ndarray::Array2;

use crate::grid::Tile;

/// Per-tile party indicators for a rectangular grid (1 = target party, 0 = other).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoterDistribution {
    votes: Array2<u8>,
}

impl VoterDistribution {
    /// Wrap a 2-D array of 0/1 indicators.
    pub fn new(votes: Array2<u8>) -> Result<Self> {
        ensure!(votes.nrows() > 0 && votes.ncols() > 0, "[VoterDistribution.new] grid must be non-empty");
        ensure!(
            votes.iter().all(|&v| v <= 1),
            "[VoterDistribution.new] voter indicators must be 0 or 1"
        );

        Ok(Self { votes })
    }

    /// Build from row vectors, which must all have the same length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        ensure!(!rows.is_empty(), "[VoterDistribution.from_rows] grid must have at least one row");
        let cols = rows[0].len();
        ensure!(
            rows.iter().all(|row| row.len() == cols),
            "[VoterDistribution.from_rows] all rows must have length {cols}"
        );

        let votes = Array2::from_shape_vec((rows.len(), cols), rows.concat())?;
        Self::new(votes)
    }

    /// Number of rows in the grid.
    #[inline] pub fn rows(&self) -> usize { self.votes.nrows() }

    /// Number of columns in the grid.
    #[inline] pub fn cols(&self) -> usize { self.votes.ncols() }

    /// Total number of tiles in the grid.
    #[inline] pub fn num_tiles(&self) -> usize { self.votes.len() }

    /// Returns true if `tile` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, tile: Tile) -> bool {
        tile.row < self.rows() && tile.col < self.cols()
    }

    /// Party indicator for a single tile. Panics if the tile is out of bounds.
    #[inline] pub fn vote(&self, tile: Tile) -> u8 { self.votes[[tile.row, tile.col]] }

    /// Number of target-party tiles among `tiles`.
    #[inline]
    pub fn count_votes<'a>(&self, tiles: impl IntoIterator<Item = &'a Tile>) -> usize {
        tiles.into_iter().map(|&tile| self.vote(tile) as usize).sum()
    }

    /// Returns true if the target party holds at least `ceil(len / 2)` of `tiles`.
    pub fn wins_or_ties<'a>(&self, tiles: impl ExactSizeIterator<Item = &'a Tile>) -> bool {
        let threshold = tiles.len().div_ceil(2);
        self.count_votes(tiles) >= threshold
    }

    /// Iterator over every tile of the grid in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols()).map(move |col| Tile::new(row, col)))
    }

    /// Read-only view of the underlying array.
    #[inline] pub fn as_array(&self) -> &Array2<u8> { &self.votes }
}
