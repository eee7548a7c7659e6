use std::fmt;

use crate::{configuration::Trade, grid::Tile};

/// A violated partition invariant, detected when a configuration is built or re-validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The configuration has no districts at all.
    NoDistricts,
    /// District `index` has no tiles.
    EmptyDistrict { index: usize },
    /// District `index` is not 4-connected.
    NonContiguous { index: usize },
    /// District `index` contains a tile outside the grid.
    OutOfBounds { index: usize, tile: Tile },
    /// `tile` is claimed by both `first` and `second`.
    Overlap { first: usize, second: usize, tile: Tile },
    /// `tile` is not assigned to any district.
    Uncovered { tile: Tile },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDistricts => write!(f, "configuration has no districts"),
            Self::EmptyDistrict { index } => write!(f, "district {index} is empty"),
            Self::NonContiguous { index } => write!(f, "district {index} is not contiguous"),
            Self::OutOfBounds { index, tile } => write!(f, "district {index} contains tile {tile} outside the grid"),
            Self::Overlap { first, second, tile } => write!(f, "tile {tile} belongs to both district {first} and district {second}"),
            Self::Uncovered { tile } => write!(f, "tile {tile} is not assigned to any district"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// An accepted trade left one of its districts disconnected.
///
/// Trade enumeration must never produce such a trade; seeing this error
/// means the configuration can no longer be trusted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InconsistentTradeError {
    trade: Trade,
    district: usize,
}

impl InconsistentTradeError {
    #[inline] pub fn new(trade: Trade, district: usize) -> Self { Self { trade, district } }

    #[inline] pub fn trade(&self) -> Trade { self.trade }

    #[inline] pub fn district(&self) -> usize { self.district }
}

impl fmt::Display for InconsistentTradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trade {} disconnected district {}", self.trade, self.district)
    }
}

impl std::error::Error for InconsistentTradeError {}
