use std::fmt;

use crate::{configuration::Configuration, grid::Tile};

/// A candidate swap of one tile between two districts.
///
/// `tiles.0` leaves district `districts.0` for `districts.1`, and `tiles.1`
/// travels the other way. District indices are always ordered `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Trade {
    pub districts: (usize, usize),
    pub tiles: (Tile, Tile),
}

impl Trade {
    #[inline]
    pub fn new(a: usize, b: usize, tile_a: Tile, tile_b: Tile) -> Self {
        assert!(a < b, "trade districts must be ordered, got ({a}, {b})");
        Self { districts: (a, b), tiles: (tile_a, tile_b) }
    }

    /// Returns true if the trade moves tiles into or out of district `index`.
    #[inline]
    pub fn involves(&self, index: usize) -> bool {
        self.districts.0 == index || self.districts.1 == index
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} <-> {}:{}", self.districts.0, self.tiles.0, self.districts.1, self.tiles.1)
    }
}

impl Configuration {
    /// Legal trades between districts `a < b`, sorted.
    ///
    /// Enumerated from both sides and merged, so the result does not depend
    /// on which of the two districts has the lower index.
    fn trades_between(&self, a: usize, b: usize) -> Vec<Trade> {
        let (first, second) = (&self.districts[a], &self.districts[b]);
        let mut pairs = first.find_allowed_trades(second);
        pairs.extend(second.find_allowed_trades(first).into_iter().map(|(tile_b, tile_a)| (tile_a, tile_b)));
        pairs.sort_unstable();
        pairs.dedup();

        pairs.into_iter().map(|(tile_a, tile_b)| Trade::new(a, b, tile_a, tile_b)).collect()
    }

    /// Compute every legal trade from scratch, examining every unordered pair of districts.
    pub fn compute_all_trades(&self) -> Vec<Trade> {
        let n = self.districts.len();
        (0..n)
            .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
            .flat_map(|(a, b)| self.trades_between(a, b))
            .collect()
    }

    /// Refresh the trade set after districts `touched` changed.
    ///
    /// Trades involving a touched district are dropped and recomputed against
    /// every other district; trades between untouched districts are kept as is.
    pub(super) fn update_trades(&mut self, touched: &[usize]) {
        self.trades.retain(|trade| !touched.iter().any(|&i| trade.involves(i)));

        let n = self.districts.len();
        let fresh = (0..n)
            .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
            .filter(|(a, b)| touched.contains(a) || touched.contains(b))
            .flat_map(|(a, b)| self.trades_between(a, b))
            .collect::<Vec<_>>();

        tracing::debug!(kept = self.trades.len(), fresh = fresh.len(), "refreshed trade set");
        self.trades.extend(fresh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{district::District, grid::VoterDistribution};

    #[test]
    fn involves_either_side() {
        let trade = Trade::new(1, 3, Tile::new(0, 0), Tile::new(0, 1));
        assert!(trade.involves(1));
        assert!(trade.involves(3));
        assert!(!trade.involves(2));
    }

    #[test]
    #[should_panic]
    fn unordered_districts_panic() {
        Trade::new(2, 1, Tile::new(0, 0), Tile::new(0, 1));
    }

    #[test]
    fn display_format() {
        let trade = Trade::new(0, 2, Tile::new(1, 2), Tile::new(3, 4));
        assert_eq!(trade.to_string(), "0:(1, 2) <-> 2:(3, 4)");
    }

    #[test]
    fn one_tile_district_trades_in_either_position() {
        let single = District::new([Tile::new(0, 0)]);
        let corner = District::new([Tile::new(0, 1), Tile::new(1, 1), Tile::new(1, 0)]);
        let voters = VoterDistribution::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap();

        let first = Configuration::new(vec![single.clone(), corner.clone()], voters.clone()).unwrap();
        let second = Configuration::new(vec![corner, single], voters).unwrap();
        assert_eq!(first.trades(), &[
            Trade::new(0, 1, Tile::new(0, 0), Tile::new(0, 1)),
            Trade::new(0, 1, Tile::new(0, 0), Tile::new(1, 0)),
        ]);
        assert_eq!(second.trades(), &[
            Trade::new(0, 1, Tile::new(0, 1), Tile::new(0, 0)),
            Trade::new(0, 1, Tile::new(1, 0), Tile::new(0, 0)),
        ]);
    }

    #[test]
    fn two_one_tile_districts_do_not_trade() {
        let voters = VoterDistribution::from_rows(&[vec![1, 0]]).unwrap();
        let configuration = Configuration::new(
            vec![District::new([Tile::new(0, 0)]), District::new([Tile::new(0, 1)])],
            voters,
        ).unwrap();
        assert!(configuration.trades().is_empty());
    }
}
