use crate::{district::District, grid::Tile};

impl District {
    /// Enumerate single-tile swaps `(self_tile, other_tile)` that leave both districts contiguous.
    ///
    /// For every tile `t_other` on the border of `other`, form `self + t_other`
    /// and `other - t_other`. The shrunk district may have split into several
    /// components; a return tile `t_self` must border every one of them (so
    /// that adding it back reconnects them), and removing it from the grown
    /// district must keep that district contiguous. Results are sorted.
    pub fn find_allowed_trades(&self, other: &District) -> Vec<(Tile, Tile)> {
        let mut trades = Vec::new();

        for trade_other in other.find_border(self) {
            let grown = self.with_tile(trade_other);
            let shrunk = other.without_tile(trade_other);

            // A one-tile district has no components left to reconnect.
            let subdistricts = shrunk.get_contiguous_subdistricts();
            let Some((first, rest)) = subdistricts.split_first() else { continue };

            // Candidates must border every component of the shrunk district.
            let mut candidates = grown.find_border(first);
            for subdistrict in rest {
                if candidates.is_empty() { break }
                let border = grown.find_border(subdistrict);
                candidates.retain(|tile| border.contains(tile));
            }
            candidates.remove(&trade_other);

            trades.extend(candidates.into_iter()
                .filter(|&trade_self| grown.without_tile(trade_self).is_contiguous())
                .map(|trade_self| (trade_self, trade_other))
            );
        }

        trades.sort_unstable();
        trades
    }
}
