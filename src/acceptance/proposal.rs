use crate::{configuration::Trade, district::District, grid::VoterDistribution};

/// The effect of a candidate trade on the two districts it touches.
#[derive(Debug)]
pub struct TradeProposal<'a> {
    voters: &'a VoterDistribution,
    trade: Trade,
    before: [&'a District; 2],
    after: [District; 2],
}

impl<'a> TradeProposal<'a> {
    /// Build a proposal for `trade` between the districts `before = [a, b]`.
    pub fn new(voters: &'a VoterDistribution, trade: Trade, before: [&'a District; 2]) -> Self {
        let (tile_a, tile_b) = trade.tiles;
        let after = [before[0].swapped(tile_a, tile_b), before[1].swapped(tile_b, tile_a)];
        Self { voters, trade, before, after }
    }

    #[inline] pub fn trade(&self) -> Trade { self.trade }

    #[inline] pub fn voters(&self) -> &VoterDistribution { self.voters }

    /// The two districts as they are now.
    #[inline] pub fn before(&self) -> [&District; 2] { self.before }

    /// The two districts as they would be after the swap.
    #[inline] pub fn after(&self) -> &[District; 2] { &self.after }

    /// Win-or-tie count (0, 1 or 2) of the two districts before the swap.
    pub fn wins_before(&self) -> usize {
        self.before.iter().filter(|district| self.voters.wins_or_ties(district.iter())).count()
    }

    /// Win-or-tie count (0, 1 or 2) of the two districts after the swap.
    pub fn wins_after(&self) -> usize {
        self.after.iter().filter(|district| self.voters.wins_or_ties(district.iter())).count()
    }

    /// Change in win-or-tie count caused by the swap.
    #[inline]
    pub fn wins_delta(&self) -> i64 {
        self.wins_after() as i64 - self.wins_before() as i64
    }
}
