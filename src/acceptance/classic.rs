use crate::acceptance::{AcceptancePolicy, TradeProposal};

/// Fixed-temperature Metropolis-like rule.
///
/// A trade that does not lower the win-or-tie count of its two districts is
/// always accepted; one that lowers it is accepted with probability `p_lower`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classic {
    p_lower: f64,
}

impl Classic {
    /// Default probability of accepting an objective-lowering trade.
    pub const DEFAULT_P_LOWER: f64 = 0.1;

    pub fn new(p_lower: f64) -> Self {
        assert!((0.0..=1.0).contains(&p_lower), "p_lower must be in [0, 1], got {p_lower}");
        Self { p_lower }
    }

    #[inline] pub fn p_lower(&self) -> f64 { self.p_lower }
}

impl Default for Classic {
    fn default() -> Self { Self::new(Self::DEFAULT_P_LOWER) }
}

impl AcceptancePolicy for Classic {
    fn name(&self) -> &str { "classic" }

    fn acceptance_probability(&self, proposal: &TradeProposal<'_>) -> f64 {
        if proposal.wins_after() < proposal.wins_before() { self.p_lower } else { 1.0 }
    }
}
