mod annealing;
mod classic;
mod proposal;

pub use annealing::Annealing;
pub use classic::Classic;
pub use proposal::TradeProposal;

/// Rule deciding how likely a proposed trade is to be applied.
///
/// Implementations see only the two districts involved in the trade, before
/// and after the swap; they never need the global objective. Plain functions
/// and closures `Fn(&TradeProposal) -> f64` implement this trait as well.
pub trait AcceptancePolicy {
    /// Short human-readable name (for logging).
    fn name(&self) -> &str { "custom" }

    /// Probability in `[0, 1]` of accepting `proposal`.
    fn acceptance_probability(&self, proposal: &TradeProposal<'_>) -> f64;

    /// Called by the search driver before iteration `iter` (0-based).
    fn on_iteration(&mut self, _iter: usize) {}
}

impl<F> AcceptancePolicy for F
where
    F: Fn(&TradeProposal<'_>) -> f64,
{
    fn acceptance_probability(&self, proposal: &TradeProposal<'_>) -> f64 { self(proposal) }
}
