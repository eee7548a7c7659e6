use anyhow::{Result, ensure};
use rand::{Rng, seq::IndexedRandom};

use crate::{
    acceptance::{AcceptancePolicy, TradeProposal},
    configuration::{Configuration, InconsistentTradeError, Trade},
};

/// What a single `iterate` call did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// The drawn trade was applied.
    Accepted { trade: Trade, probability: f64 },
    /// The drawn trade was rejected; nothing changed.
    Rejected { trade: Trade, probability: f64 },
    /// No legal trade exists from the current state.
    Exhausted,
}

impl StepOutcome {
    #[inline] pub fn is_accepted(&self) -> bool { matches!(self, Self::Accepted { .. }) }
}

impl Configuration {
    /// Describe the effect of `trade` on its two districts without applying it.
    pub fn propose(&self, trade: Trade) -> TradeProposal<'_> {
        let (a, b) = trade.districts;
        TradeProposal::new(&self.voters, trade, [&self.districts[a], &self.districts[b]])
    }

    /// Draw one legal trade uniformly at random and apply it with the probability
    /// given by `policy`. Returns `Exhausted` if no legal trade exists.
    pub fn iterate<P, R>(&mut self, policy: &P, rng: &mut R) -> Result<StepOutcome>
    where
        P: AcceptancePolicy + ?Sized,
        R: Rng + ?Sized,
    {
        let Some(&trade) = self.trades.choose(rng) else { return Ok(StepOutcome::Exhausted) };

        let probability = policy.acceptance_probability(&self.propose(trade));
        if rng.random::<f64>() < probability {
            self.make_trade(trade)?;
            Ok(StepOutcome::Accepted { trade, probability })
        } else {
            Ok(StepOutcome::Rejected { trade, probability })
        }
    }

    /// Apply `trade` in place and refresh the trade set for the two touched districts.
    ///
    /// Fails if the trade does not refer to the current districts, or if the
    /// swap would leave either district disconnected (an `InconsistentTradeError`).
    /// On error the configuration is left untouched.
    pub fn make_trade(&mut self, trade: Trade) -> Result<()> {
        let (a, b) = trade.districts;
        let (tile_a, tile_b) = trade.tiles;
        ensure!(a < b && b < self.len(), "[Configuration.make_trade] district indices ({a}, {b}) out of range");
        ensure!(
            self.districts[a].contains(&tile_a) && self.districts[b].contains(&tile_b),
            "[Configuration.make_trade] trade {trade} does not match current districts"
        );

        let swapped_a = self.districts[a].swapped(tile_a, tile_b);
        let swapped_b = self.districts[b].swapped(tile_b, tile_a);
        for (index, district) in [(a, &swapped_a), (b, &swapped_b)] {
            if !district.is_contiguous() {
                return Err(InconsistentTradeError::new(trade, index).into());
            }
        }

        self.districts[a] = swapped_a;
        self.districts[b] = swapped_b;

        tracing::debug!(%trade, "applied trade");
        self.update_trades(&[a, b]);
        Ok(())
    }
}
