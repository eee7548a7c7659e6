use crate::acceptance::{AcceptancePolicy, TradeProposal};

/// Geometric cooling schedule for temperature `T`.
///
/// T_k = T₀ * α^k, where α = (T_f / T₀)^(1/N), so that T_0 = T₀ and T_N = T_f.
/// Iterations past `max_iter` stay at `final_temp`.
fn temp_geometric(initial_temp: f64, final_temp: f64, max_iter: usize, iter: usize) -> f64 {
    debug_assert!(initial_temp > 0.0 && final_temp > 0.0, "temperatures must be > 0");

    if max_iter == 0 || iter >= max_iter { return final_temp }
    let alpha = (final_temp / initial_temp).powf(1.0 / max_iter as f64);
    let temp = initial_temp * alpha.powf(iter as f64);

    if final_temp < initial_temp { temp.max(final_temp) } else { temp.min(final_temp) }
}

/// Simulated-annealing rule over the win-or-tie count of the two traded districts.
///
/// Non-lowering trades are always accepted; a trade that loses `d` wins is
/// accepted with probability `exp(-d / T)`, where `T` cools geometrically from
/// `initial_temp` to `final_temp` over `max_iter` iterations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Annealing {
    initial_temp: f64,
    final_temp: f64,
    max_iter: usize,
    temperature: f64,
}

impl Annealing {
    pub fn new(initial_temp: f64, final_temp: f64, max_iter: usize) -> Self {
        assert!(initial_temp > 0.0 && final_temp > 0.0, "temperatures must be > 0");
        Self { initial_temp, final_temp, max_iter, temperature: initial_temp }
    }

    /// Current temperature.
    #[inline] pub fn temperature(&self) -> f64 { self.temperature }
}

impl AcceptancePolicy for Annealing {
    fn name(&self) -> &str { "annealing" }

    fn acceptance_probability(&self, proposal: &TradeProposal<'_>) -> f64 {
        let delta = proposal.wins_delta();
        if delta >= 0 { 1.0 } else { (delta as f64 / self.temperature).exp() }
    }

    fn on_iteration(&mut self, iter: usize) {
        self.temperature = temp_geometric(self.initial_temp, self.final_temp, self.max_iter, iter);
    }
}
