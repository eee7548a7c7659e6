use std::fmt;

use anyhow::Result;
use rand::Rng;

use crate::{
    acceptance::AcceptancePolicy,
    configuration::{Configuration, StepOutcome},
    search::SearchParams,
};

/// Why a search finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The iteration budget ran out.
    Budget,
    /// The best objective reached the configured target.
    Target,
    /// No legal trade was left to draw.
    Exhausted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Budget => write!(f, "iteration budget reached"),
            Self::Target => write!(f, "target reached"),
            Self::Exhausted => write!(f, "no legal trades left"),
        }
    }
}

/// Driver state: running, or done for a given reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Done(StopReason),
}

/// Result of a finished search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Best objective seen.
    pub best_wins: usize,
    /// Snapshot of the configuration that first reached `best_wins`.
    pub best: Configuration,
    /// Iterations performed.
    pub iterations: usize,
    /// Accepted trades among those iterations.
    pub accepted: usize,
    pub stop_reason: StopReason,
}

/// A single Monte Carlo chain over trades, tracking the best configuration seen.
#[derive(Clone, Debug)]
pub struct Search<P: AcceptancePolicy> {
    configuration: Configuration, // Live chain state, mutated in place
    policy: P,
    params: SearchParams,
    best: Configuration,          // Deep copy of the best state so far
    best_wins: usize,
    iterations: usize,
    accepted: usize,
    state: SearchState,
}

impl<P: AcceptancePolicy> Search<P> {
    /// Start a chain at `configuration`, which also becomes the initial best.
    pub fn new(configuration: Configuration, policy: P, params: SearchParams) -> Result<Self> {
        params.validate()?;

        let best_wins = configuration.num_districts_one_win_or_tie();
        let best = configuration.clone();

        Ok(Self {
            configuration,
            policy,
            params,
            best,
            best_wins,
            iterations: 0,
            accepted: 0,
            state: SearchState::Running,
        })
    }

    #[inline] pub fn state(&self) -> SearchState { self.state }

    #[inline] pub fn best_wins(&self) -> usize { self.best_wins }

    #[inline] pub fn best(&self) -> &Configuration { &self.best }

    /// The live configuration, which may have wandered away from the best.
    #[inline] pub fn current(&self) -> &Configuration { &self.configuration }

    #[inline] pub fn iterations(&self) -> usize { self.iterations }

    #[inline] pub fn policy(&self) -> &P { &self.policy }

    /// Advance the chain by one iteration, or finish if a stop condition holds.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SearchState> {
        if let SearchState::Done(_) = self.state { return Ok(self.state) }

        if self.params.stop_at.is_some_and(|target| self.best_wins >= target) {
            return Ok(self.finish(StopReason::Target));
        }
        if self.iterations >= self.params.max_iter {
            return Ok(self.finish(StopReason::Budget));
        }

        self.policy.on_iteration(self.iterations);
        match self.configuration.iterate(&self.policy, rng)? {
            StepOutcome::Exhausted => {
                tracing::warn!(iteration = self.iterations, "no legal trades left; stopping early");
                return Ok(self.finish(StopReason::Exhausted));
            }
            StepOutcome::Accepted { .. } => self.accepted += 1,
            StepOutcome::Rejected { .. } => {}
        }
        self.iterations += 1;

        let wins = self.configuration.num_districts_one_win_or_tie();
        if wins > self.best_wins {
            self.best_wins = wins;
            self.best = self.configuration.clone();
            tracing::debug!(iteration = self.iterations, best = wins, "new best configuration");
        }

        if self.params.verbose && self.iterations % self.params.report_interval() == 0 {
            tracing::info!(
                iteration = self.iterations,
                current = wins,
                best = self.best_wins,
                "{} iterations completed",
                self.iterations,
            );
        }

        Ok(self.state)
    }

    /// Run until done and return the best configuration found.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<SearchOutcome> {
        tracing::info!(
            policy = self.policy.name(),
            districts = self.configuration.len(),
            trades = self.configuration.trades().len(),
            initial = self.best_wins,
            max_iter = self.params.max_iter,
            "starting search"
        );

        while self.step(rng)? == SearchState::Running {}

        Ok(self.into_outcome())
    }

    /// Consume the driver, yielding its best result so far.
    pub fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            best_wins: self.best_wins,
            best: self.best,
            iterations: self.iterations,
            accepted: self.accepted,
            stop_reason: match self.state {
                SearchState::Done(reason) => reason,
                SearchState::Running => StopReason::Budget,
            },
        }
    }

    fn finish(&mut self, reason: StopReason) -> SearchState {
        self.state = SearchState::Done(reason);
        tracing::info!(
            iterations = self.iterations,
            accepted = self.accepted,
            best = self.best_wins,
            "search finished: {reason}"
        );
        self.state
    }
}

/// Run a single chain from `configuration` and return the best configuration found.
pub fn search_configurations<P, R>(
    configuration: Configuration,
    policy: P,
    params: &SearchParams,
    rng: &mut R,
) -> Result<SearchOutcome>
where
    P: AcceptancePolicy,
    R: Rng + ?Sized,
{
    Search::new(configuration, policy, params.clone())?.run(rng)
}
