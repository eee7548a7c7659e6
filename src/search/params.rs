use anyhow::{Result, ensure};

/// Parameters for one Monte Carlo search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Iteration budget (> 0).
    pub max_iter: usize,
    /// Stop as soon as the best objective reaches this many districts.
    pub stop_at: Option<usize>,
    /// Emit periodic progress reports.
    pub verbose: bool,
    /// Report every this many iterations; defaults to 1% of `max_iter`.
    pub log_every: Option<usize>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { max_iter: 10_000, stop_at: None, verbose: false, log_every: None }
    }
}

impl SearchParams {
    pub fn new(max_iter: usize) -> Self {
        Self { max_iter, ..Self::default() }
    }

    pub fn with_stop_at(mut self, stop_at: usize) -> Self {
        self.stop_at = Some(stop_at);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = Some(log_every);
        self
    }

    /// Reporting interval actually used.
    #[inline]
    pub fn report_interval(&self) -> usize {
        self.log_every.unwrap_or(self.max_iter / 100).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.max_iter > 0, "[SearchParams] max_iter must be positive");
        ensure!(self.log_every != Some(0), "[SearchParams] log_every must be positive");
        Ok(())
    }
}
