mod builtin;
mod file;

pub use builtin::{classic, express, snake_districts};

use std::sync::Arc;

use anyhow::Result;

use crate::{configuration::Configuration, district::District, grid::VoterDistribution};

/// A voter grid together with an initial partition and an optional win target.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: String,
    pub voters: Arc<VoterDistribution>,
    pub districts: Vec<District>,
    pub stop_at: Option<usize>,
}

impl Scenario {
    /// Build the validated starting configuration for this scenario.
    pub fn configuration(&self) -> Result<Configuration> {
        Configuration::new(self.districts.clone(), Arc::clone(&self.voters))
    }
}
