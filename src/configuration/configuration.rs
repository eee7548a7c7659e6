use std::sync::Arc;

use anyhow::{Result, bail};
use ndarray::Array2;

use crate::{
    configuration::{ConfigurationError, Trade},
    district::District,
    grid::{Tile, VoterDistribution},
};

/// A full partition of the grid into districts, with its live set of legal trades.
#[derive(Clone, Debug)]
pub struct Configuration {
    pub(super) districts: Vec<District>,    // Ordered districts; indices are stable across trades
    pub(super) voters: Arc<VoterDistribution>, // Shared, read-only voter grid
    pub(super) trades: Vec<Trade>,          // Currently legal trades
}

impl Configuration {
    /// Build a configuration, validating that `districts` partition the grid into
    /// non-empty contiguous pieces, then enumerate every legal trade.
    pub fn new(districts: Vec<District>, voters: impl Into<Arc<VoterDistribution>>) -> Result<Self> {
        let mut configuration = Self { districts, voters: voters.into(), trades: Vec::new() };
        configuration.validate()?;
        configuration.trades = configuration.compute_all_trades();

        tracing::debug!(
            districts = configuration.len(),
            trades = configuration.trades.len(),
            "built configuration"
        );
        Ok(configuration)
    }

    /// Number of districts.
    #[inline] pub fn len(&self) -> usize { self.districts.len() }

    /// Returns true if there are no districts (never the case for a validated configuration).
    #[inline] pub fn is_empty(&self) -> bool { self.districts.is_empty() }

    /// Read-only view of the districts, in their original order.
    #[inline] pub fn districts(&self) -> &[District] { &self.districts }

    /// Get a single district by index.
    #[inline] pub fn district(&self, index: usize) -> &District { &self.districts[index] }

    /// Get the voter distribution this configuration is scored against.
    #[inline] pub fn voters(&self) -> &VoterDistribution { &self.voters }

    /// Get a shared handle to the voter distribution.
    #[inline] pub fn voters_handle(&self) -> Arc<VoterDistribution> { Arc::clone(&self.voters) }

    /// Currently legal trades.
    #[inline] pub fn trades(&self) -> &[Trade] { &self.trades }

    /// Index of the district containing `tile`, if any.
    pub fn district_of(&self, tile: Tile) -> Option<usize> {
        self.districts.iter().position(|district| district.contains(&tile))
    }

    /// District index of every tile, laid out like the voter grid.
    pub fn assignments(&self) -> Array2<usize> {
        let mut assignments = Array2::zeros((self.voters.rows(), self.voters.cols()));
        for (index, district) in self.districts.iter().enumerate() {
            for tile in district {
                assignments[[tile.row, tile.col]] = index;
            }
        }
        assignments
    }

    /// Returns true if the target party wins or ties `district`.
    #[inline]
    pub fn district_won_or_tied(&self, district: &District) -> bool {
        self.voters.wins_or_ties(district.iter())
    }

    /// Objective: number of districts the target party wins or ties.
    pub fn num_districts_one_win_or_tie(&self) -> usize {
        self.districts.iter().filter(|district| self.district_won_or_tied(district)).count()
    }

    /// Check every partition invariant: districts are non-empty, contiguous,
    /// inside the grid, pairwise disjoint, and together cover every tile.
    pub fn validate(&self) -> Result<()> {
        if self.districts.is_empty() { bail!(ConfigurationError::NoDistricts) }

        for (index, district) in self.districts.iter().enumerate() {
            if district.is_empty() { bail!(ConfigurationError::EmptyDistrict { index }) }
            if let Some(&tile) = district.iter().find(|&&tile| !self.voters.in_bounds(tile)) {
                bail!(ConfigurationError::OutOfBounds { index, tile })
            }
            if !district.is_contiguous() { bail!(ConfigurationError::NonContiguous { index }) }
        }

        // Disjointness and coverage in one pass over an owner grid.
        let mut owner: Array2<Option<usize>> = Array2::from_elem((self.voters.rows(), self.voters.cols()), None);
        for (index, district) in self.districts.iter().enumerate() {
            for tile in district.sorted_tiles() {
                let cell = &mut owner[[tile.row, tile.col]];
                if let Some(first) = *cell {
                    bail!(ConfigurationError::Overlap { first, second: index, tile })
                }
                *cell = Some(index);
            }
        }

        if let Some(tile) = self.voters.tiles().find(|tile| owner[[tile.row, tile.col]].is_none()) {
            bail!(ConfigurationError::Uncovered { tile })
        }

        Ok(())
    }
}
