use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{district::District, grid::{Tile, VoterDistribution}, scenario::Scenario};

/// On-disk scenario layout.
#[derive(Debug, Serialize, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    name: Option<String>,
    voters: Vec<Vec<u8>>,
    districts: Vec<Vec<Tile>>,
    #[serde(default)]
    stop_at: Option<usize>,
}

impl Scenario {
    /// Parse a scenario from JSON:
    /// `{"voters": [[0, 1, ...], ...], "districts": [[[row, col], ...], ...], "stop_at": 3}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ScenarioFile = serde_json::from_str(json).context("[Scenario.from_json] malformed scenario")?;
        let voters = VoterDistribution::from_rows(&file.voters)?;

        Ok(Self {
            name: file.name.unwrap_or_else(|| "custom".into()),
            voters: Arc::new(voters),
            districts: file.districts.into_iter().map(District::new).collect(),
            stop_at: file.stop_at,
        })
    }

    /// Read a JSON scenario file.
    pub fn read_json(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("[Scenario.read_json] failed to read {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Serialize this scenario in the same layout `from_json` reads.
    pub fn to_json(&self) -> Result<String> {
        let voters = self.voters.as_array();
        let file = ScenarioFile {
            name: Some(self.name.clone()),
            voters: voters.rows().into_iter().map(|row| row.to_vec()).collect(),
            districts: self.districts.iter().map(District::sorted_tiles).collect(),
            stop_at: self.stop_at,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}
