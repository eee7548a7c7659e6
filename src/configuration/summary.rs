use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{configuration::Configuration, grid::Tile};

/// Plain snapshot of a configuration, for callers that persist or display results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationSummary {
    pub wins: usize,
    pub districts: Vec<Vec<Tile>>,
    pub assignments: Vec<Vec<usize>>,
}

impl Configuration {
    /// Snapshot the current objective, district tiles (sorted) and assignment grid.
    pub fn summary(&self) -> ConfigurationSummary {
        ConfigurationSummary {
            wins: self.num_districts_one_win_or_tie(),
            districts: self.districts.iter().map(|district| district.sorted_tiles()).collect(),
            assignments: self.assignments().rows().into_iter().map(|row| row.to_vec()).collect(),
        }
    }
}

/// Label for district `index`: `a`..`z`, then `A`..`Z`, then `#`.
fn district_label(index: usize) -> char {
    match index {
        0..26 => (b'a' + index as u8) as char,
        26..52 => (b'A' + (index - 26) as u8) as char,
        _ => '#',
    }
}

/// Grid rendering: one label per tile, followed by `*` where the target party holds the tile.
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assignments = self.assignments();
        for (row, labels) in assignments.rows().into_iter().enumerate() {
            let line = labels.iter().enumerate()
                .map(|(col, &index)| {
                    let marker = if self.voters.vote(Tile::new(row, col)) == 1 { '*' } else { ' ' };
                    format!("{}{}", district_label(index), marker)
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
