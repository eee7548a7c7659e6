use std::sync::Arc;

use anyhow::{Result, ensure};

use crate::{district::District, grid::{Tile, VoterDistribution}, scenario::Scenario};

/// Cut a `rows x cols` grid into districts of `size` tiles along a boustrophedon path.
///
/// Even rows run left to right and odd rows right to left, so every chunk of
/// the path is contiguous.
pub fn snake_districts(rows: usize, cols: usize, size: usize) -> Result<Vec<District>> {
    ensure!(rows > 0 && cols > 0, "[snake_districts] grid must be non-empty");
    ensure!(size > 0, "[snake_districts] district size must be positive");
    ensure!(
        (rows * cols) % size == 0,
        "[snake_districts] {rows}x{cols} grid does not split into districts of {size}"
    );

    let path = (0..rows).flat_map(|row| {
        let tiles = (0..cols).map(move |col| Tile::new(row, col));
        if row % 2 == 0 { tiles.collect::<Vec<_>>() } else { tiles.rev().collect() }
    }).collect::<Vec<_>>();

    Ok(path.chunks(size).map(|chunk| chunk.iter().copied().collect()).collect())
}

/// 5x5 puzzle: five row districts to start, find a plan where the target party
/// wins or ties three of five.
pub fn express() -> Result<Scenario> {
    let voters = VoterDistribution::from_rows(&[
        vec![1, 1, 0, 0, 0],
        vec![0, 1, 1, 0, 1],
        vec![1, 0, 0, 0, 0],
        vec![0, 0, 1, 1, 0],
        vec![0, 0, 0, 0, 1],
    ])?;
    let districts = (0..5)
        .map(|row| (0..5).map(|col| Tile::new(row, col)).collect())
        .collect();

    Ok(Scenario { name: "express".into(), voters: Arc::new(voters), districts, stop_at: Some(3) })
}

/// 10x14 puzzle: seven districts of 20 tiles, starting from a snake partition.
pub fn classic() -> Result<Scenario> {
    let voters = VoterDistribution::from_rows(&[
        vec![0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
        vec![0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0],
        vec![1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0],
        vec![0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    ])?;
    let districts = snake_districts(voters.rows(), voters.cols(), 20)?;

    Ok(Scenario { name: "classic".into(), voters: Arc::new(voters), districts, stop_at: None })
}
