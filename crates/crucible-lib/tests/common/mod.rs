#![allow(dead_code)]

use std::path::PathBuf;

use crucible_lib::{load_grid, CostGrid};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn reference_grid() -> CostGrid {
    load_grid(&fixtures_dir().join("reference_grid.txt")).expect("reference grid loads")
}

pub fn long_corridor() -> CostGrid {
    load_grid(&fixtures_dir().join("long_corridor.txt")).expect("corridor grid loads")
}

/// Square grid of `size` x `size` cells that all cost `cost`.
pub fn uniform_grid(size: usize, cost: u32) -> CostGrid {
    CostGrid::from_rows(vec![vec![cost; size]; size]).expect("uniform grid is rectangular")
}
