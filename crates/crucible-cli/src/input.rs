//! Grid input from a file or standard input.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use crucible_lib::{load_grid, CostGrid};

/// Read the grid from `path`, or from stdin when `path` is absent or `-`.
pub fn read_grid(path: Option<&Path>) -> Result<CostGrid> {
    match path {
        Some(path) if path != Path::new("-") => load_grid(path)
            .with_context(|| format!("failed to load grid from {}", path.display())),
        _ => read_grid_from(io::stdin().lock()).context("failed to read grid from stdin"),
    }
}

/// Parse a grid from any reader.
pub fn read_grid_from<R: Read>(mut reader: R) -> Result<CostGrid> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("failed to read grid text")?;
    let grid = CostGrid::parse(&text)?;
    Ok(grid)
}
