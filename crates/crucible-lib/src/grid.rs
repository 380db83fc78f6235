//! Rectangular cost grid and its text parser.
//!
//! A grid is written one row per line, one decimal digit per cell. The
//! parsed grid is immutable; searches borrow it read-only, so one grid can
//! back several concurrent searches.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::state::Direction;

/// Grid coordinate, `row` counted from the top and `col` from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = String;

    /// Parse `row,col` (surrounding parentheses and spaces are ignored).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = trimmed
            .split_once(',')
            .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
        let row = row
            .trim()
            .parse()
            .map_err(|err| format!("invalid row in `{s}`: {err}"))?;
        let col = col
            .trim()
            .parse()
            .map_err(|err| format!("invalid column in `{s}`: {err}"))?;
        Ok(Cell { row, col })
    }
}

/// Immutable rectangular matrix of non-negative entry costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl CostGrid {
    /// Build a grid from explicit rows.
    ///
    /// Fails with [`Error::EmptyGrid`] when there are no cells and with
    /// [`Error::RaggedRow`] when the rows are not all the same length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let Some(width) = rows.first().map(Vec::len) else {
            return Err(Error::EmptyGrid);
        };
        if width == 0 {
            return Err(Error::EmptyGrid);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRow {
                    line: index + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Parse the textual digit grid.
    ///
    /// Blank lines are skipped and line numbers in errors refer to the
    /// original input.
    pub fn parse(input: &str) -> Result<Self> {
        let mut rows: Vec<Vec<u32>> = Vec::new();
        let mut width = None;

        for (index, raw) in input.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let row = line
                .chars()
                .enumerate()
                .map(|(column, ch)| {
                    ch.to_digit(10).ok_or(Error::InvalidCell {
                        line: line_no,
                        column: column + 1,
                        found: ch,
                    })
                })
                .collect::<Result<Vec<u32>>>()?;

            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(Error::RaggedRow {
                        line: line_no,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            rows.push(row);
        }

        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Entry cost of `cell`, or `None` when it lies outside the grid.
    pub fn cost(&self, cell: Cell) -> Option<u32> {
        if self.contains(cell) {
            Some(self.cells[cell.row * self.cols + cell.col])
        } else {
            None
        }
    }

    /// Move one cell in `direction`, returning `None` when that leaves the grid.
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dr, dc) = direction.offset();
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        let next = Cell { row, col };
        self.contains(next).then_some(next)
    }

    pub fn top_left(&self) -> Cell {
        Cell::new(0, 0)
    }

    pub fn bottom_right(&self) -> Cell {
        Cell::new(self.rows - 1, self.cols - 1)
    }

    /// Cheapest entry cost anywhere in the grid.
    pub fn min_cost(&self) -> u32 {
        self.cells.iter().copied().min().unwrap_or(0)
    }

    /// Fail with [`Error::CellOutOfBounds`] unless `cell` lies inside the grid.
    pub fn ensure_contains(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(Error::CellOutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl FromStr for CostGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Read and parse a grid file.
pub fn load_grid(path: &Path) -> Result<CostGrid> {
    let text = fs::read_to_string(path)?;
    let grid = CostGrid::parse(&text)?;
    tracing::debug!(
        "loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}
