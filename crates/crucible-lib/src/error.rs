use std::time::Duration;

use thiserror::Error;

use crate::grid::Cell;

/// Convenient result alias for the crucible library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// An unreachable goal is not an error; planners report it as an absent cost.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a grid has no rows or a row has no cells.
    #[error("cost grid is empty")]
    EmptyGrid,

    /// Raised when the grid text contains something other than a digit.
    #[error("invalid cell {found:?} at line {line}, column {column}; expected a digit 0-9")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },

    /// Raised when a grid row does not match the width of the first row.
    #[error("row at line {line} has {found} cells but the grid is {expected} wide")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when a start or goal cell lies outside the grid.
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    CellOutOfBounds { cell: Cell, rows: usize, cols: usize },

    /// Raised when a neighbour function produces a negative edge weight.
    #[error("edge weight {weight} is negative; search requires non-negative weights")]
    NegativeWeight { weight: i64 },

    /// Raised when a path cost no longer fits in the cost type.
    #[error("path cost overflow adding edge weight {weight} to {cost}")]
    CostOverflow { cost: i64, weight: i64 },

    /// Raised when the search is seeded with a state that already carries a run.
    #[error("start state must have a run length of 0, got {run}")]
    InvalidStartState { run: u32 },

    /// Raised when run limits cannot describe a usable movement policy.
    #[error("invalid movement policy: {message}")]
    InvalidPolicy { message: String },

    /// Raised when the search expands more states than its budget allows.
    #[error("search budget exhausted after expanding {expanded} states")]
    SearchBudgetExhausted { expanded: u64 },

    /// Raised when the search runs past its wall-clock limit.
    #[error("search exceeded time limit of {limit:?} after expanding {expanded} states")]
    SearchTimedOut { expanded: u64, limit: Duration },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error comes from the grid text rather than from search.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyGrid | Error::InvalidCell { .. } | Error::RaggedRow { .. }
        )
    }

    /// Whether the error is a resource limit rather than a contract violation.
    pub fn is_resource_limit(&self) -> bool {
        matches!(
            self,
            Error::SearchBudgetExhausted { .. }
                | Error::SearchTimedOut { .. }
                | Error::CostOverflow { .. }
        )
    }
}
