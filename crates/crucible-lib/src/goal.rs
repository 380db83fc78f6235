use std::fmt;

use serde::Serialize;

use crate::grid::Cell;
use crate::policy::ConstraintPolicy;
use crate::state::State;

/// How a goal state is recognised once its cell is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalRule {
    /// Arriving on the target cell is enough, whatever the heading or run.
    #[default]
    Position,
    /// The mover must also be allowed to stop there, i.e. its run must be at
    /// least the policy's minimum stopping run.
    Stoppable,
}

impl fmt::Display for GoalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            GoalRule::Position => "position",
            GoalRule::Stoppable => "stoppable",
        };
        f.write_str(value)
    }
}

/// Termination test handed to the search for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub cell: Cell,
    pub rule: GoalRule,
}

impl Goal {
    pub fn new(cell: Cell, rule: GoalRule) -> Self {
        Self { cell, rule }
    }

    /// Position-only goal on `cell`.
    pub fn at(cell: Cell) -> Self {
        Self::new(cell, GoalRule::Position)
    }

    pub fn is_reached(&self, state: &State, policy: &dyn ConstraintPolicy) -> bool {
        if state.cell != self.cell {
            return false;
        }
        match self.rule {
            GoalRule::Position => true,
            GoalRule::Stoppable => state.run >= policy.min_stop_run(),
        }
    }
}
