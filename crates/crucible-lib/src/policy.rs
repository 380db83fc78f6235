//! Movement constraint policies implementing the Strategy pattern.
//!
//! A policy decides which directions a state may take on its next step.
//! Policies are pure: they hold only their run limits and never observe the
//! grid, so the neighbour expander and search engine stay generic.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::state::{DirectionSet, State};

/// Longest straight run allowed by [`BoundedRun`] unless overridden.
pub const DEFAULT_BOUNDED_MAX_RUN: u32 = 3;
/// Shortest committed run required by [`CommittedRun`] unless overridden.
pub const DEFAULT_COMMITTED_MIN_RUN: u32 = 4;
/// Longest straight run allowed by [`CommittedRun`] unless overridden.
pub const DEFAULT_COMMITTED_MAX_RUN: u32 = 10;

/// Supported movement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Turn or go straight, never more than `max_run` steps in a row.
    #[default]
    Bounded,
    /// Once moving, keep going for at least `min_run` steps, at most `max_run`.
    Committed,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PolicyKind::Bounded => "bounded",
            PolicyKind::Committed => "committed",
        };
        f.write_str(value)
    }
}

/// Optional overrides for a policy's run limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunLimits {
    pub min_run: Option<u32>,
    pub max_run: Option<u32>,
}

/// Trait for movement constraint strategies.
pub trait ConstraintPolicy: Send + Sync {
    /// The policy identifier.
    fn kind(&self) -> PolicyKind;

    /// Directions that may legally be taken from `state` on the next step.
    fn allowed_directions(&self, state: &State) -> DirectionSet;

    /// Shortest run after which the mover may come to rest.
    fn min_stop_run(&self) -> u32 {
        0
    }
}

/// Any direction but backwards; a turn is forced after `max_run` straight steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedRun {
    max_run: u32,
}

impl BoundedRun {
    pub fn new(max_run: u32) -> Result<Self> {
        if max_run == 0 {
            return Err(Error::InvalidPolicy {
                message: "bounded policy needs max_run of at least 1".to_string(),
            });
        }
        Ok(Self { max_run })
    }
}

impl Default for BoundedRun {
    fn default() -> Self {
        Self {
            max_run: DEFAULT_BOUNDED_MAX_RUN,
        }
    }
}

impl ConstraintPolicy for BoundedRun {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Bounded
    }

    fn allowed_directions(&self, state: &State) -> DirectionSet {
        let Some(heading) = state.heading else {
            return DirectionSet::all();
        };
        let allowed = DirectionSet::all().without(heading.reverse());
        if state.run >= self.max_run {
            allowed.without(heading)
        } else {
            allowed
        }
    }
}

/// Keep going for at least `min_run` steps once moving, never more than `max_run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedRun {
    min_run: u32,
    max_run: u32,
}

impl CommittedRun {
    pub fn new(min_run: u32, max_run: u32) -> Result<Self> {
        if max_run == 0 {
            return Err(Error::InvalidPolicy {
                message: "committed policy needs max_run of at least 1".to_string(),
            });
        }
        if min_run > max_run {
            return Err(Error::InvalidPolicy {
                message: format!("min_run {min_run} exceeds max_run {max_run}"),
            });
        }
        Ok(Self { min_run, max_run })
    }
}

impl Default for CommittedRun {
    fn default() -> Self {
        Self {
            min_run: DEFAULT_COMMITTED_MIN_RUN,
            max_run: DEFAULT_COMMITTED_MAX_RUN,
        }
    }
}

impl ConstraintPolicy for CommittedRun {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Committed
    }

    fn allowed_directions(&self, state: &State) -> DirectionSet {
        let Some(heading) = state.heading else {
            return DirectionSet::all();
        };
        if state.run > 0 && state.run < self.min_run {
            return DirectionSet::only(heading);
        }
        let allowed = DirectionSet::all().without(heading.reverse());
        if state.run >= self.max_run {
            allowed.without(heading)
        } else {
            allowed
        }
    }

    fn min_stop_run(&self) -> u32 {
        self.min_run
    }
}

/// Build the policy for `kind`, applying any run-limit overrides.
pub fn select_policy(kind: PolicyKind, limits: RunLimits) -> Result<Box<dyn ConstraintPolicy>> {
    match kind {
        PolicyKind::Bounded => {
            if limits.min_run.is_some() {
                return Err(Error::InvalidPolicy {
                    message: "bounded policy does not take a min_run".to_string(),
                });
            }
            let max_run = limits.max_run.unwrap_or(DEFAULT_BOUNDED_MAX_RUN);
            Ok(Box::new(BoundedRun::new(max_run)?))
        }
        PolicyKind::Committed => {
            let min_run = limits.min_run.unwrap_or(DEFAULT_COMMITTED_MIN_RUN);
            let max_run = limits.max_run.unwrap_or(DEFAULT_COMMITTED_MAX_RUN);
            Ok(Box::new(CommittedRun::new(min_run, max_run)?))
        }
    }
}
