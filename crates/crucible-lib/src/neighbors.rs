use crate::grid::CostGrid;
use crate::policy::ConstraintPolicy;
use crate::search::Cost;
use crate::state::State;

/// Lazily produces the outgoing edges of a state from a grid and a policy.
///
/// The weight of an edge is the entry cost of the destination cell; the
/// start cell is never charged.
#[derive(Clone, Copy)]
pub struct NeighbourExpander<'a> {
    grid: &'a CostGrid,
    policy: &'a dyn ConstraintPolicy,
}

impl<'a> NeighbourExpander<'a> {
    pub fn new(grid: &'a CostGrid, policy: &'a dyn ConstraintPolicy) -> Self {
        Self { grid, policy }
    }

    pub fn policy(&self) -> &'a dyn ConstraintPolicy {
        self.policy
    }

    /// `(weight, next state)` for every legal, in-bounds move from `state`.
    pub fn expand(&self, state: &State) -> Vec<(Cost, State)> {
        let allowed = self.policy.allowed_directions(state);
        let mut edges = Vec::with_capacity(allowed.len());
        for direction in allowed.iter() {
            let Some(cell) = self.grid.step(state.cell, direction) else {
                continue;
            };
            let Some(cost) = self.grid.cost(cell) else {
                continue;
            };
            edges.push((Cost::from(cost), state.advance(direction, cell)));
        }
        edges
    }
}
