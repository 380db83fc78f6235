//! Crucible library entry points.
//!
//! This crate computes minimum heat-loss routes through a cost grid where the
//! legality of each step depends on recent movement. It exposes the grid
//! parser, the movement policies, a generic Dijkstra engine over lazily
//! expanded states, and route planning helpers. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod goal;
pub mod grid;
pub mod neighbors;
pub mod output;
pub mod policy;
pub mod routing;
pub mod search;
pub mod state;

pub use error::{Error, Result};
pub use goal::{Goal, GoalRule};
pub use grid::{load_grid, Cell, CostGrid};
pub use neighbors::NeighbourExpander;
pub use output::{GridDimensions, HeatLossReport, RenderMode, RouteSummary};
pub use policy::{
    select_policy, BoundedRun, CommittedRun, ConstraintPolicy, PolicyKind, RunLimits,
};
pub use routing::{plan_both, plan_route, search_from, RoutePlan, RouteRequest};
pub use search::{dijkstra, shortest_cost, Cost, SearchLimits, SearchOutcome, SearchStats};
pub use state::{Direction, DirectionSet, State};
