//! Route planning over a cost grid.
//!
//! This module ties the pieces together:
//! - [`RouteRequest`] - start, goal, movement policy and search budget
//! - [`RoutePlan`] - minimum heat loss (or unreachable) plus search counters
//! - [`plan_route`] - validate a request and run one search
//! - [`plan_both`] - run the bounded and committed policies side by side
//!
//! # Example
//!
//! ```
//! use crucible_lib::{plan_route, CostGrid, PolicyKind, RouteRequest};
//!
//! let grid = CostGrid::parse("19\n11").unwrap();
//! let request = RouteRequest::corner_to_corner(&grid, PolicyKind::Bounded);
//! let plan = plan_route(&grid, &request).unwrap();
//! assert_eq!(plan.heat_loss, Some(2));
//! ```

use std::thread;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::goal::{Goal, GoalRule};
use crate::grid::{Cell, CostGrid};
use crate::neighbors::NeighbourExpander;
use crate::output::HeatLossReport;
use crate::policy::{select_policy, PolicyKind, RunLimits};
use crate::search::{dijkstra, Cost, SearchLimits, SearchOutcome, SearchStats};
use crate::state::State;

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: Cell,
    pub goal: Cell,
    pub policy: PolicyKind,
    pub limits: RunLimits,
    pub goal_rule: GoalRule,
    pub search: SearchLimits,
}

impl RouteRequest {
    /// From the top-left to the bottom-right cell with default run limits.
    pub fn corner_to_corner(grid: &CostGrid, policy: PolicyKind) -> Self {
        Self {
            start: grid.top_left(),
            goal: grid.bottom_right(),
            policy,
            limits: RunLimits::default(),
            goal_rule: GoalRule::default(),
            search: SearchLimits::default(),
        }
    }

    /// Switch policy. Run-limit overrides belong to a policy and are cleared.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        if policy != self.policy {
            self.policy = policy;
            self.limits = RunLimits::default();
        }
        self
    }

    pub fn with_limits(mut self, limits: RunLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_goal_rule(mut self, rule: GoalRule) -> Self {
        self.goal_rule = rule;
        self
    }

    pub fn with_search_limits(mut self, search: SearchLimits) -> Self {
        self.search = search;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub policy: PolicyKind,
    pub start: Cell,
    pub goal: Cell,
    pub goal_rule: GoalRule,
    /// Minimum total heat loss, `None` when no legal route exists.
    pub heat_loss: Option<Cost>,
    pub stats: SearchStats,
}

impl RoutePlan {
    pub fn is_reachable(&self) -> bool {
        self.heat_loss.is_some()
    }
}

/// Run the search from `start` over the grid behind `expander`.
///
/// `start` must carry no run yet; the goal test is evaluated against the
/// expander's policy.
pub fn search_from(
    start: State,
    expander: NeighbourExpander<'_>,
    goal: Goal,
    limits: &SearchLimits,
) -> Result<SearchOutcome> {
    if start.run != 0 {
        return Err(Error::InvalidStartState { run: start.run });
    }
    let policy = expander.policy();
    dijkstra(
        start,
        |state: &State| expander.expand(state),
        |state: &State| goal.is_reached(state, policy),
        limits,
    )
}

/// Compute the minimum heat loss for a request.
///
/// All validation happens before the search starts: out-of-bounds cells and
/// unusable run limits are rejected without expanding a single state.
pub fn plan_route(grid: &CostGrid, request: &RouteRequest) -> Result<RoutePlan> {
    grid.ensure_contains(request.start)?;
    grid.ensure_contains(request.goal)?;
    let policy = select_policy(request.policy, request.limits)?;

    let expander = NeighbourExpander::new(grid, policy.as_ref());
    let goal = Goal::new(request.goal, request.goal_rule);
    let outcome = search_from(State::start(request.start), expander, goal, &request.search)?;

    match outcome.cost {
        Some(cost) => tracing::info!(
            "{} policy: heat loss {} from {} to {} ({} states expanded)",
            request.policy,
            cost,
            request.start,
            request.goal,
            outcome.stats.expanded
        ),
        None => tracing::info!(
            "{} policy: {} unreachable from {} ({} states expanded)",
            request.policy,
            request.goal,
            request.start,
            outcome.stats.expanded
        ),
    }

    Ok(RoutePlan {
        policy: request.policy,
        start: request.start,
        goal: request.goal,
        goal_rule: request.goal_rule,
        heat_loss: outcome.cost,
        stats: outcome.stats,
    })
}

/// Plan the same request under both policies concurrently.
///
/// The grid is shared read-only between the two searches. Each policy runs
/// with its default run limits; `template.limits` is ignored.
pub fn plan_both(grid: &CostGrid, template: &RouteRequest) -> Result<HeatLossReport> {
    let bounded_request = template
        .clone()
        .with_policy(PolicyKind::Bounded)
        .with_limits(RunLimits::default());
    let committed_request = template
        .clone()
        .with_policy(PolicyKind::Committed)
        .with_limits(RunLimits::default());

    let (bounded, committed) = thread::scope(|scope| {
        let bounded = scope.spawn(|| plan_route(grid, &bounded_request));
        let committed = plan_route(grid, &committed_request);
        let bounded = match bounded.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        };
        (bounded, committed)
    });

    Ok(HeatLossReport::new(grid, bounded?, committed?))
}
