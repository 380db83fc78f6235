//! Route command handler for a single policy and arbitrary endpoints.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crucible_lib::{
    plan_route, Cell, CostGrid, GoalRule, PolicyKind, RouteRequest, RouteSummary, RunLimits,
};

use crucible_cli::config::resolve_search_limits;
use crucible_cli::input::read_grid;
use crucible_cli::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Grid file; stdin when absent or `-`.
    pub input: Option<PathBuf>,
    /// Movement policy.
    pub policy: PolicyKind,
    /// Start cell; top-left when absent.
    pub from: Option<Cell>,
    /// Goal cell; bottom-right when absent.
    pub to: Option<Cell>,
    /// Override for the committed policy's minimum run.
    pub min_run: Option<u32>,
    /// Override for the policy's maximum run.
    pub max_run: Option<u32>,
    /// How the goal state is recognised.
    pub goal_rule: GoalRule,
    /// Maximum number of states to expand.
    pub max_expansions: Option<u64>,
    /// Wall-clock limit in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest once the grid is known.
    pub fn to_request(&self, grid: &CostGrid) -> Result<RouteRequest> {
        let mut request = RouteRequest::corner_to_corner(grid, self.policy)
            .with_limits(RunLimits {
                min_run: self.min_run,
                max_run: self.max_run,
            })
            .with_goal_rule(self.goal_rule)
            .with_search_limits(resolve_search_limits(
                self.max_expansions,
                self.time_limit_ms,
            )?);
        if let Some(from) = self.from {
            request.start = from;
        }
        if let Some(to) = self.to {
            request.goal = to;
        }
        Ok(request)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(args: &RouteCommandArgs, format: OutputFormat) -> Result<()> {
    let grid = read_grid(args.input.as_deref())?;
    let request = args.to_request(&grid)?;

    let plan = plan_route(&grid, &request).with_context(|| {
        format!(
            "{} route from {} to {} failed",
            request.policy, request.start, request.goal
        )
    })?;

    let summary = RouteSummary::from_plan(&grid, plan);
    format
        .render_route(&summary)
        .context("failed to write route summary")
}
