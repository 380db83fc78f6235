//! Solve command handler: minimum heat loss under both policies.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crucible_lib::{plan_both, GoalRule, PolicyKind, RouteRequest};

use crucible_cli::config::resolve_search_limits;
use crucible_cli::input::read_grid;
use crucible_cli::output::OutputFormat;

/// Arguments for the solve command.
#[derive(Debug, Clone)]
pub struct SolveCommandArgs {
    /// Grid file; stdin when absent or `-`.
    pub input: Option<PathBuf>,
    /// How the goal cell is accepted by both searches.
    pub goal_rule: GoalRule,
    /// Maximum number of states to expand per search.
    pub max_expansions: Option<u64>,
    /// Wall-clock limit per search in milliseconds.
    pub time_limit_ms: Option<u64>,
}

/// Handle the solve subcommand.
///
/// Runs the bounded and committed policies from the top-left to the
/// bottom-right cell and prints both answers.
pub fn handle_solve_command(args: &SolveCommandArgs, format: OutputFormat) -> Result<()> {
    let grid = read_grid(args.input.as_deref())?;
    let limits = resolve_search_limits(args.max_expansions, args.time_limit_ms)?;

    let template = RouteRequest::corner_to_corner(&grid, PolicyKind::Bounded)
        .with_goal_rule(args.goal_rule)
        .with_search_limits(limits);

    tracing::debug!("solving {}x{} grid", grid.rows(), grid.cols());
    let report = plan_both(&grid, &template).context("heat-loss search failed")?;

    format
        .render_report(&report)
        .context("failed to write report")
}
