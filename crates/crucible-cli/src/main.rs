mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crucible_cli::output::OutputFormat;
use crucible_lib::{Cell, GoalRule, PolicyKind};

use commands::route::{handle_route_command, RouteCommandArgs};
use commands::solve::{handle_solve_command, SolveCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Minimum heat-loss routing through cost grids")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Minimum heat loss corner to corner under both movement policies.
    Solve {
        /// Grid file; reads stdin when omitted or `-`.
        input: Option<PathBuf>,
        /// How the goal cell is accepted.
        #[arg(long, value_enum, default_value_t = GoalRuleArg::Position)]
        goal_rule: GoalRuleArg,
        #[command(flatten)]
        budget: BudgetArgs,
    },
    /// Minimum heat loss between two cells under a single policy.
    Route {
        /// Grid file; reads stdin when omitted or `-`.
        input: Option<PathBuf>,
        /// Movement policy.
        #[arg(long, value_enum, default_value_t = PolicyArg::Bounded)]
        policy: PolicyArg,
        /// Start cell as `row,col` (defaults to the top-left cell).
        #[arg(long = "from")]
        from: Option<Cell>,
        /// Goal cell as `row,col` (defaults to the bottom-right cell).
        #[arg(long = "to")]
        to: Option<Cell>,
        /// Minimum straight run before turning (committed policy only).
        #[arg(long)]
        min_run: Option<u32>,
        /// Maximum straight run before a turn is forced.
        #[arg(long)]
        max_run: Option<u32>,
        /// How the goal cell is accepted.
        #[arg(long, value_enum, default_value_t = GoalRuleArg::Position)]
        goal_rule: GoalRuleArg,
        #[command(flatten)]
        budget: BudgetArgs,
    },
}

/// Per-search resource budget.
#[derive(Args, Debug, Clone, Copy)]
struct BudgetArgs {
    /// Maximum number of states to expand (env: CRUCIBLE_MAX_EXPANSIONS).
    #[arg(long)]
    max_expansions: Option<u64>,
    /// Wall-clock limit in milliseconds (env: CRUCIBLE_TIME_LIMIT_MS).
    #[arg(long)]
    time_limit_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// At most three straight steps, never reverse.
    Bounded,
    /// Four to ten straight steps once moving, never reverse.
    Committed,
}

impl From<PolicyArg> for PolicyKind {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Bounded => PolicyKind::Bounded,
            PolicyArg::Committed => PolicyKind::Committed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GoalRuleArg {
    /// Reaching the cell is enough.
    Position,
    /// The mover must also be allowed to stop on the cell.
    Stoppable,
}

impl From<GoalRuleArg> for GoalRule {
    fn from(value: GoalRuleArg) -> Self {
        match value {
            GoalRuleArg::Position => GoalRule::Position,
            GoalRuleArg::Stoppable => GoalRule::Stoppable,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            input,
            goal_rule,
            budget,
        } => handle_solve_command(
            &SolveCommandArgs {
                input,
                goal_rule: goal_rule.into(),
                max_expansions: budget.max_expansions,
                time_limit_ms: budget.time_limit_ms,
            },
            cli.format,
        ),
        Command::Route {
            input,
            policy,
            from,
            to,
            min_run,
            max_run,
            goal_rule,
            budget,
        } => handle_route_command(
            &RouteCommandArgs {
                input,
                policy: policy.into(),
                from,
                to,
                min_run,
                max_run,
                goal_rule: goal_rule.into(),
                max_expansions: budget.max_expansions,
                time_limit_ms: budget.time_limit_ms,
            },
            cli.format,
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
