use std::fmt::Write;

use serde::Serialize;

use crate::grid::CostGrid;
use crate::routing::RoutePlan;

/// Presentation style for turning a summary into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Bare answers, one per line.
    #[default]
    Plain,
    /// Answers annotated with policy, endpoints and search counters.
    Detailed,
}

/// Dimensions of the grid a report was computed on.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl From<&CostGrid> for GridDimensions {
    fn from(grid: &CostGrid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }
}

/// Structured result of a single planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub grid: GridDimensions,
    #[serde(flatten)]
    pub plan: RoutePlan,
}

impl RouteSummary {
    pub fn from_plan(grid: &CostGrid, plan: RoutePlan) -> Self {
        Self {
            grid: GridDimensions::from(grid),
            plan,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        let mut buffer = String::new();
        match mode {
            RenderMode::Plain => {
                let _ = writeln!(buffer, "{}", format_heat_loss(&self.plan));
            }
            RenderMode::Detailed => {
                let _ = writeln!(buffer, "Grid: {}x{}", self.grid.rows, self.grid.cols);
                write_plan_details(&mut buffer, &self.plan);
            }
        }
        buffer
    }
}

/// Minimum heat loss of one grid under both movement policies.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeatLossReport {
    pub grid: GridDimensions,
    pub bounded: RoutePlan,
    pub committed: RoutePlan,
}

impl HeatLossReport {
    pub fn new(grid: &CostGrid, bounded: RoutePlan, committed: RoutePlan) -> Self {
        Self {
            grid: GridDimensions::from(grid),
            bounded,
            committed,
        }
    }

    /// Render the report using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        let mut buffer = String::new();
        match mode {
            RenderMode::Plain => {
                let _ = writeln!(buffer, "Part 1: {}", format_heat_loss(&self.bounded));
                let _ = writeln!(buffer, "Part 2: {}", format_heat_loss(&self.committed));
            }
            RenderMode::Detailed => {
                let _ = writeln!(buffer, "Grid: {}x{}", self.grid.rows, self.grid.cols);
                write_plan_details(&mut buffer, &self.bounded);
                write_plan_details(&mut buffer, &self.committed);
            }
        }
        buffer
    }
}

fn format_heat_loss(plan: &RoutePlan) -> String {
    match plan.heat_loss {
        Some(cost) => cost.to_string(),
        None => "unreachable".to_string(),
    }
}

fn write_plan_details(buffer: &mut String, plan: &RoutePlan) {
    let _ = writeln!(
        buffer,
        "{} policy: {} -> {} (goal: {}): {}",
        plan.policy,
        plan.start,
        plan.goal,
        plan.goal_rule,
        format_heat_loss(plan)
    );
    let _ = writeln!(
        buffer,
        "  expanded {} states, pushed {}, frontier peak {}",
        plan.stats.expanded, plan.stats.pushed, plan.stats.frontier_high_water
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::GoalRule;
    use crate::grid::Cell;
    use crate::policy::PolicyKind;
    use crate::search::SearchStats;

    fn plan(policy: PolicyKind, heat_loss: Option<i64>) -> RoutePlan {
        RoutePlan {
            policy,
            start: Cell::new(0, 0),
            goal: Cell::new(2, 2),
            goal_rule: GoalRule::Position,
            heat_loss,
            stats: SearchStats {
                expanded: 12,
                pushed: 30,
                frontier_high_water: 9,
            },
        }
    }

    fn grid() -> CostGrid {
        CostGrid::parse("111\n111\n111").unwrap()
    }

    #[test]
    fn plain_report_prints_two_answers() {
        let report = HeatLossReport::new(
            &grid(),
            plan(PolicyKind::Bounded, Some(4)),
            plan(PolicyKind::Committed, None),
        );
        assert_eq!(
            report.render(RenderMode::Plain),
            "Part 1: 4\nPart 2: unreachable\n"
        );
    }

    #[test]
    fn detailed_report_names_policies() {
        let report = HeatLossReport::new(
            &grid(),
            plan(PolicyKind::Bounded, Some(4)),
            plan(PolicyKind::Committed, Some(6)),
        );
        let text = report.render(RenderMode::Detailed);
        assert!(text.starts_with("Grid: 3x3\n"));
        assert!(text.contains("bounded policy: (0, 0) -> (2, 2) (goal: position): 4"));
        assert!(text.contains("committed policy"));
        assert!(text.contains("expanded 12 states, pushed 30, frontier peak 9"));
    }

    #[test]
    fn unreachable_serialises_as_null() {
        let summary = RouteSummary::from_plan(&grid(), plan(PolicyKind::Committed, None));
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["heat_loss"], serde_json::Value::Null);
        assert_eq!(value["policy"], "committed");
        assert_eq!(value["grid"]["rows"], 3);
        assert_eq!(value["start"]["row"], 0);
        assert_eq!(summary.render(RenderMode::Plain), "unreachable\n");
    }
}
