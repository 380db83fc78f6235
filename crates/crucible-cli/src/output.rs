//! Output formatting for heat-loss results.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crucible_lib::{HeatLossReport, RenderMode, RouteSummary};

/// Output formats supported by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bare answers, one per line.
    #[default]
    Text,
    /// Answers annotated with policy, endpoints and search counters.
    Detailed,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render a two-policy report to stdout.
    pub fn render_report(self, report: &HeatLossReport) -> io::Result<()> {
        match self {
            OutputFormat::Text => print_text(&report.render(RenderMode::Plain)),
            OutputFormat::Detailed => print_text(&report.render(RenderMode::Detailed)),
            OutputFormat::Json => render_json(report),
        }
    }

    /// Render a single-route summary to stdout.
    pub fn render_route(self, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => print_text(&summary.render(RenderMode::Plain)),
            OutputFormat::Detailed => print_text(&summary.render(RenderMode::Detailed)),
            OutputFormat::Json => render_json(summary),
        }
    }
}

fn print_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

/// Render any serialisable value as JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    stdout.flush()
}
