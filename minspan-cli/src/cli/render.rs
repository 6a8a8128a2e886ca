//! Rendering of command summaries to stdout.

use std::io::{self, Write};

use minspan_core::{SpanningTree, SquaredDistance};
use serde::Serialize;

use super::commands::{ExecutionSummary, OutputFormat};

/// Writes `summary` to `writer` in the format it was requested in.
///
/// Text output is a short header followed by one `source\ttarget\tweight`
/// line per edge and, when requested, a `tour:` line. JSON output is a single
/// pretty-printed document with the same information.
///
/// # Errors
/// Returns any error raised by `writer`, or a JSON serialisation failure
/// converted into [`io::Error`].
pub fn render_summary(summary: &ExecutionSummary, writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Text => render_text(summary, writer),
        OutputFormat::Json => render_json(summary, writer),
    }
}

fn render_text(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "points: {}", summary.points.len())?;
    writeln!(writer, "strategy: {}", summary.strategy.label())?;
    writeln!(writer, "edges: {}", edge_count(summary.tree.as_ref()))?;
    writeln!(writer, "total weight: {}", total_weight(summary.tree.as_ref()))?;
    if let Some(tree) = &summary.tree {
        for edge in tree.edges() {
            writeln!(
                writer,
                "{}\t{}\t{}",
                edge.source(),
                edge.target(),
                edge.weight()
            )?;
        }
    }
    if let Some(tour) = &summary.tour {
        let joined = tour
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "tour: {joined}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct SummaryView<'a> {
    source: &'a str,
    points: usize,
    strategy: &'static str,
    total_weight: u128,
    edges: Vec<EdgeView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tour: Option<&'a [usize]>,
}

#[derive(Serialize)]
struct EdgeView {
    source: usize,
    target: usize,
    weight: u128,
}

fn render_json(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let edges = summary
        .tree
        .as_ref()
        .map(|tree| {
            tree.edges()
                .iter()
                .map(|edge| EdgeView {
                    source: edge.source(),
                    target: edge.target(),
                    weight: edge.weight().get(),
                })
                .collect()
        })
        .unwrap_or_default();
    let view = SummaryView {
        source: &summary.source,
        points: summary.points.len(),
        strategy: summary.strategy.label(),
        total_weight: total_weight(summary.tree.as_ref()).get(),
        edges,
        tour: summary.tour.as_deref(),
    };
    serde_json::to_writer_pretty(&mut writer, &view)?;
    writeln!(writer)
}

fn edge_count(tree: Option<&SpanningTree>) -> usize {
    tree.map_or(0, SpanningTree::len)
}

fn total_weight(tree: Option<&SpanningTree>) -> SquaredDistance {
    tree.map_or(SquaredDistance::ZERO, SpanningTree::total_weight)
}
