//! Report export to JSON.
//!
//! This module writes the coverage tree, in the same order the console
//! table shows it, to a JSON file for storage and analysis.

use crate::clover::CloverReport;
use crate::error::ReportError;
use crate::line_ranges::format_line_ranges;
use crate::tree::{CoverageTree, NodeId, NodeKind};
use crate::types::Metrics;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Metrics block with the percentage precomputed for consumers.
#[derive(Debug, Serialize)]
struct MetricsSummary {
    total: u64,
    covered: u64,
    /// None when there is nothing to cover
    percentage: Option<f64>,
}

impl From<Metrics> for MetricsSummary {
    fn from(metrics: Metrics) -> Self {
        let percentage = if metrics.total == 0 { None } else { Some(round2(metrics.percentage())) };
        MetricsSummary { total: metrics.total, covered: metrics.covered, percentage }
    }
}

#[derive(Debug, Serialize)]
struct JsonNode {
    name: String,
    kind: NodeKind,
    statements: MetricsSummary,
    branches: MetricsSummary,
    lines: MetricsSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    uncovered_lines: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a subtree in display order.
///
/// Recursion depth is bounded by the deepest path in the report.
fn to_json_node(tree: &CoverageTree, id: NodeId) -> JsonNode {
    let node = tree.node(id);
    JsonNode {
        name: node.name.clone(),
        kind: node.kind,
        statements: node.statements.into(),
        branches: node.branches.into(),
        lines: node.lines.into(),
        uncovered_lines: node.is_file().then(|| format_line_ranges(&node.uncovered_lines, 0)),
        children: tree.sorted_children(id).into_iter().map(|child| to_json_node(tree, child)).collect(),
    }
}

/// Export the coverage tree as JSON.
///
/// # Arguments
/// * `tree` - Aggregated coverage tree
/// * `report` - The clover report the tree was built from
/// * `output_path` - Path to write the JSON file
pub fn export_json_report(tree: &CoverageTree, report: &CloverReport, output_path: &Path) -> Result<(), ReportError> {
    use serde_json::json;

    let root = tree.node(tree.root());
    let declared = report.totals.map(|t| {
        json!({
            "statements": MetricsSummary::from(t.statements),
            "branches": MetricsSummary::from(t.branches),
            "lines": MetricsSummary::from(t.lines),
        })
    });

    let document = json!({
        "source": report.source.display().to_string(),
        "generated": report.generated.map(|g| g.to_rfc3339()),
        "files": tree.file_count(),
        "all_files": {
            "statements": MetricsSummary::from(root.statements),
            "branches": MetricsSummary::from(root.branches),
            "lines": MetricsSummary::from(root.lines),
        },
        "declared_totals": declared,
        "tree": tree.sorted_children(tree.root()).into_iter().map(|id| to_json_node(tree, id)).collect::<Vec<_>>(),
    });

    let file =
        File::create(output_path).map_err(|source| ReportError::Io { path: output_path.to_path_buf(), source })?;
    serde_json::to_writer_pretty(file, &document)?;

    Ok(())
}
