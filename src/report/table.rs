//! Row generation for the coverage table.
//!
//! This module walks a finished coverage tree in display order and turns
//! every node into a `FormattedRow`, sizing the uncovered-lines column to
//! whatever the terminal leaves over.

use super::types::{FormattedRow, PercentCell, TableRow};
use crate::console_format::{self, FIXED_OVERHEAD, PERCENT_COLUMNS_WIDTH};
use crate::line_ranges::format_line_ranges;
use crate::tree::{CoverageNode, CoverageTree};

/// Label of the summary row that stands in for the root
pub const ALL_FILES_LABEL: &str = "All files";

/// Spaces per indentation level
pub const TAB_SIZE: usize = 2;

/// Widest label in the table, indentation included
pub fn max_label_width(tree: &CoverageTree) -> usize {
    tree.ids()
        .filter(|&id| id != tree.root())
        .map(|id| indent(tree.depth(id)).len() + console_format::display_width(&tree.node(id).name))
        .fold(console_format::display_width(ALL_FILES_LABEL), usize::max)
}

/// Characters available for the uncovered-lines column.
///
/// # Arguments
/// * `terminal_width` - Terminal columns (0 = no width awareness)
///
/// Floored at 0, which the line formatter treats as unlimited. A
/// `terminal_width` of 0 also yields 0.
pub fn uncovered_budget(tree: &CoverageTree, terminal_width: usize) -> usize {
    if terminal_width == 0 {
        return 0;
    }
    terminal_width
        .saturating_sub(FIXED_OVERHEAD)
        .saturating_sub(max_label_width(tree))
        .saturating_sub(PERCENT_COLUMNS_WIDTH)
}

/// Build all table rows: the summary row, a separator, then every node in
/// pre-order with directories before files.
pub fn collect_rows(tree: &CoverageTree, terminal_width: usize) -> Vec<TableRow> {
    let budget = uncovered_budget(tree, terminal_width);
    let root = tree.root();

    let summary = format_node(tree.node(root), ALL_FILES_LABEL.to_string(), budget);
    let mut rows = vec![TableRow::Data(summary), TableRow::Separator];

    // Explicit stack; children pushed in reverse so they pop in display order
    let mut stack: Vec<_> = tree.sorted_children(root).into_iter().rev().collect();
    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        let label = format!("{}{}", indent(tree.depth(id)), node.name);
        rows.push(TableRow::Data(format_node(node, label, budget)));
        stack.extend(tree.sorted_children(id).into_iter().rev());
    }

    rows
}

fn indent(depth: usize) -> String {
    " ".repeat(depth.saturating_sub(1) * TAB_SIZE)
}

fn format_node(node: &CoverageNode, label: String, uncovered_width: usize) -> FormattedRow {
    let uncovered =
        if node.is_file() { format_line_ranges(&node.uncovered_lines, uncovered_width) } else { String::new() };

    FormattedRow {
        label,
        statements: PercentCell::from_metrics(&node.statements),
        branches: PercentCell::from_metrics(&node.branches),
        lines: PercentCell::from_metrics(&node.lines),
        uncovered,
    }
}
