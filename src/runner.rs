use crate::clover::{self, CloverReport};
use crate::console_format::TableWriter;
use crate::error::ReportError;
use crate::report;
use crate::tree::{CoverageTree, build_tree};
use log::{debug, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a summary run ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// The report path did not exist; an informational line was written
    ReportNotFound,
    /// The report parsed but listed no files
    NoCoverageData,
    /// A table was written for this many files
    Rendered { files: usize },
}

/// Renders a clover report as a coverage table.
///
/// Width and colors are fixed per reporter; the sink is passed to every
/// call, so independent reporters can run side by side.
#[derive(Debug, Clone, Default)]
pub struct CoverageReporter {
    /// Terminal columns (0 = no truncation)
    terminal_width: usize,
    use_colors: bool,
    json_output: Option<PathBuf>,
}

impl CoverageReporter {
    pub fn new(terminal_width: usize, use_colors: bool) -> Self {
        Self { terminal_width, use_colors, json_output: None }
    }

    /// Also write the tree as JSON after rendering
    pub fn with_json_output(mut self, path: Option<PathBuf>) -> Self {
        self.json_output = path;
        self
    }

    /// Load the report at `report_path` and write its summary table to `out`.
    ///
    /// A missing report or an empty one is not an error: an informational
    /// line is written instead of the table. A report that cannot be parsed
    /// is returned as `ReportError::Malformed`.
    pub fn print_coverage_summary<W: Write>(
        &self,
        out: &mut W,
        report_path: &Path,
    ) -> Result<SummaryOutcome, ReportError> {
        writeln!(out)?;

        let report = match clover::load_report(report_path) {
            Ok(report) => report,
            Err(ReportError::NotFound { path }) => {
                writeln!(out, "Code coverage report not found at {}", path.display())?;
                return Ok(SummaryOutcome::ReportNotFound);
            }
            Err(e) => return Err(e),
        };

        if report.files.is_empty() {
            writeln!(out, "No coverage data found.")?;
            return Ok(SummaryOutcome::NoCoverageData);
        }

        let tree = build_tree(&report.files);
        check_declared_totals(&report, &tree);
        self.write_tree(out, &tree)?;

        if let Some(json_path) = &self.json_output {
            report::export_json_report(&tree, &report, json_path)?;
            debug!("JSON report saved to {:?}", json_path);
        }

        Ok(SummaryOutcome::Rendered { files: tree.file_count() })
    }

    /// Render an already built tree
    pub fn write_tree<W: Write>(&self, out: &mut W, tree: &CoverageTree) -> Result<(), ReportError> {
        let rows = report::collect_rows(tree, self.terminal_width);
        debug!(
            "Rendering {} rows, terminal width {}, uncovered budget {}",
            rows.len(),
            self.terminal_width,
            report::uncovered_budget(tree, self.terminal_width)
        );

        let mut writer = TableWriter::new(out, self.use_colors);
        writer.write_table(&rows)?;
        Ok(())
    }
}

/// Warn when the report's own project totals disagree with the file sums
fn check_declared_totals(report: &CloverReport, tree: &CoverageTree) {
    let Some(declared) = report.totals else {
        return;
    };
    let aggregated = tree.node(tree.root()).totals();
    if declared != aggregated {
        warn!(
            "Project totals in {} ({:?}) differ from the sum of its files ({:?})",
            report.source.display(),
            declared,
            aggregated
        );
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
