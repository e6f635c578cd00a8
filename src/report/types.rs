//! Report type definitions for the rendering model.
//!
//! This module defines the type-safe rendering model used to convert
//! a coverage tree into displayable rows.

use crate::types::Metrics;
use term::color::Color;

/// Severity band of a coverage percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageBand {
    /// 80% and above
    Pass,
    /// 50% up to 80%
    Warn,
    /// Below 50%
    Fail,
}

impl CoverageBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            CoverageBand::Pass
        } else if percentage >= 50.0 {
            CoverageBand::Warn
        } else {
            CoverageBand::Fail
        }
    }

    /// Terminal color used for this band.
    pub fn color(&self) -> Color {
        match self {
            CoverageBand::Pass => term::color::GREEN,
            CoverageBand::Warn => term::color::YELLOW,
            CoverageBand::Fail => term::color::RED,
        }
    }
}

/// A formatted percentage cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentCell {
    /// "75.00", or "-" when there is nothing to cover
    pub text: String,
    /// None for the "-" placeholder
    pub band: Option<CoverageBand>,
}

impl PercentCell {
    pub fn from_metrics(metrics: &Metrics) -> Self {
        if metrics.total == 0 {
            return PercentCell { text: "-".to_string(), band: None };
        }
        let band = CoverageBand::from_percentage(metrics.percentage());
        PercentCell { text: format_hundredths(metrics), band: Some(band) }
    }
}

/// Percentage with two decimals, ties rounded up ("3.125" shows as "3.13").
///
/// Works on integers so exact ties are not lost to float representation.
fn format_hundredths(metrics: &Metrics) -> String {
    let total = u128::from(metrics.total);
    let hundredths = (u128::from(metrics.covered) * 20_000 + total) / (2 * total);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// One data row of the coverage table.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedRow {
    /// Indented file or directory name
    pub label: String,
    pub statements: PercentCell,
    pub branches: PercentCell,
    pub lines: PercentCell,
    /// Compressed uncovered line ranges; empty for directories
    pub uncovered: String,
}

/// A line of the table body.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Data(FormattedRow),
    Separator,
}
