//! Report generation module - Data transformations for rendering.
//!
//! This module handles:
//! - Converting tree nodes to FormattedRow (indentation, percentages, bands)
//! - Width budgeting for the uncovered-lines column
//! - Export to JSON
//!
//! Console rendering is handled by the console_format module.
//!
//! # Module Organization
//!
//! - `types` - Core rendering types (CoverageBand, PercentCell, FormattedRow, TableRow)
//! - `table` - Depth-first row generation and width budget
//! - `export` - JSON export

mod export;
mod table;
mod types;

// Re-export types
pub use types::{CoverageBand, FormattedRow, PercentCell, TableRow};

// Re-export table functions
pub use table::{collect_rows, uncovered_budget};

// Re-export export functions
pub use export::export_json_report;
