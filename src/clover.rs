//! Clover XML report loading
//!
//! This module handles:
//! - Checking that the report exists
//! - Deserializing the clover document
//! - Flattening packages into a path -> FileMetrics map
//! - Reading the project-level totals

use crate::error::ReportError;
use crate::types::{CoverageTotals, FileMetrics, Metrics};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A parsed clover report
#[derive(Debug, Clone)]
pub struct CloverReport {
    /// Where the report was read from
    pub source: PathBuf,
    /// `generated` attribute of the root element
    pub generated: Option<DateTime<Utc>>,
    /// Per-file coverage keyed by the path recorded in the report
    pub files: BTreeMap<String, FileMetrics>,
    /// Totals from `<project><metrics>`, if the report declares them
    pub totals: Option<CoverageTotals>,
}

#[derive(Debug, Deserialize)]
struct CoverageElement {
    #[serde(rename = "@generated", default)]
    generated: Option<i64>,
    project: ProjectElement,
}

#[derive(Debug, Deserialize)]
struct ProjectElement {
    #[serde(rename = "package", default)]
    packages: Vec<PackageElement>,
    #[serde(rename = "file", default)]
    files: Vec<FileElement>,
    #[serde(default)]
    metrics: Option<MetricsElement>,
}

#[derive(Debug, Deserialize)]
struct PackageElement {
    #[serde(rename = "file", default)]
    files: Vec<FileElement>,
}

#[derive(Debug, Deserialize)]
struct FileElement {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "line", default)]
    lines: Vec<LineElement>,
    #[serde(default)]
    metrics: Option<MetricsElement>,
}

#[derive(Debug, Deserialize)]
struct LineElement {
    #[serde(rename = "@num")]
    num: u32,
    /// Absent on conditional lines that only carry truecount/falsecount
    #[serde(rename = "@count", default)]
    count: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct MetricsElement {
    #[serde(rename = "@statements", default)]
    statements: u64,
    #[serde(rename = "@coveredstatements", default)]
    covered_statements: u64,
    #[serde(rename = "@methods", default)]
    methods: u64,
    #[serde(rename = "@coveredmethods", default)]
    covered_methods: u64,
    #[serde(rename = "@elements", default)]
    elements: u64,
    #[serde(rename = "@coveredelements", default)]
    covered_elements: u64,
}

impl MetricsElement {
    fn to_totals(&self) -> CoverageTotals {
        CoverageTotals {
            statements: Metrics::new(self.statements, self.covered_statements),
            branches: Metrics::new(self.methods, self.covered_methods),
            lines: Metrics::new(self.elements, self.covered_elements),
        }
    }
}

/// Load and parse a clover report from disk
pub fn load_report(path: &Path) -> Result<CloverReport, ReportError> {
    if !path.exists() {
        return Err(ReportError::NotFound { path: path.to_path_buf() });
    }

    debug!("Reading clover report {:?}", path);
    let xml =
        fs::read_to_string(path).map_err(|source| ReportError::Io { path: path.to_path_buf(), source })?;

    parse_report(&xml, path)
}

/// Parse clover XML that was already read into memory
pub fn parse_report(xml: &str, source: &Path) -> Result<CloverReport, ReportError> {
    let document: CoverageElement = quick_xml::de::from_str(xml)
        .map_err(|e| ReportError::Malformed { path: source.to_path_buf(), message: e.to_string() })?;

    let generated = document.generated.and_then(|secs| DateTime::from_timestamp(secs, 0));
    let project = document.project;

    let mut files = BTreeMap::new();
    let file_elements = project.packages.into_iter().flat_map(|p| p.files).chain(project.files);
    for element in file_elements {
        let metrics = file_metrics(&element);
        // Later entries for the same path replace earlier ones
        if files.insert(element.name.clone(), metrics).is_some() {
            debug!("Duplicate file entry for {}, keeping the last one", element.name);
        }
    }

    debug!("Parsed {} files from {:?}", files.len(), source);

    Ok(CloverReport {
        source: source.to_path_buf(),
        generated,
        files,
        totals: project.metrics.as_ref().map(MetricsElement::to_totals),
    })
}

fn file_metrics(element: &FileElement) -> FileMetrics {
    let totals = element.metrics.as_ref().map(MetricsElement::to_totals).unwrap_or_default();

    for (label, m) in [("statements", totals.statements), ("methods", totals.branches), ("elements", totals.lines)] {
        if m.covered > m.total {
            warn!("{}: {} covered {} exceeds total {}", element.name, label, m.covered, m.total);
        }
    }

    let uncovered_lines = element.lines.iter().filter(|line| line.count == Some(0)).map(|line| line.num).collect();

    FileMetrics {
        statements: totals.statements,
        branches: totals.branches,
        lines: totals.lines,
        uncovered_lines,
    }
}
