//! Core data structures for coverage metrics
//!
//! This module defines the value types that flow from the clover loader
//! into the tree builder and renderer.

use std::ops::{Add, AddAssign};

/// A total/covered pair for one category of coverable items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Metrics {
    pub total: u64,
    pub covered: u64,
}

impl Metrics {
    pub fn new(total: u64, covered: u64) -> Self {
        Self { total, covered }
    }

    /// Metrics with nothing to cover
    pub fn zero() -> Self {
        Self::default()
    }

    /// Covered share in percent, 0.0 when there is nothing to cover
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.covered as f64 / self.total as f64) * 100.0
    }

    /// Sum of both pairs
    pub fn combine(&self, other: &Metrics) -> Metrics {
        Metrics { total: self.total + other.total, covered: self.covered + other.covered }
    }
}

impl Add for Metrics {
    type Output = Metrics;

    fn add(self, other: Metrics) -> Metrics {
        self.combine(&other)
    }
}

impl AddAssign for Metrics {
    fn add_assign(&mut self, other: Metrics) {
        *self = self.combine(&other);
    }
}

/// Coverage for one source file as read from the report
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FileMetrics {
    pub statements: Metrics,
    /// Branch coverage; clover reports count methods here
    pub branches: Metrics,
    pub lines: Metrics,
    /// Line numbers without hits, in report order
    pub uncovered_lines: Vec<u32>,
}

/// Project-wide totals, either declared by the report or aggregated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoverageTotals {
    pub statements: Metrics,
    pub branches: Metrics,
    pub lines: Metrics,
}
