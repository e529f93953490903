//! Data quality analysis module.
//!
//! This module scans profiled columns for defects that hurt a model
//! (missing values, constant columns, identifiers, name-based leakage)
//! and assesses class imbalance for classification targets.

mod analyzer;
mod imbalance;

pub use analyzer::{DataQualityAnalyzer, LEAK_HINTS};
pub use imbalance::ImbalanceAssessor;

use serde::{Deserialize, Serialize};

/// Ordered issue and recommendation messages collected by the checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Findings {
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, message: impl Into<String>) {
        self.issues.push(message.into());
    }

    pub fn recommend(&mut self, message: impl Into<String>) {
        self.recommendations.push(message.into());
    }
}

/// Per-category defect counters written into the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCounts {
    pub n_cols_over_20pct_null: usize,
    pub n_cols_over_40pct_null: usize,
    pub n_constant_cols: usize,
    pub n_id_like_cols: usize,
    pub n_leak_name_cols: usize,
}
