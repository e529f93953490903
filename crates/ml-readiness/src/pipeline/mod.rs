//! Pipeline module.
//!
//! This module provides the analysis pipeline plus convenience entry points
//! for callers that do not need a custom configuration.

mod builder;

pub use builder::{Pipeline, PipelineBuilder};

use crate::error::Result;
use crate::scoring::ViabilityScorer;
use crate::types::{Analysis, AnalysisSummary, ViabilityScore};
use polars::prelude::DataFrame;

/// Analyze a dataset with the default configuration.
pub fn analyze_dataset(df: &DataFrame) -> Result<Analysis> {
    Pipeline::builder().build()?.analyze(df)
}

/// Score a finished summary.
pub fn compute_viability_score(summary: &AnalysisSummary) -> ViabilityScore {
    ViabilityScorer::score(summary)
}
