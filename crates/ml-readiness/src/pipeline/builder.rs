//! Analysis pipeline.
//!
//! This module provides the `Pipeline` struct and builder that run the
//! heuristics in order: target discovery, problem type, quality checks,
//! then the imbalance assessment for classification targets.

use crate::config::{AnalysisConfig, ConfigValidationError};
use crate::error::{ReadinessError, Result};
use crate::profiler::{DataProfiler, ProblemTypeClassifier, TargetDiscoverer};
use crate::quality::{DataQualityAnalyzer, Findings, ImbalanceAssessor};
use crate::types::{Analysis, AnalysisSummary, ProblemType};
use polars::prelude::*;
use std::time::Instant;
use tracing::{debug, info, warn};

/// The readiness analysis pipeline.
///
/// Use [`Pipeline::builder()`] to create a pipeline with custom configuration.
///
/// # Example
///
/// ```rust,ignore
/// use ml_readiness::{AnalysisConfig, Pipeline};
///
/// let analysis = Pipeline::builder()
///     .config(AnalysisConfig::builder().target_column("churned").build()?)
///     .build()?
///     .analyze(&dataframe)?;
///
/// for issue in &analysis.issues {
///     println!("{}", issue);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: AnalysisConfig,
}

static_assertions::assert_impl_all!(Pipeline: Send, Sync);

impl Pipeline {
    /// Create a new pipeline builder.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a DataFrame and return its summary, issues and recommendations.
    ///
    /// The DataFrame is only read. Running the same pipeline twice on the
    /// same data yields identical output.
    ///
    /// # Errors
    ///
    /// Returns [`ReadinessError::EmptyDataset`] if the frame has no columns.
    pub fn analyze(&self, df: &DataFrame) -> Result<Analysis> {
        let start_time = Instant::now();

        if df.width() == 0 {
            return Err(ReadinessError::EmptyDataset);
        }

        info!(
            "Starting readiness analysis ({} rows x {} columns)",
            df.height(),
            df.width()
        );

        let profile = DataProfiler::profile_dataset(df)?;

        let selection = TargetDiscoverer::new(&self.config)
            .discover(&profile)
            .ok_or(ReadinessError::EmptyDataset)?;
        let target = profile
            .column(&selection.column)
            .ok_or_else(|| ReadinessError::ColumnNotFound(selection.column.clone()))?;

        let (problem_type, problem_reason) =
            ProblemTypeClassifier::new(&self.config).classify(target);
        info!("Problem type: {} ({})", problem_type, problem_reason);

        let mut findings = Findings::new();
        let counts =
            DataQualityAnalyzer::new(&self.config).identify_issues(&profile, &target.name, &mut findings);

        let imbalance = if problem_type == ProblemType::Classification {
            let assessment = match DataProfiler::class_counts(df, &target.name) {
                Ok(class_counts) => ImbalanceAssessor::assess(&class_counts),
                Err(e) => {
                    warn!("Could not count classes of '{}': {}", target.name, e);
                    ImbalanceAssessor::uncountable(&target.name)
                }
            };
            ImbalanceAssessor::report(&assessment, &mut findings);
            Some(assessment)
        } else {
            debug!("Skipping imbalance assessment for regression target");
            None
        };

        let (imbalance_severity, imbalance_detail) = match imbalance {
            Some(a) => (Some(a.severity), Some(a.detail)),
            None => (None, None),
        };

        let summary = AnalysisSummary {
            target: selection.column,
            target_reason: selection.reason,
            target_confidence: selection.confidence,
            problem_type,
            problem_reason,
            n_rows: profile.n_rows,
            n_cols: profile.n_cols(),
            n_cols_over_20pct_null: counts.n_cols_over_20pct_null,
            n_cols_over_40pct_null: counts.n_cols_over_40pct_null,
            n_constant_cols: counts.n_constant_cols,
            n_id_like_cols: counts.n_id_like_cols,
            n_leak_name_cols: counts.n_leak_name_cols,
            imbalance_severity,
            imbalance_detail,
        };

        info!(
            "Analysis finished in {:.2?}: {} issues, {} recommendations",
            start_time.elapsed(),
            findings.issues.len(),
            findings.recommendations.len()
        );

        Ok(Analysis {
            summary,
            issues: findings.issues,
            recommendations: findings.recommendations,
        })
    }
}

/// Builder for [`Pipeline`].
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: Option<AnalysisConfig>,
}

static_assertions::assert_impl_all!(PipelineBuilder: Send);

impl PipelineBuilder {
    /// Set the analysis configuration.
    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the pipeline.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> std::result::Result<Pipeline, ConfigValidationError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(Pipeline { config })
    }
}
