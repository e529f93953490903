//! ML Readiness Analysis Library
//!
//! Heuristic inspection of a tabular dataset before any model is trained.
//!
//! # Overview
//!
//! Given a Polars `DataFrame`, the library:
//!
//! - **Discovers the target**: name hints first, then a multi-signal column score
//! - **Infers the problem type**: classification or regression
//! - **Scans for quality defects**: nulls, constant columns, identifiers, name-based leakage
//! - **Assesses class imbalance** for classification targets
//! - **Scores viability**: a 0-100 score with a letter grade
//!
//! Analysis is deterministic and read-only: the same frame always yields the
//! same summary, issues and recommendations, in the same order.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ml_readiness::{analyze_dataset, compute_viability_score, loader};
//!
//! let df = loader::load_csv("data/train.csv")?;
//! let analysis = analyze_dataset(&df)?;
//! let score = compute_viability_score(&analysis.summary);
//!
//! println!("Target: {} ({})", analysis.summary.target, analysis.summary.target_confidence);
//! println!("Score: {}/100, grade {}", score.score, score.grade);
//! ```
//!
//! # Configuration
//!
//! Use [`AnalysisConfig`] to force a target or adjust thresholds:
//!
//! ```rust,ignore
//! use ml_readiness::{AnalysisConfig, Pipeline};
//!
//! let config = AnalysisConfig::builder()
//!     .target_column("churned")       // skip discovery when present
//!     .severe_null_threshold(0.5)
//!     .build()?;
//!
//! let analysis = Pipeline::builder().config(config).build()?.analyze(&df)?;
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod profiler;
pub mod quality;
pub mod reporting;
pub mod scoring;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError};
pub use error::{ReadinessError, Result as ReadinessResult, ResultExt};
pub use pipeline::{Pipeline, PipelineBuilder, analyze_dataset, compute_viability_score};
pub use profiler::{DataProfiler, ProblemTypeClassifier, TargetDiscoverer};
pub use quality::{DataQualityAnalyzer, Findings, ImbalanceAssessor, QualityCounts};
pub use reporting::{ChartData, ReadinessReport, ReportGenerator};
pub use scoring::ViabilityScorer;
pub use types::{
    Analysis, AnalysisSummary, ColumnKind, ColumnStats, Confidence, DatasetProfile, Grade,
    ImbalanceAssessment, ImbalanceSeverity, ProblemType, TargetSelection, ViabilityScore,
};
