//! Report generation module.
//!
//! [`ReadinessReport`] bundles an analysis, its score and chart-ready data
//! series. It backs both JSON output to stdout (`--json`) and report files
//! (`--emit-report`).
//!
//! # Example
//!
//! ```rust,ignore
//! use ml_readiness::reporting::ReportGenerator;
//!
//! let analysis = analyze_dataset(&df)?;
//! let score = compute_viability_score(&analysis.summary);
//! let report = ReportGenerator::build_report("data/train.csv", &df, &analysis, score)?;
//!
//! ReportGenerator::new("output").write_report_to_file(&report, "train")?;
//! ```

mod generator;

pub use generator::{
    ChartData, Histogram, HistogramBin, MissingValueBar, ReadinessReport, ReportGenerator,
    ValueCount,
};
