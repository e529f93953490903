use crate::error::Result;
use crate::profiler::DataProfiler;
use crate::types::{Analysis, AnalysisSummary, ProblemType, ViabilityScore};
use crate::utils::is_numeric_dtype;
use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Maximum number of bars in each chart series.
const CHART_LIMIT: usize = 10;

const HISTOGRAM_BINS: usize = 50;

/// Column plotted in preference to any other numeric column.
const PREFERRED_HISTOGRAM_COLUMN: &str = "Amount";

// ============================================================================
// Report Types
// ============================================================================

/// Full readiness report for CLI and library output.
///
/// Use this for both JSON output (`--json`) and file writing (`--emit-report`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path to the input file
    pub input_file: String,
    pub summary: AnalysisSummary,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub final_score: ViabilityScore,
    pub charts: ChartData,
}

/// Data series a frontend can plot directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Columns with missing values, highest percentage first
    pub missing_values_top10: Vec<MissingValueBar>,
    /// Most frequent target values; only present for classification
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target_distribution: Option<Vec<ValueCount>>,
    /// Distribution of one numeric column; absent when there is none
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub histogram: Option<Histogram>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingValueBar {
    pub column: String,
    pub missing_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub column: String,
    pub bins: Vec<HistogramBin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

// ============================================================================
// Generator
// ============================================================================

/// Builds readiness reports and writes them to disk.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
        }
    }
}

impl ReportGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Assemble a report from an analysis of `df` and its score.
    pub fn build_report(
        input_file: &str,
        df: &DataFrame,
        analysis: &Analysis,
        score: ViabilityScore,
    ) -> Result<ReadinessReport> {
        let charts = Self::build_charts(df, &analysis.summary)?;

        Ok(ReadinessReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.to_string(),
            summary: analysis.summary.clone(),
            issues: analysis.issues.clone(),
            recommendations: analysis.recommendations.clone(),
            final_score: score,
            charts,
        })
    }

    fn build_charts(df: &DataFrame, summary: &AnalysisSummary) -> Result<ChartData> {
        let target_distribution = if summary.problem_type == ProblemType::Classification {
            match DataProfiler::top_values(df, &summary.target, true, CHART_LIMIT) {
                Ok(top) => Some(
                    top.into_iter()
                        .map(|(value, count)| ValueCount { value, count })
                        .collect(),
                ),
                Err(e) => {
                    warn!("Skipping target distribution of '{}': {}", summary.target, e);
                    None
                }
            }
        } else {
            None
        };

        let histogram = match Self::histogram_column(df) {
            Some(column) => {
                let values = DataProfiler::numeric_values(df, &column)?;
                Some(Histogram {
                    bins: build_histogram(&values, HISTOGRAM_BINS),
                    column,
                })
            }
            None => None,
        };

        let charts = ChartData {
            missing_values_top10: Self::missing_values(df),
            target_distribution,
            histogram,
        };
        debug!(
            "Chart data: {} missing-value bars, histogram {:?}",
            charts.missing_values_top10.len(),
            charts.histogram.as_ref().map(|h| h.column.as_str())
        );
        Ok(charts)
    }

    /// `Amount` when it is numeric, otherwise the first numeric column.
    fn histogram_column(df: &DataFrame) -> Option<String> {
        let numeric: Vec<&Column> = df
            .get_columns()
            .iter()
            .filter(|col| is_numeric_dtype(col.dtype()))
            .collect();

        numeric
            .iter()
            .find(|col| col.name().as_str() == PREFERRED_HISTOGRAM_COLUMN)
            .or_else(|| numeric.first())
            .map(|col| col.name().to_string())
    }

    fn missing_values(df: &DataFrame) -> Vec<MissingValueBar> {
        let n_rows = df.height();
        if n_rows == 0 {
            return Vec::new();
        }

        let mut bars: Vec<MissingValueBar> = df
            .get_columns()
            .iter()
            .filter(|col| col.null_count() > 0)
            .map(|col| MissingValueBar {
                column: col.name().to_string(),
                missing_percent: col.null_count() as f64 / n_rows as f64 * 100.0,
            })
            .collect();

        bars.sort_by(|a, b| b.missing_percent.total_cmp(&a.missing_percent));
        bars.truncate(CHART_LIMIT);
        bars
    }

    /// Write a report as pretty JSON to `<output_dir>/<base_name>_readiness.json`.
    pub fn write_report_to_file(
        &self,
        report: &ReadinessReport,
        report_base_name: &str,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self
            .output_dir
            .join(format!("{}_readiness.json", report_base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}

/// Equal-width bins over sorted `values`. The maximum lands in the last bin.
fn build_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.first().copied().unwrap_or(0.0);
    let max = values.last().copied().unwrap_or(min);
    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            start: min + idx as f64 * width,
            end: min + (idx as f64 + 1.0) * width,
            count,
        })
        .collect()
}
