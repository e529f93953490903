//! Data profiling module for dataset analysis.
//!
//! This module reduces a DataFrame to per-column facts and hosts the
//! heuristics that read them:
//! - Column statistics (null ratio, cardinality, kind)
//! - Target column discovery
//! - Problem type classification

mod problem_type;
mod target_discovery;

pub use problem_type::ProblemTypeClassifier;
pub use target_discovery::{ID_HINTS, TargetDiscoverer};

use crate::error::{ReadinessError, Result, ResultExt};
use crate::types::{ColumnStats, DatasetProfile};
use crate::utils::column_kind;
use polars::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

const COUNT_COLUMN: &str = "count";

/// Data profiler for analyzing dataset structure.
pub struct DataProfiler;

impl DataProfiler {
    /// Profile every column of a dataset, preserving column order.
    pub fn profile_dataset(df: &DataFrame) -> Result<DatasetProfile> {
        let n_rows = df.height();
        let mut columns = Vec::with_capacity(df.width());

        for column in df.get_columns() {
            let series = column.as_materialized_series();
            let stats = Self::profile_series(series, n_rows)
                .context(format!("Profiling column '{}'", series.name()))?;
            columns.push(stats);
        }

        debug!("Profiled {} columns over {} rows", columns.len(), n_rows);

        Ok(DatasetProfile { n_rows, columns })
    }

    fn profile_series(series: &Series, n_rows: usize) -> Result<ColumnStats> {
        let null_count = series.null_count();
        let non_null = series.drop_nulls();
        let unique_count = non_null.n_unique()?;
        let null_ratio = if n_rows > 0 {
            null_count as f64 / n_rows as f64
        } else {
            0.0
        };

        Ok(ColumnStats {
            name: series.name().to_string(),
            kind: column_kind(series.dtype()),
            non_null_count: non_null.len(),
            null_count,
            unique_count,
            null_ratio,
        })
    }

    /// Occurrence count of each distinct non-null value in a column,
    /// largest first.
    ///
    /// Values are grouped on their native dtype, so the number of classes
    /// always equals the profile's `unique_count`.
    pub fn class_counts(df: &DataFrame, column: &str) -> Result<Vec<usize>> {
        let series = Self::series(df, column)?;
        let non_null = series.drop_nulls();
        if non_null.is_empty() {
            return Ok(Vec::new());
        }

        let counts_df = non_null
            .value_counts(false, false, PlSmallStr::from_static(COUNT_COLUMN), false)
            .context(format!("Counting classes of '{}'", column))?;
        let counts = counts_df
            .column(COUNT_COLUMN)?
            .as_materialized_series()
            .cast(&DataType::UInt64)?;

        let mut counts: Vec<usize> = counts
            .u64()?
            .into_iter()
            .flatten()
            .map(|c| c as usize)
            .collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        Ok(counts)
    }

    /// Finite values of a numeric column, sorted ascending. Nulls are dropped.
    pub fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<f64>> {
        let series = Self::series(df, column)?;
        let as_float = series
            .cast(&DataType::Float64)
            .context(format!("Reading numeric values of '{}'", column))?;

        let mut values: Vec<f64> = as_float
            .f64()?
            .into_iter()
            .flatten()
            .filter(|v| v.is_finite())
            .collect();
        values.sort_by(|a, b| a.total_cmp(b));
        Ok(values)
    }

    /// Most frequent values of a column, highest count first.
    ///
    /// Nulls are reported under `"null"` when `include_nulls` is set.
    /// Ties are broken by the value's text.
    pub fn top_values(
        df: &DataFrame,
        column: &str,
        include_nulls: bool,
        limit: usize,
    ) -> Result<Vec<(String, usize)>> {
        let mut ranked: Vec<(String, usize)> = Self::value_frequencies(df, column, include_nulls)?
            .into_iter()
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        Ok(ranked)
    }

    fn series<'a>(df: &'a DataFrame, column: &str) -> Result<&'a Series> {
        df.column(column)
            .map(|c| c.as_materialized_series())
            .map_err(|_| ReadinessError::ColumnNotFound(column.to_string()))
    }

    fn value_frequencies(
        df: &DataFrame,
        column: &str,
        include_nulls: bool,
    ) -> Result<BTreeMap<String, usize>> {
        let series = Self::series(df, column)?;

        let as_text = series
            .cast(&DataType::String)
            .context(format!("Reading values of '{}'", column))?;

        let mut counts = BTreeMap::new();
        for value in as_text.str()?.into_iter() {
            match value {
                Some(v) => *counts.entry(v.to_string()).or_insert(0) += 1,
                None if include_nulls => *counts.entry("null".to_string()).or_insert(0) += 1,
                None => {}
            }
        }
        Ok(counts)
    }
}
