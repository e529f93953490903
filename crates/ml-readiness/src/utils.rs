//! Shared helpers for dtype dispatch and name matching.

use crate::types::ColumnKind;
use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Map a polars dtype onto the two kinds the heuristics distinguish.
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if is_numeric_dtype(dtype) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

// =============================================================================
// Name Matching
// =============================================================================

/// First hint (in list order) contained in `name_lower`, if any.
pub fn first_contained_hint(name_lower: &str, hints: &[&'static str]) -> Option<&'static str> {
    hints.iter().copied().find(|hint| name_lower.contains(hint))
}

/// Whether `name_lower` contains any of `hints`.
pub fn contains_any(name_lower: &str, hints: &[&str]) -> bool {
    hints.iter().any(|hint| name_lower.contains(hint))
}
