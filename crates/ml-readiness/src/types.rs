use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Column Statistics
// ============================================================================

/// Semantic kind of a column, decided once from its dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Integer or floating point values.
    Numeric,
    /// Text, categorical, boolean, temporal and everything else.
    Categorical,
}

impl ColumnKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric)
    }
}

/// Descriptive facts about one column, shared by every heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub name: String,
    pub kind: ColumnKind,
    pub non_null_count: usize,
    pub null_count: usize,
    /// Distinct non-null values.
    pub unique_count: usize,
    /// Share of null entries, 0.0 for an empty dataset.
    pub null_ratio: f64,
}

impl ColumnStats {
    /// Distinct values divided by row count; 0.0 when there are no rows.
    pub fn unique_ratio(&self, n_rows: usize) -> f64 {
        if n_rows == 0 {
            0.0
        } else {
            self.unique_count as f64 / n_rows as f64
        }
    }

    pub fn is_constant(&self) -> bool {
        self.unique_count <= 1
    }
}

/// Per-column statistics for a whole dataset, in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    pub n_rows: usize,
    pub columns: Vec<ColumnStats>,
}

impl DatasetProfile {
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column by exact name.
    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|col| col.name == name)
    }
}

// ============================================================================
// Heuristic Outcomes
// ============================================================================

/// How sure target discovery is about its pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The chosen target column with the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSelection {
    pub column: String,
    pub reason: String,
    pub confidence: Confidence,
}

/// Supervised learning task implied by the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    Classification,
    Regression,
}

impl ProblemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classification => "classification",
            Self::Regression => "regression",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class imbalance bucket, from perfectly uniform to unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImbalanceSeverity {
    Balanced,
    Slight,
    Clear,
    Severe,
    Extreme,
    /// Zero or one class: nothing to balance.
    Unclassifiable,
}

impl ImbalanceSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Slight => "slight",
            Self::Clear => "clear",
            Self::Severe => "severe",
            Self::Extreme => "extreme",
            Self::Unclassifiable => "unclassifiable",
        }
    }
}

impl fmt::Display for ImbalanceSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the class imbalance check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImbalanceAssessment {
    pub severity: ImbalanceSeverity,
    pub detail: String,
}

// ============================================================================
// Analysis Output
// ============================================================================

/// Flat summary of an analysis, consumed by the scorer and by renderers.
///
/// Field names are the stable summary keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub target: String,
    pub target_reason: String,
    pub target_confidence: Confidence,
    pub problem_type: ProblemType,
    pub problem_reason: String,
    pub n_rows: usize,
    pub n_cols: usize,
    pub n_cols_over_20pct_null: usize,
    pub n_cols_over_40pct_null: usize,
    pub n_constant_cols: usize,
    pub n_id_like_cols: usize,
    pub n_leak_name_cols: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub imbalance_severity: Option<ImbalanceSeverity>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub imbalance_detail: Option<String>,
}

impl AnalysisSummary {
    /// Summary keys and display values, in insertion order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("target", self.target.clone()),
            ("target_reason", self.target_reason.clone()),
            ("target_confidence", self.target_confidence.to_string()),
            ("problem_type", self.problem_type.to_string()),
            ("problem_reason", self.problem_reason.clone()),
            ("n_rows", self.n_rows.to_string()),
            ("n_cols", self.n_cols.to_string()),
            ("n_cols_over_20pct_null", self.n_cols_over_20pct_null.to_string()),
            ("n_cols_over_40pct_null", self.n_cols_over_40pct_null.to_string()),
            ("n_constant_cols", self.n_constant_cols.to_string()),
            ("n_id_like_cols", self.n_id_like_cols.to_string()),
            ("n_leak_name_cols", self.n_leak_name_cols.to_string()),
        ];
        if let Some(severity) = self.imbalance_severity {
            entries.push(("imbalance_severity", severity.to_string()));
        }
        if let Some(ref detail) = self.imbalance_detail {
            entries.push(("imbalance_detail", detail.clone()));
        }
        entries
    }
}

/// Summary, issues and recommendations of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub summary: AnalysisSummary,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Letter grade derived from the viability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// Step function: 85+ A, 70+ B, 55+ C, 40+ D, else E.
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => Self::A,
            70..=84 => Self::B,
            55..=69 => Self::C,
            40..=54 => Self::D,
            _ => Self::E,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final 0-100 score and its grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViabilityScore {
    #[serde(rename = "viability_score")]
    pub score: u8,
    pub grade: Grade,
}

static_assertions::assert_impl_all!(DatasetProfile: Send, Sync);
static_assertions::assert_impl_all!(Analysis: Send, Sync);
static_assertions::assert_impl_all!(ViabilityScore: Send, Sync);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> AnalysisSummary {
        AnalysisSummary {
            target: "label".to_string(),
            target_reason: "matches target hint ('label')".to_string(),
            target_confidence: Confidence::High,
            problem_type: ProblemType::Classification,
            problem_reason: "few distinct values".to_string(),
            n_rows: 10,
            n_cols: 3,
            n_cols_over_20pct_null: 0,
            n_cols_over_40pct_null: 0,
            n_constant_cols: 0,
            n_id_like_cols: 1,
            n_leak_name_cols: 0,
            imbalance_severity: None,
            imbalance_detail: None,
        }
    }

    #[test]
    fn test_unique_ratio_zero_rows() {
        let col = ColumnStats {
            name: "a".to_string(),
            kind: ColumnKind::Numeric,
            non_null_count: 0,
            null_count: 0,
            unique_count: 0,
            null_ratio: 0.0,
        };
        assert_eq!(col.unique_ratio(0), 0.0);
        assert!(col.is_constant());
    }

    #[test]
    fn test_grade_steps() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(85), Grade::A);
        assert_eq!(Grade::from_score(84), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(69), Grade::C);
        assert_eq!(Grade::from_score(55), Grade::C);
        assert_eq!(Grade::from_score(54), Grade::D);
        assert_eq!(Grade::from_score(40), Grade::D);
        assert_eq!(Grade::from_score(39), Grade::E);
        assert_eq!(Grade::from_score(0), Grade::E);
    }

    #[test]
    fn test_grade_never_improves_as_score_drops() {
        let mut previous = Grade::from_score(100);
        for score in (0..=100u8).rev() {
            let grade = Grade::from_score(score);
            assert!(grade >= previous, "score {} got {:?} after {:?}", score, grade, previous);
            previous = grade;
        }
    }

    #[test]
    fn test_summary_entries_order_without_imbalance() {
        let keys: Vec<_> = sample_summary().entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys.first(), Some(&"target"));
        assert_eq!(keys.last(), Some(&"n_leak_name_cols"));
        assert_eq!(keys.len(), 12);
    }

    #[test]
    fn test_summary_entries_include_imbalance() {
        let mut summary = sample_summary();
        summary.imbalance_severity = Some(ImbalanceSeverity::Slight);
        summary.imbalance_detail = Some("2 classes".to_string());

        let entries = summary.entries();
        assert_eq!(entries.len(), 14);
        assert_eq!(entries[12], ("imbalance_severity", "slight".to_string()));
    }

    #[test]
    fn test_summary_serialization_keys() {
        let json = serde_json::to_value(sample_summary()).expect("Should serialize");
        assert_eq!(json["target_confidence"], "high");
        assert_eq!(json["problem_type"], "classification");
        assert!(json.get("imbalance_severity").is_none());
    }

    #[test]
    fn test_viability_score_serialization() {
        let score = ViabilityScore { score: 63, grade: Grade::C };
        let json = serde_json::to_string(&score).expect("Should serialize");
        assert_eq!(json, r#"{"viability_score":63,"grade":"C"}"#);
    }
}
