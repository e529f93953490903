use super::{Findings, QualityCounts};
use crate::config::AnalysisConfig;
use crate::profiler::ID_HINTS;
use crate::types::DatasetProfile;
use crate::utils::contains_any;
use tracing::debug;

/// Name fragments that suggest a column was derived from, or is, the outcome.
pub const LEAK_HINTS: [&str; 12] = [
    "label",
    "target",
    "outcome",
    "result",
    "final",
    "groundtruth",
    "truth",
    "confirmed",
    "fraud",
    "churn",
    "approved",
    "status",
];

/// Unique ratio above which an id-named feature is reported as an identifier.
const IDENTIFIER_RATIO: f64 = 0.95;

/// Runs the four independent column checks.
///
/// Every check adds either its findings or one explicit "nothing found"
/// recommendation, so no category is ever silent.
pub struct DataQualityAnalyzer<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> DataQualityAnalyzer<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Run all checks in a fixed order: nulls, constants, identifiers, leakage.
    pub fn identify_issues(
        &self,
        profile: &DatasetProfile,
        target: &str,
        findings: &mut Findings,
    ) -> QualityCounts {
        let (n_cols_over_20pct_null, n_cols_over_40pct_null) = self.check_nulls(profile, findings);
        let n_constant_cols = Self::check_constants(profile, findings);
        let n_id_like_cols = Self::check_identifiers(profile, target, findings);
        let n_leak_name_cols = Self::check_name_leakage(profile, target, findings);

        let counts = QualityCounts {
            n_cols_over_20pct_null,
            n_cols_over_40pct_null,
            n_constant_cols,
            n_id_like_cols,
            n_leak_name_cols,
        };
        debug!("Quality counters: {:?}", counts);
        counts
    }

    /// Returns (columns above the moderate threshold, columns at or above the severe one).
    fn check_nulls(&self, profile: &DatasetProfile, findings: &mut Findings) -> (usize, usize) {
        let moderate = self.config.moderate_null_threshold;
        let severe = self.config.severe_null_threshold;

        let mut by_ratio: Vec<_> = profile.columns.iter().collect();
        by_ratio.sort_by(|a, b| b.null_ratio.total_cmp(&a.null_ratio));

        let mut over_moderate = 0;
        let mut over_severe = 0;

        for col in by_ratio {
            let pct = col.null_ratio * 100.0;
            if col.null_ratio >= severe {
                over_severe += 1;
                findings.issue(format!("Column '{}' has {:.1}% null values.", col.name, pct));
                findings.recommend(format!(
                    "Consider dropping '{}' or imputing its values (median or model-based).",
                    col.name
                ));
            } else if col.null_ratio > moderate {
                findings.issue(format!(
                    "Column '{}' has {:.1}% null values (moderate).",
                    col.name, pct
                ));
                findings.recommend(format!(
                    "Evaluate imputation for '{}' and check its impact on the model.",
                    col.name
                ));
            }
            if col.null_ratio > moderate {
                over_moderate += 1;
            }
        }

        if over_moderate == 0 {
            findings.recommend("No columns with a relevant share of null values were detected.");
        }

        (over_moderate, over_severe)
    }

    fn check_constants(profile: &DatasetProfile, findings: &mut Findings) -> usize {
        let mut count = 0;

        for col in profile.columns.iter().filter(|c| c.is_constant()) {
            count += 1;
            findings.issue(format!(
                "Column '{}' is constant (nunique={}).",
                col.name, col.unique_count
            ));
            findings.recommend(format!(
                "Drop column '{}' because it carries no information.",
                col.name
            ));
        }

        if count == 0 {
            findings.recommend("No constant columns were detected in the dataset.");
        }
        count
    }

    fn check_identifiers(profile: &DatasetProfile, target: &str, findings: &mut Findings) -> usize {
        let mut count = 0;

        for col in profile.columns.iter().filter(|c| c.name != target) {
            let ratio = col.unique_ratio(profile.n_rows);
            if ratio > IDENTIFIER_RATIO && contains_any(&col.name.to_lowercase(), &ID_HINTS) {
                count += 1;
                findings.issue(format!(
                    "Column '{}' looks like an identifier (unique values: {:.1}%).",
                    col.name,
                    ratio * 100.0
                ));
                findings.recommend(format!(
                    "Exclude '{}' from training to avoid leakage.",
                    col.name
                ));
            }
        }

        if count == 0 {
            findings.recommend("No identifier-like columns were detected.");
        }
        count
    }

    fn check_name_leakage(profile: &DatasetProfile, target: &str, findings: &mut Findings) -> usize {
        let target_lower = target.to_lowercase();
        let mut count = 0;

        for col in profile.columns.iter().filter(|c| c.name != target) {
            let name_lower = col.name.to_lowercase();
            let echoes_target = !target_lower.is_empty() && name_lower.contains(&target_lower);

            if echoes_target || contains_any(&name_lower, &LEAK_HINTS) {
                count += 1;
                findings.issue(format!(
                    "Column '{}' may leak the target because of its name (review it).",
                    col.name
                ));
                findings.recommend(format!(
                    "Verify that '{}' is available before prediction time; if not, exclude it.",
                    col.name
                ));
            }
        }

        if count == 0 {
            findings.recommend("No clear signs of name-based leakage were detected.");
        }
        count
    }
}
