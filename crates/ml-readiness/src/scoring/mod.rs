//! Viability scoring.
//!
//! Reduces an [`AnalysisSummary`] to a single 0-100 score with a letter
//! grade. Every penalty is linear in its counter, and the result is
//! clamped so that heavily defective datasets bottom out at 0.

use crate::types::{AnalysisSummary, Grade, ImbalanceSeverity, ViabilityScore};
use tracing::info;

const MAX_SCORE: i64 = 100;

/// Penalty per column at or above the severe null threshold.
const SEVERE_NULL_PENALTY: i64 = 15;
/// Penalty per column that is only moderately null.
const MODERATE_NULL_PENALTY: i64 = 5;
const CONSTANT_PENALTY: i64 = 5;
const IDENTIFIER_PENALTY: i64 = 7;
const LEAKAGE_PENALTY: i64 = 7;

/// Deduction for the imbalance severity, if any was assessed.
fn imbalance_penalty(severity: Option<ImbalanceSeverity>) -> i64 {
    match severity {
        Some(ImbalanceSeverity::Slight) => 5,
        Some(ImbalanceSeverity::Clear) => 10,
        Some(ImbalanceSeverity::Severe) => 20,
        Some(ImbalanceSeverity::Extreme) => 30,
        Some(ImbalanceSeverity::Balanced | ImbalanceSeverity::Unclassifiable) | None => 0,
    }
}

/// Scores a finished summary. Stateless.
pub struct ViabilityScorer;

impl ViabilityScorer {
    pub fn score(summary: &AnalysisSummary) -> ViabilityScore {
        let deductions = Self::deductions(summary);
        let score = (MAX_SCORE - deductions).clamp(0, MAX_SCORE) as u8;
        let grade = Grade::from_score(score);

        info!(
            "Viability score: {}/100 (grade {}, deductions {})",
            score, grade, deductions
        );

        ViabilityScore { score, grade }
    }

    fn deductions(summary: &AnalysisSummary) -> i64 {
        let severe = summary.n_cols_over_40pct_null as i64;
        // the 20% bucket includes the 40% one
        let moderate_only = (summary.n_cols_over_20pct_null as i64 - severe).max(0);

        SEVERE_NULL_PENALTY * severe
            + MODERATE_NULL_PENALTY * moderate_only
            + CONSTANT_PENALTY * summary.n_constant_cols as i64
            + IDENTIFIER_PENALTY * summary.n_id_like_cols as i64
            + LEAKAGE_PENALTY * summary.n_leak_name_cols as i64
            + imbalance_penalty(summary.imbalance_severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Confidence, ProblemType};

    fn summary() -> AnalysisSummary {
        AnalysisSummary {
            target: "label".to_string(),
            target_reason: "matches target hint ('label')".to_string(),
            target_confidence: Confidence::High,
            problem_type: ProblemType::Classification,
            problem_reason: "few distinct values".to_string(),
            n_rows: 1000,
            n_cols: 3,
            n_cols_over_20pct_null: 0,
            n_cols_over_40pct_null: 0,
            n_constant_cols: 0,
            n_id_like_cols: 0,
            n_leak_name_cols: 0,
            imbalance_severity: Some(ImbalanceSeverity::Balanced),
            imbalance_detail: None,
        }
    }

    #[test]
    fn test_clean_dataset_scores_full_marks() {
        let score = ViabilityScorer::score(&summary());
        assert_eq!(score.score, 100);
        assert_eq!(score.grade, Grade::A);
    }

    #[test]
    fn test_identifier_and_extreme_imbalance() {
        let mut s = summary();
        s.n_id_like_cols = 1;
        s.imbalance_severity = Some(ImbalanceSeverity::Extreme);

        let score = ViabilityScorer::score(&s);
        assert_eq!(score.score, 63);
        assert_eq!(score.grade, Grade::C);
    }

    #[test]
    fn test_null_buckets_do_not_double_count() {
        let mut s = summary();
        s.n_cols_over_20pct_null = 3;
        s.n_cols_over_40pct_null = 1;

        // 15 for the severe column, 5 each for the two moderate ones
        assert_eq!(ViabilityScorer::score(&s).score, 75);
    }

    #[test]
    fn test_inconsistent_null_buckets_floor_at_zero_penalty() {
        let mut s = summary();
        s.n_cols_over_20pct_null = 0;
        s.n_cols_over_40pct_null = 2;

        assert_eq!(ViabilityScorer::score(&s).score, 70);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let mut s = summary();
        s.n_constant_cols = 50;

        let score = ViabilityScorer::score(&s);
        assert_eq!(score.score, 0);
        assert_eq!(score.grade, Grade::E);
    }

    #[test]
    fn test_imbalance_penalties() {
        let cases = [
            (Some(ImbalanceSeverity::Slight), 95),
            (Some(ImbalanceSeverity::Clear), 90),
            (Some(ImbalanceSeverity::Severe), 80),
            (Some(ImbalanceSeverity::Unclassifiable), 100),
            (None, 100),
        ];
        for (severity, expected) in cases {
            let mut s = summary();
            s.imbalance_severity = severity;
            assert_eq!(ViabilityScorer::score(&s).score, expected, "{:?}", severity);
        }
    }

    #[test]
    fn test_grade_boundaries() {
        let mut s = summary();
        s.n_leak_name_cols = 2; // -14
        s.n_constant_cols = 1; // -5
        assert_eq!(ViabilityScorer::score(&s).grade, Grade::B); // 81

        s.n_constant_cols = 0;
        s.n_leak_name_cols = 0;
        s.n_cols_over_20pct_null = 3;
        s.n_cols_over_40pct_null = 3; // -45
        assert_eq!(ViabilityScorer::score(&s).grade, Grade::C); // 55

        s.n_constant_cols = 1;
        assert_eq!(ViabilityScorer::score(&s).grade, Grade::D); // 50
    }
}
