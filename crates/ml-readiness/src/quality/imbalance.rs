//! Class imbalance assessment for classification targets.

use super::Findings;
use crate::types::{ImbalanceAssessment, ImbalanceSeverity};
use tracing::debug;

/// Descending `rel` thresholds; anything below the last one is extreme.
const SEVERITY_THRESHOLDS: [(f64, ImbalanceSeverity); 4] = [
    (0.80, ImbalanceSeverity::Balanced),
    (0.60, ImbalanceSeverity::Slight),
    (0.40, ImbalanceSeverity::Clear),
    (0.25, ImbalanceSeverity::Severe),
];

/// Measures how far the minority class falls below a uniform split.
pub struct ImbalanceAssessor;

impl ImbalanceAssessor {
    /// Assess severity from the non-null count of each class.
    ///
    /// `rel` is the minority frequency divided by the ideal `1/k`, so a
    /// perfectly uniform target scores 1.0.
    pub fn assess(class_counts: &[usize]) -> ImbalanceAssessment {
        let counts: Vec<usize> = class_counts.iter().copied().filter(|&c| c > 0).collect();
        let k = counts.len();

        if k <= 1 {
            return ImbalanceAssessment {
                severity: ImbalanceSeverity::Unclassifiable,
                detail: format!("Only {} class in the target.", k),
            };
        }

        let total: usize = counts.iter().sum();
        let minority = counts.iter().copied().min().unwrap_or(0);

        let min_freq = minority as f64 / total as f64;
        let ideal = 1.0 / k as f64;
        let rel = (minority * k) as f64 / total as f64;

        let severity = SEVERITY_THRESHOLDS
            .iter()
            .find(|(threshold, _)| rel >= *threshold)
            .map(|(_, severity)| *severity)
            .unwrap_or(ImbalanceSeverity::Extreme);

        let detail = format!(
            "{} classes | minority {:.2}% | ideal {:.2}% | ratio vs ideal {:.2}",
            k,
            min_freq * 100.0,
            ideal * 100.0,
            rel
        );
        debug!("Imbalance rel={:.4} -> {}", rel, severity);

        ImbalanceAssessment { severity, detail }
    }

    /// Assessment for a target whose values cannot be grouped into classes.
    pub fn uncountable(target: &str) -> ImbalanceAssessment {
        ImbalanceAssessment {
            severity: ImbalanceSeverity::Unclassifiable,
            detail: format!("Values of '{}' cannot be grouped into classes.", target),
        }
    }

    /// Translate an assessment into findings.
    pub fn report(assessment: &ImbalanceAssessment, findings: &mut Findings) {
        match assessment.severity {
            ImbalanceSeverity::Balanced => {
                findings.recommend(
                    "The target is reasonably balanced. Focus on feature engineering, model selection and cross-validation.",
                );
            }
            ImbalanceSeverity::Unclassifiable => {
                findings.issue(format!(
                    "Target has no usable class structure. {}",
                    assessment.detail
                ));
                findings.recommend(
                    "Review the target choice: a single-class column cannot train a classifier.",
                );
            }
            severity => {
                findings.issue(format!(
                    "Target is imbalanced ({}). {}",
                    severity, assessment.detail
                ));
                findings.recommend(
                    "Use class weights or focal loss and evaluate with recall, F1 and PR-AUC.",
                );
                findings.recommend("Consider SMOTE/undersampling and stratified validation.");
            }
        }
    }
}
