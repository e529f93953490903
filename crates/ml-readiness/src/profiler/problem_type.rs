//! Classification vs. regression decision for the chosen target.

use crate::config::AnalysisConfig;
use crate::types::{ColumnStats, ProblemType};
use tracing::debug;

/// Decides the learning task from the target column's cardinality and kind.
pub struct ProblemTypeClassifier<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> ProblemTypeClassifier<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Few distinct values means classes; many non-numeric values are still
    /// classes; everything else is regression.
    pub fn classify(&self, target: &ColumnStats) -> (ProblemType, String) {
        let unique = target.unique_count;

        let decision = if unique <= self.config.max_class_cardinality {
            (
                ProblemType::Classification,
                format!(
                    "the target has few distinct values (nunique={}) and does not represent a continuous magnitude",
                    unique
                ),
            )
        } else if !target.kind.is_numeric() {
            (
                ProblemType::Classification,
                "non-numeric target".to_string(),
            )
        } else {
            (
                ProblemType::Regression,
                format!("numeric target with many unique values (nunique={})", unique),
            )
        };

        debug!("Target '{}' treated as {}", target.name, decision.0);
        decision
    }
}
