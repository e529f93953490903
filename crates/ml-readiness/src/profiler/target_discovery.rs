//! Target column discovery.
//!
//! Two phases: an exact name match against a priority list of target hints,
//! then a scoring pass over every remaining column. All hint lists are ordered
//! slices so the outcome never depends on hashing.

use crate::config::AnalysisConfig;
use crate::types::{ColumnStats, Confidence, DatasetProfile, TargetSelection};
use crate::utils::{contains_any, first_contained_hint};
use tracing::{debug, info, warn};

/// Exact target names, highest priority first.
pub const TARGET_HINTS: [&str; 7] = [
    "target", "label", "y", "class", "outcome", "output", "response",
];

/// Name fragments typical of descriptive features rather than outcomes.
pub const NEGATIVE_HINTS: [&str; 9] = [
    "gender", "sex", "city", "country", "state", "zip", "postal", "email", "name",
];

/// Name fragments typical of row identifiers.
pub const ID_HINTS: [&str; 5] = ["id", "uuid", "code", "number", "index"];

/// Name fragments suggesting a measured outcome.
pub const OUTCOME_HINTS: [&str; 7] = [
    "result", "score", "price", "amount", "cost", "outcome", "response",
];

/// Unique ratio above which an id-named column is never a target candidate.
const CANDIDATE_ID_RATIO: f64 = 0.98;

/// Winning score needed for high confidence.
const HIGH_CONFIDENCE_SCORE: i32 = 4;
/// Winning score needed for medium confidence.
const MEDIUM_CONFIDENCE_SCORE: i32 = 2;

/// Picks the column most likely to be the supervised-learning target.
pub struct TargetDiscoverer<'a> {
    config: &'a AnalysisConfig,
}

struct Candidate<'p> {
    column: &'p ColumnStats,
    score: i32,
    reasons: Vec<String>,
}

impl<'a> TargetDiscoverer<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Choose a target column.
    ///
    /// Always returns a column present in the profile as long as the profile
    /// has at least one column.
    pub fn discover(&self, profile: &DatasetProfile) -> Option<TargetSelection> {
        if let Some(selection) = self.explicit_target(profile) {
            return Some(selection);
        }

        if let Some(selection) = Self::match_target_hint(profile) {
            info!("Target '{}' matched by name", selection.column);
            return Some(selection);
        }

        let last = profile.columns.last()?;

        let selection = match self.best_candidate(profile) {
            Some(best) => {
                let reasons = if best.reasons.is_empty() {
                    "general heuristic".to_string()
                } else {
                    best.reasons.join("; ")
                };
                TargetSelection {
                    column: best.column.name.clone(),
                    reason: format!("scoring selection: {} | score={}", reasons, best.score),
                    confidence: Self::confidence_for(best.score),
                }
            }
            None => {
                warn!("No target candidate survived scoring, using last column");
                TargetSelection {
                    column: last.name.clone(),
                    reason: "fallback: last column (no valid candidates)".to_string(),
                    confidence: Confidence::Low,
                }
            }
        };

        info!(
            "Target '{}' selected with {} confidence",
            selection.column, selection.confidence
        );
        Some(selection)
    }

    fn explicit_target(&self, profile: &DatasetProfile) -> Option<TargetSelection> {
        let target = self.config.target_column.as_ref()?;

        if profile.column(target).is_some() {
            info!("Using explicitly specified target column: {}", target);
            Some(TargetSelection {
                column: target.clone(),
                reason: "user-specified".to_string(),
                confidence: Confidence::High,
            })
        } else {
            warn!(
                "Specified target column '{}' not found in dataset, falling back to auto-detection",
                target
            );
            None
        }
    }

    /// Phase 1: hints are tried in priority order, columns in dataset order.
    fn match_target_hint(profile: &DatasetProfile) -> Option<TargetSelection> {
        TARGET_HINTS.iter().find_map(|hint| {
            profile
                .columns
                .iter()
                .find(|col| col.name.to_lowercase() == *hint)
                .map(|col| TargetSelection {
                    column: col.name.clone(),
                    reason: format!("matches target hint ('{}')", hint),
                    confidence: Confidence::High,
                })
        })
    }

    /// Phase 2: the first column reaching the maximum score wins.
    fn best_candidate<'p>(&self, profile: &'p DatasetProfile) -> Option<Candidate<'p>> {
        let mut best: Option<Candidate<'p>> = None;

        for (position, column) in profile.columns.iter().enumerate() {
            let Some(candidate) = self.score_column(profile, position, column) else {
                continue;
            };
            debug!(
                "Target candidate '{}' scored {}",
                candidate.column.name, candidate.score
            );

            if best.as_ref().is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        best
    }

    fn score_column<'p>(
        &self,
        profile: &DatasetProfile,
        position: usize,
        column: &'p ColumnStats,
    ) -> Option<Candidate<'p>> {
        let name_lower = column.name.to_lowercase();
        let unique = column.unique_count;
        let unique_ratio = column.unique_ratio(profile.n_rows);

        if column.is_constant() {
            debug!("Skipping constant column '{}'", column.name);
            return None;
        }
        if unique_ratio > CANDIDATE_ID_RATIO && contains_any(&name_lower, &ID_HINTS) {
            debug!("Skipping identifier column '{}'", column.name);
            return None;
        }

        let mut score = 0;
        let mut reasons = Vec::new();

        if let Some(hint) = first_contained_hint(&name_lower, &NEGATIVE_HINTS) {
            score -= 3;
            reasons.push(format!("typical feature name ('{}') (-3)", hint));
        }

        let n_cols = profile.n_cols();
        if position + 1 == n_cols {
            score += 2;
            reasons.push("last column (+2)".to_string());
        } else if position >= n_cols.saturating_sub(3) {
            score += 1;
            reasons.push("near the end (+1)".to_string());
        }

        if unique <= self.config.max_class_cardinality {
            score += 3;
            reasons.push(format!("low cardinality (nunique={}) (+3)", unique));
        } else if column.kind.is_numeric() {
            if unique_ratio < CANDIDATE_ID_RATIO {
                score += 2;
                reasons.push(format!("numeric with high cardinality (nunique={}) (+2)", unique));
            } else {
                score -= 2;
                reasons.push("quasi-unique per row, possible identifier (-2)".to_string());
            }
        } else {
            score -= 1;
            reasons.push("non-numeric with high cardinality (-1)".to_string());
        }

        if contains_any(&name_lower, &OUTCOME_HINTS) {
            score += 1;
            reasons.push("name suggests an outcome (+1)".to_string());
        }

        Some(Candidate {
            column,
            score,
            reasons,
        })
    }

    fn confidence_for(score: i32) -> Confidence {
        if score >= HIGH_CONFIDENCE_SCORE {
            Confidence::High
        } else if score >= MEDIUM_CONFIDENCE_SCORE {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}
