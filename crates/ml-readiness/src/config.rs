//! Configuration types for the readiness analysis.
//!
//! Defaults reproduce the stock heuristics exactly; the builder exists so
//! wrappers can pin a target column or tune the null/cardinality cut-offs.

use serde::{Deserialize, Serialize};

/// Default upper bound on distinct values for a column to be treated as classes.
pub const DEFAULT_MAX_CLASS_CARDINALITY: usize = 20;

/// Default null ratio above which a column is flagged as moderately incomplete.
pub const DEFAULT_MODERATE_NULL_THRESHOLD: f64 = 0.20;

/// Default null ratio from which a column is flagged as severely incomplete.
pub const DEFAULT_SEVERE_NULL_THRESHOLD: f64 = 0.40;

/// Configuration for a readiness analysis.
///
/// Use [`AnalysisConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use ml_readiness::config::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .target_column("churned")
///     .severe_null_threshold(0.5)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Explicitly specified target column.
    /// If None (or the column is missing), the target is discovered automatically.
    /// Default: None
    pub target_column: Option<String>,

    /// Columns with a null ratio strictly above this value are reported as moderate.
    /// Default: 0.20
    pub moderate_null_threshold: f64,

    /// Columns with a null ratio at or above this value are reported as severe.
    /// Default: 0.40
    pub severe_null_threshold: f64,

    /// Columns with at most this many distinct values count as low cardinality
    /// during target discovery and as classification targets.
    /// Default: 20
    pub max_class_cardinality: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_column: None,
            moderate_null_threshold: DEFAULT_MODERATE_NULL_THRESHOLD,
            severe_null_threshold: DEFAULT_SEVERE_NULL_THRESHOLD,
            max_class_cardinality: DEFAULT_MAX_CLASS_CARDINALITY,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, value) in [
            ("moderate_null_threshold", self.moderate_null_threshold),
            ("severe_null_threshold", self.severe_null_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::InvalidThreshold {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if self.moderate_null_threshold >= self.severe_null_threshold {
            return Err(ConfigValidationError::InvertedNullThresholds {
                moderate: self.moderate_null_threshold,
                severe: self.severe_null_threshold,
            });
        }

        if self.max_class_cardinality == 0 {
            return Err(ConfigValidationError::InvalidCardinality(
                self.max_class_cardinality,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid threshold for '{field}': {value} (must be between 0.0 and 1.0)")]
    InvalidThreshold { field: String, value: f64 },

    #[error("Moderate null threshold {moderate} must be below severe threshold {severe}")]
    InvertedNullThresholds { moderate: f64, severe: f64 },

    #[error("Invalid class cardinality: {0} (must be at least 1)")]
    InvalidCardinality(usize),
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    target_column: Option<String>,
    moderate_null_threshold: Option<f64>,
    severe_null_threshold: Option<f64>,
    max_class_cardinality: Option<usize>,
}

impl AnalysisConfigBuilder {
    /// Set an explicit target column.
    ///
    /// If not set, or if the column does not exist, the target is auto-detected.
    pub fn target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = Some(column.into());
        self
    }

    /// Set the null ratio above which a column is reported as moderately incomplete.
    ///
    /// # Arguments
    /// * `threshold` - Value between 0.0 and 1.0 (e.g., 0.2 = 20%)
    pub fn moderate_null_threshold(mut self, threshold: f64) -> Self {
        self.moderate_null_threshold = Some(threshold);
        self
    }

    /// Set the null ratio from which a column is reported as severely incomplete.
    ///
    /// # Arguments
    /// * `threshold` - Value between 0.0 and 1.0 (e.g., 0.4 = 40%)
    pub fn severe_null_threshold(mut self, threshold: f64) -> Self {
        self.severe_null_threshold = Some(threshold);
        self
    }

    /// Set the largest distinct-value count still treated as a class set.
    pub fn max_class_cardinality(mut self, cardinality: usize) -> Self {
        self.max_class_cardinality = Some(cardinality);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let config = AnalysisConfig {
            target_column: self.target_column,
            moderate_null_threshold: self
                .moderate_null_threshold
                .unwrap_or(DEFAULT_MODERATE_NULL_THRESHOLD),
            severe_null_threshold: self
                .severe_null_threshold
                .unwrap_or(DEFAULT_SEVERE_NULL_THRESHOLD),
            max_class_cardinality: self
                .max_class_cardinality
                .unwrap_or(DEFAULT_MAX_CLASS_CARDINALITY),
        };

        config.validate()?;
        Ok(config)
    }
}
