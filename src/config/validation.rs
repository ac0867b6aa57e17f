//! Configuration validation for vitals-tools.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BehaviorConfig, OutputConfig, ScoringConfig, SourceConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.source.validate());
        errors.extend(self.scoring.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for SourceConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.timeout_secs == 0 {
            errors.push(ConfigError {
                field: "source.timeout_secs".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }
        if self.max_concurrent == 0 {
            errors.push(ConfigError {
                field: "source.max_concurrent".to_string(),
                message: "Max concurrent must be at least 1".to_string(),
            });
        }
        if url::Url::parse(&self.api_base).is_err() {
            errors.push(ConfigError {
                field: "source.api_base".to_string(),
                message: format!("Invalid endpoint URL '{}'", self.api_base),
            });
        }

        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(min) = self.min_score {
            if min > 100 {
                errors.push(ConfigError {
                    field: "scoring.min_score".to_string(),
                    message: format!("Minimum score must be between 0 and 100, got {min}"),
                });
            }
        }

        for (key, value) in &self.overrides {
            for (name, threshold) in [
                ("good", value.good),
                ("needs_improvement", value.needs_improvement),
            ] {
                if let Some(t) = threshold {
                    if !t.is_finite() || t <= 0.0 {
                        errors.push(ConfigError {
                            field: format!("scoring.overrides.{key}.{name}"),
                            message: format!("Threshold must be a positive number, got {t}"),
                        });
                    }
                }
            }
            if let Some(weight) = value.weight {
                if !(0.0..=1.0).contains(&weight) {
                    errors.push(ConfigError {
                        field: format!("scoring.overrides.{key}.weight"),
                        message: format!("Weight must be between 0.0 and 1.0, got {weight}"),
                    });
                }
            }
        }

        if errors.is_empty() {
            if let Err(err) = self.catalog().validate() {
                let message = match err.scoring_kind() {
                    Some(kind) => kind.to_string(),
                    None => err.to_string(),
                };
                errors.push(ConfigError {
                    field: "scoring.overrides".to_string(),
                    message,
                });
            }
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MetricOverride;
    use crate::model::MetricKey;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_source_config_validation() {
        let invalid = SourceConfig {
            timeout_secs: 0,
            max_concurrent: 0,
            api_base: "not a url".to_string(),
            ..SourceConfig::default()
        };
        let errors = invalid.validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, "source.timeout_secs");
    }

    #[test]
    fn test_min_score_out_of_range() {
        let config = ScoringConfig {
            min_score: Some(101),
            ..ScoringConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_override_inverted_thresholds() {
        let mut config = ScoringConfig::default();
        config.overrides.insert(
            MetricKey::FirstContentfulPaint,
            MetricOverride {
                good: Some(3500.0),
                ..MetricOverride::default()
            },
        );
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scoring.overrides");
    }

    #[test]
    fn test_override_weights_must_sum_to_one() {
        let mut config = ScoringConfig::default();
        config.overrides.insert(
            MetricKey::LargestContentfulPaint,
            MetricOverride {
                weight: Some(0.5),
                ..MetricOverride::default()
            },
        );
        assert!(!config.is_valid());

        config.overrides.insert(
            MetricKey::CumulativeLayoutShift,
            MetricOverride {
                weight: Some(0.2),
                ..MetricOverride::default()
            },
        );
        assert!(config.is_valid());
    }

    #[test]
    fn test_override_negative_threshold() {
        let mut config = ScoringConfig::default();
        config.overrides.insert(
            MetricKey::InteractionToNextPaint,
            MetricOverride {
                needs_improvement: Some(-1.0),
                ..MetricOverride::default()
            },
        );
        let errors = config.validate();
        assert_eq!(
            errors[0].field,
            "scoring.overrides.interaction_to_next_paint.needs_improvement"
        );
    }

    #[test]
    fn test_output_missing_parent_dir() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/definitely/not/here/report.json")),
            ..OutputConfig::default()
        };
        assert!(!config.is_valid());
    }
}
