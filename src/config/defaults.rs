//! Default configurations and presets for vitals-tools.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, BehaviorConfig, OutputConfig, ScoringConfig, SourceConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default settings: live data when a key is configured, terminal output
    Default,
    /// CI: JSON output, no color, fail on fetch errors and low scores
    Ci,
    /// Offline: always use mock data, never touch the network
    Offline,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
            Self::Offline => "offline",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            "offline" | "mock" => Some(Self::Offline),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Live field data when an API key is set, terminal summary output",
            Self::Ci => "JSON output with failure exit codes for pipelines",
            Self::Offline => "Deterministic mock field data, no network access",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Ci, Self::Offline]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self::ci_preset(),
            ConfigPreset::Offline => Self::offline_preset(),
        }
    }

    /// CI preset.
    ///
    /// - JSON output, no color
    /// - Fail when any URL cannot be fetched
    /// - Fail when any overall score is below 50
    #[must_use]
    pub fn ci_preset() -> Self {
        Self {
            source: SourceConfig::default(),
            scoring: ScoringConfig {
                min_score: Some(DEFAULT_CI_MIN_SCORE),
                ..ScoringConfig::default()
            },
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on_fetch_error: true,
                quiet: true,
            },
        }
    }

    /// Offline preset: mock data only.
    #[must_use]
    pub fn offline_preset() -> Self {
        Self {
            source: SourceConfig {
                force_mock: true,
                ..SourceConfig::default()
            },
            ..Self::default()
        }
    }
}

// ============================================================================
// Default Values
// ============================================================================

/// Default CrUX query endpoint.
pub const DEFAULT_API_BASE: &str =
    "https://chromeuxreport.googleapis.com/v1/records:queryRecord";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum concurrent fetches.
pub const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Minimum passing score used by the CI preset.
pub const DEFAULT_CI_MIN_SCORE: u8 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(ConfigPreset::Default.name(), "default");
        assert_eq!(ConfigPreset::Ci.name(), "ci");
        assert_eq!(ConfigPreset::Offline.name(), "offline");
    }

    #[test]
    fn test_preset_from_name() {
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::Ci));
        assert_eq!(ConfigPreset::from_name("pipeline"), Some(ConfigPreset::Ci));
        assert_eq!(ConfigPreset::from_name("mock"), Some(ConfigPreset::Offline));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_ci_preset() {
        let config = AppConfig::ci_preset();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
        assert!(config.behavior.fail_on_fetch_error);
        assert_eq!(config.scoring.min_score, Some(DEFAULT_CI_MIN_SCORE));
    }

    #[test]
    fn test_offline_preset() {
        let config = AppConfig::offline_preset();
        assert!(config.source.force_mock);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_all_presets() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
            assert!(!preset.description().is_empty());
            let _ = AppConfig::from_preset(*preset);
        }
    }
}
