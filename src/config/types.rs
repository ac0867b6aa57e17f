//! Configuration types for vitals-tools operations.
//!
//! Provides structured configuration for analyze and compare operations.

use crate::crux::FormFactor;
use crate::model::MetricKey;
use crate::reports::ReportFormat;
use crate::scoring::MetricCatalog;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{DEFAULT_API_BASE, DEFAULT_MAX_CONCURRENT, DEFAULT_TIMEOUT_SECS};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// This is the top-level configuration struct that aggregates all configuration
/// options. It can be constructed from CLI arguments, config files, or both
/// (with CLI overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Field data source configuration (API key, form factor, concurrency)
    pub source: SourceConfig,
    /// Scoring configuration (threshold overrides, gates)
    pub scoring: ScoringConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Force mock field data.
    pub const fn force_mock(mut self, force: bool) -> Self {
        self.config.source.force_mock = force;
        self
    }

    /// Set the form factor to query.
    pub const fn form_factor(mut self, form_factor: FormFactor) -> Self {
        self.config.source.form_factor = form_factor;
        self
    }

    /// Set the maximum number of concurrent fetches.
    pub const fn max_concurrent(mut self, max: usize) -> Self {
        self.config.source.max_concurrent = max;
        self
    }

    /// Set the minimum passing overall score.
    pub const fn min_score(mut self, min: Option<u8>) -> Self {
        self.config.scoring.min_score = min;
        self
    }

    /// Override thresholds or weight for one metric.
    pub fn metric_override(mut self, key: MetricKey, value: MetricOverride) -> Self {
        self.config.scoring.overrides.insert(key, value);
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Exit with a distinct code when any URL fails to fetch.
    pub const fn fail_on_fetch_error(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_fetch_error = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Field data source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SourceConfig {
    /// Google API key for the Chrome UX Report API. Without one, mock data is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Always use mock data, even when an API key is configured
    pub force_mock: bool,
    /// Device class to query
    pub form_factor: FormFactor,
    /// Query endpoint
    pub api_base: String,
    /// Request timeout in seconds
    #[schemars(range(min = 1))]
    pub timeout_secs: u64,
    /// Maximum concurrent fetches for multi-URL comparisons
    #[schemars(range(min = 1))]
    pub max_concurrent: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            force_mock: false,
            form_factor: FormFactor::Phone,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

/// Partial override of one metric's thresholds or weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MetricOverride {
    /// Values at or below this score 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good: Option<f64>,
    /// Values above this fall below 50
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_improvement: Option<f64>,
    /// Relative weight in the overall score (all weights must sum to 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub weight: Option<f64>,
}

/// Scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Per-metric threshold and weight overrides, keyed by metric name
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub overrides: IndexMap<MetricKey, MetricOverride>,
    /// Exit with code 1 when any overall score is below this value
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 100))]
    pub min_score: Option<u8>,
}

impl ScoringConfig {
    /// Build the metric catalog with overrides applied.
    ///
    /// The result is not validated; see [`Validatable`](super::Validatable).
    #[must_use]
    pub fn catalog(&self) -> MetricCatalog {
        let mut catalog = MetricCatalog::web_vitals();
        for (key, value) in &self.overrides {
            catalog.override_metric(*key, value.good, value.needs_improvement, value.weight);
        }
        catalog
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Include per-metric recommendations in the summary view
    pub show_recommendations: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
            show_recommendations: false,
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 2 if any URL fails to fetch
    pub fail_on_fetch_error: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}
