//! Configuration module for vitals-tools.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vitals_tools::config::{AppConfig, ConfigPreset};
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Ci);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .force_mock(true)
//!     .min_score(Some(80))
//!     .fail_on_fetch_error(true)
//!     .build();
//!
//! // Load from file
//! use vitals_tools::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.vitals-tools.yaml` file in your project root or `~/.config/vitals-tools/`:
//!
//! ```yaml
//! source:
//!   form_factor: desktop
//! scoring:
//!   min_score: 80
//!   overrides:
//!     interaction_to_next_paint:
//!       good: 150
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{
    ConfigPreset, DEFAULT_API_BASE, DEFAULT_CI_MIN_SCORE, DEFAULT_MAX_CONCURRENT,
    DEFAULT_TIMEOUT_SECS,
};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, MetricOverride, OutputConfig, ScoringConfig,
    SourceConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError, ConfigOverrides,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.vitals-tools.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
