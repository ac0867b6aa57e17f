//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::crux::FormFactor;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".vitals-tools.yaml",
    ".vitals-tools.yml",
    "vitals-tools.yaml",
    "vitals-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/vitals-tools/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    // 1. Use explicit path if provided
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    // 2. Search current directory
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    // 3. Search git root (if in a repo)
    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    // 4. Search user config directory
    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("vitals-tools")) {
            return Some(path);
        }
    }

    // 5. Search home directory
    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

/// Settings given explicitly on the command line.
///
/// Every `Some` value replaces the file setting, even when it equals the
/// built-in default. Flags can only switch a setting on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub force_mock: bool,
    pub form_factor: Option<FormFactor>,
    pub timeout_secs: Option<u64>,
    pub max_concurrent: Option<usize>,
    pub min_score: Option<u8>,
    pub format: Option<ReportFormat>,
    pub file: Option<PathBuf>,
    pub no_color: bool,
    pub show_recommendations: bool,
    pub fail_on_fetch_error: bool,
    pub quiet: bool,
}

impl AppConfig {
    /// Layer command-line overrides over this config.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if overrides.api_key.is_some() {
            self.source.api_key.clone_from(&overrides.api_key);
        }
        if let Some(form_factor) = overrides.form_factor {
            self.source.form_factor = form_factor;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.source.timeout_secs = timeout;
        }
        if let Some(max) = overrides.max_concurrent {
            self.source.max_concurrent = max;
        }
        if overrides.min_score.is_some() {
            self.scoring.min_score = overrides.min_score;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.file.is_some() {
            self.output.file.clone_from(&overrides.file);
        }

        self.source.force_mock |= overrides.force_mock;
        self.output.no_color |= overrides.no_color;
        self.output.show_recommendations |= overrides.show_recommendations;
        self.behavior.fail_on_fetch_error |= overrides.fail_on_fetch_error;
        self.behavior.quiet |= overrides.quiet;
    }

    /// Load from file and apply CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# Web Vitals Configuration
# Place this file at .vitals-tools.yaml in your project root or ~/.config/vitals-tools/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# Web Vitals Configuration File
# =============================
#
# This file configures vitals-tools behavior. Place it at:
#   - .vitals-tools.yaml in your project root
#   - ~/.config/vitals-tools/vitals-tools.yaml for global config
#
# CLI arguments always override file settings.

# Field data source
source:
  # Chrome UX Report API key. Without one, mock data is used.
  # Prefer the CRUX_API_KEY environment variable over storing it here.
  # api_key: your_google_api_key_here
  # Always use mock data
  force_mock: false
  # Device class: phone, desktop, tablet, all
  form_factor: phone
  api_base: https://chromeuxreport.googleapis.com/v1/records:queryRecord
  # Request timeout in seconds
  timeout_secs: 30
  # Maximum concurrent fetches when comparing URLs
  max_concurrent: 5

# Scoring
scoring:
  # Exit with code 1 when any overall score is below this value
  # min_score: 80
  # Per-metric overrides. Weights across all four metrics must sum to 1.0.
  # overrides:
  #   largest_contentful_paint:
  #     good: 2500
  #     needs_improvement: 4000
  #     weight: 0.4
  #   cumulative_layout_shift:
  #     good: 0.1
  #     needs_improvement: 0.25
  #     weight: 0.3
  overrides: {}

# Output configuration
output:
  # Format: auto, summary, json, csv, text
  format: auto
  # Output file path (omit for stdout)
  # file: report.json
  # Disable colored output
  no_color: false
  # Show per-metric recommendations in the summary view
  show_recommendations: false

# Behavior flags
behavior:
  # Exit with code 2 if any URL fails to fetch
  fail_on_fetch_error: false
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
