//! **A library for scoring Core Web Vitals field data.**
//!
//! `vitals-tools` fetches real-user performance data (Largest Contentful
//! Paint, Cumulative Layout Shift, First Contentful Paint and Interaction
//! to Next Paint) from the Chrome UX Report, scores each metric on a 0-100
//! scale, combines them into a weighted overall score with a letter grade,
//! and produces prioritized recommendations. Batches of URLs are rolled up
//! into cross-URL insights.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Metric keys, per-metric observations and the per-URL
//!   [`UrlAnalysis`] outcome, which carries fetch failures as data.
//! - **[`scoring`]**: The [`MetricCatalog`], the [`PerformanceScorer`] and
//!   the [`InsightsAggregator`]. Pure and synchronous.
//! - **[`crux`]**: Field data sources. The live Chrome UX Report client
//!   (feature `live`) and a deterministic mock, plus parallel fan-out.
//! - **[`pipeline`]**: Fetch → score → summarize → report orchestration.
//! - **[`reports`]**: Summary, JSON, CSV and plain-text renderers.
//! - **[`config`]**: YAML configuration, presets and validation.
//!
//! ## Scoring observations
//!
//! ```
//! use vitals_tools::model::{MetricKey, MetricObservation, Observations};
//! use vitals_tools::PerformanceScorer;
//!
//! let mut observations = Observations::new();
//! observations.insert(MetricKey::LargestContentfulPaint, MetricObservation::from_p75(5000.0));
//! observations.insert(MetricKey::CumulativeLayoutShift, MetricObservation::from_p75(0.05));
//!
//! let result = PerformanceScorer::default().score(&observations).unwrap();
//! // (38 * 0.4 + 100 * 0.3) / 0.7
//! assert_eq!(result.overall_score, 65);
//! assert_eq!(result.recommendations.len(), 1);
//! ```
//!
//! ## Analyzing a batch
//!
//! ```
//! use vitals_tools::{pipeline::analyze_urls, AppConfig};
//!
//! let config = AppConfig::builder().force_mock(true).build();
//! let urls = vec!["example.com".to_string(), "example.org".to_string()];
//! let outcome = analyze_urls(&config, &urls).unwrap();
//!
//! let insights = outcome.report.insights.unwrap();
//! assert_eq!(insights.url_scores.len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `live` (default): the Chrome UX Report HTTP client. Without it every
//!   fetch uses mock data.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Score math converts between f64 and u8/usize; values are clamped first
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod crux;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, OutputConfig, ScoringConfig, SourceConfig};
pub use config::{ConfigError, Validatable};
pub use crux::{fetch_all, select_source, FetchStats, MockSource, VitalsSource};
pub use error::{ErrorContext, Result, VitalsError};
pub use model::{MetricKey, MetricObservation, Observations, UrlAnalysis};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{
    InsightsAggregator, InsightsResult, MetricCatalog, PerformanceGrade, PerformanceScoreResult,
    PerformanceScorer,
};
