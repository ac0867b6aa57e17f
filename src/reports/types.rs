//! Report type definitions.

use crate::model::UrlAnalysis;
use crate::scoring::{InsightsResult, MetricCatalog, PerformanceScoreResult};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Attribution used in every export.
pub const DATA_SOURCE: &str = "Google Chrome UX Report";

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary if TTY, JSON otherwise
    #[default]
    Auto,
    /// Terminal summary with scores, grades and insights
    Summary,
    /// Structured JSON export
    Json,
    /// CSV for spreadsheet import
    Csv,
    /// Plain-text performance report
    Text,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include per-metric recommendations in human-readable output
    pub show_recommendations: bool,
    /// Title for the report
    pub title: Option<String>,
    /// Thresholds used to rate raw values in human-readable output
    #[serde(skip)]
    pub catalog: MetricCatalog,
}

/// Metadata included in reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Name of the field data source that produced the entries
    pub source_name: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            source_name: source_name.into(),
        }
    }
}

/// One analyzed URL with its score (absent when the fetch failed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub analysis: UrlAnalysis,
    pub score: Option<PerformanceScoreResult>,
}

/// Everything a reporter renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub entries: Vec<ReportEntry>,
    /// Cross-URL insights, only for multi-URL comparisons
    pub insights: Option<InsightsResult>,
}

impl AnalysisReport {
    /// Whether any successful entry carries synthetic data.
    #[must_use]
    pub fn has_mock_data(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.analysis.success && e.analysis.is_mock_data)
    }

    /// Number of entries whose fetch failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.analysis.success).count()
    }

    /// Lowest overall score among scored entries.
    #[must_use]
    pub fn min_score(&self) -> Option<u8> {
        self.entries
            .iter()
            .filter_map(|e| e.score.as_ref())
            .map(|s| s.overall_score)
            .min()
    }
}
