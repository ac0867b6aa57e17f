//! JSON report generator.

use super::types::DATA_SOURCE;
use super::{AnalysisReport, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{FetchFailure, Observations};
use crate::scoring::{InsightsResult, PerformanceScoreResult};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        report: &AnalysisReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let export = JsonExport {
            export_date: report.metadata.generated_at.to_rfc3339(),
            data_source: DATA_SOURCE,
            tool_version: &report.metadata.tool_version,
            total_records: report.entries.len(),
            records: report
                .entries
                .iter()
                .map(|entry| JsonRecord {
                    url: entry.analysis.url.as_str(),
                    original_url: entry.analysis.original_url.as_str(),
                    metrics: entry.analysis.observations.as_ref(),
                    success: entry.analysis.success,
                    is_mock_data: entry.analysis.is_mock_data,
                    score: entry.score.as_ref(),
                    error: entry.analysis.error.as_ref(),
                })
                .collect(),
            insights: report.insights.as_ref(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&export)
        } else {
            serde_json::to_string(&export)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    export_date: String,
    data_source: &'static str,
    tool_version: &'a str,
    total_records: usize,
    records: Vec<JsonRecord<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    insights: Option<&'a InsightsResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRecord<'a> {
    url: &'a str,
    original_url: &'a str,
    metrics: Option<&'a Observations>,
    success: bool,
    is_mock_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<&'a PerformanceScoreResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a FetchFailure>,
}
