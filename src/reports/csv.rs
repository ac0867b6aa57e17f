//! CSV report generator.
//!
//! One row per analyzed URL, suitable for spreadsheet import and data
//! analysis pipelines.

use super::{AnalysisReport, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{MetricKey, MetricObservation, Observations};
use std::fmt::Write as _;

const HEADERS: &[&str] = &[
    "URL",
    "LCP (ms)",
    "CLS",
    "FCP (ms)",
    "INP (ms)",
    "LCP 95th (ms)",
    "CLS 95th",
    "FCP 95th (ms)",
    "INP 95th (ms)",
    "LCP Good %",
    "CLS Good %",
    "FCP Good %",
    "INP Good %",
    "Score",
    "Grade",
];

/// Placeholder for values that were not reported.
const NOT_AVAILABLE: &str = "N/A";

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(
        &self,
        report: &AnalysisReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        writeln!(content, "{}", HEADERS.join(","))?;

        for entry in &report.entries {
            let observations = entry.analysis.scorable_observations();
            let metric = |key: MetricKey| observations.and_then(|o: &Observations| o.get(&key));

            let mut fields = vec![format!("\"{}\"", escape_csv(&entry.analysis.url))];
            fields.extend(MetricKey::ALL.map(|k| value_or_na(metric(k).and_then(|m| m.p75))));
            fields.extend(MetricKey::ALL.map(|k| value_or_na(metric(k).and_then(|m| m.p95))));
            fields.extend(MetricKey::ALL.map(|k| good_percentage(metric(k))));

            match &entry.score {
                Some(score) if entry.analysis.success => {
                    fields.push(score.overall_score.to_string());
                    fields.push(score.grade.letter().to_string());
                }
                _ => {
                    fields.push(NOT_AVAILABLE.to_string());
                    fields.push(NOT_AVAILABLE.to_string());
                }
            }

            writeln!(content, "{}", fields.join(","))?;
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

fn value_or_na(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Share of sessions in the "good" bucket as a whole percentage.
fn good_percentage(metric: Option<&MetricObservation>) -> String {
    metric
        .and_then(MetricObservation::good_density)
        .map_or_else(
            || NOT_AVAILABLE.to_string(),
            |d| format!("{}", (d * 100.0).round()),
        )
}

/// Escape a string for CSV embedding: double-quote escaping per RFC 4180,
/// plus newline flattening since fields are already wrapped in double quotes.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("a\"b\nc"), "a\"\"b c");
    }

    #[test]
    fn test_good_percentage() {
        let obs = MetricObservation {
            histogram: vec![crate::model::HistogramBin::new(0.0, Some(2500.0), 0.704)],
            ..MetricObservation::from_p75(2000.0)
        };
        assert_eq!(good_percentage(Some(&obs)), "70");
        assert_eq!(good_percentage(None), "N/A");
        assert_eq!(good_percentage(Some(&MetricObservation::from_p75(1.0))), "N/A");
    }

    #[test]
    fn test_value_or_na() {
        assert_eq!(value_or_na(Some(2800.0)), "2800");
        assert_eq!(value_or_na(Some(0.08)), "0.08");
        assert_eq!(value_or_na(None), "N/A");
    }
}
