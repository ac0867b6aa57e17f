//! Plain-text performance report.

use super::types::DATA_SOURCE;
use super::{AnalysisReport, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{MetricKey, UrlAnalysis};
use crate::scoring::InsightsResult;
use std::fmt::Write as _;

/// Plain-text report generator.
pub struct TextReporter;

impl TextReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate(
        &self,
        report: &AnalysisReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let generated = report
            .metadata
            .generated_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S");

        writeln!(out, "PERFORMANCE ANALYSIS REPORT")?;
        writeln!(out, "============================")?;
        writeln!(out, "Generated: {generated}")?;
        writeln!(out, "Data Source: {DATA_SOURCE}")?;
        writeln!(out, "Total URLs Analyzed: {}", report.entries.len())?;
        writeln!(out)?;
        writeln!(out, "DETAILED RESULTS")?;
        writeln!(out, "================")?;
        writeln!(out)?;

        for (index, entry) in report.entries.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, entry_label(&entry.analysis))?;
            writeln!(out, "   {}", "=".repeat(50))?;

            if let Some(failure) = &entry.analysis.error {
                writeln!(out, "   Error: {}", failure.message)?;
            }

            write_metric_lines(&mut out, &entry.analysis)?;

            if let Some(score) = entry.score.as_ref().filter(|_| entry.analysis.success) {
                writeln!(
                    out,
                    "   Score: {}/100 (Grade {}, {})",
                    score.overall_score,
                    score.grade.letter(),
                    score.grade.label()
                )?;
                if config.show_recommendations {
                    for rec in &score.recommendations {
                        writeln!(out, "   - [{}] {}", rec.priority, rec.message)?;
                    }
                }
            }

            writeln!(out)?;
        }

        if let Some(insights) = &report.insights {
            write_insights(&mut out, insights)?;
        }

        write!(out, "END OF REPORT")?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}

fn entry_label(analysis: &UrlAnalysis) -> &str {
    if analysis.url.is_empty() {
        &analysis.original_url
    } else {
        &analysis.url
    }
}

fn write_metric_lines(out: &mut String, analysis: &UrlAnalysis) -> std::fmt::Result {
    let Some(observations) = analysis.scorable_observations() else {
        return Ok(());
    };

    for key in MetricKey::ALL {
        let Some(obs) = observations.get(&key) else {
            continue;
        };
        let unit = if key == MetricKey::CumulativeLayoutShift {
            ""
        } else {
            "ms"
        };
        let p75 = obs.p75.map_or_else(|| "N/A".to_string(), |v| v.to_string());
        let p95 = obs.p95.map_or_else(|| "N/A".to_string(), |v| v.to_string());
        writeln!(out, "   {}: {p75}{unit} (95th: {p95}{unit})", key.short_name())?;
    }
    Ok(())
}

fn write_insights(out: &mut String, insights: &InsightsResult) -> std::fmt::Result {
    writeln!(out, "INSIGHTS")?;
    writeln!(out, "========")?;
    writeln!(out, "Average Score: {}", insights.average_score)?;
    writeln!(
        out,
        "Best Performer: {} ({})",
        insights.best_performer.url, insights.best_performer.overall_score
    )?;
    writeln!(
        out,
        "Worst Performer: {} ({})",
        insights.worst_performer.url, insights.worst_performer.overall_score
    )?;
    for rollup in &insights.rollup_recommendations {
        writeln!(out, "- [{}] {}", rollup.priority, rollup.message)?;
        writeln!(out, "  {}", rollup.suggestion)?;
    }
    writeln!(out)
}
