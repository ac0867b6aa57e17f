//! Summary report generator for shell output.
//!
//! Compact per-URL scores, grades and metric ratings, followed by a
//! cross-URL insights panel when more than one URL was compared.

use super::{AnalysisReport, ReportConfig, ReportEntry, ReportError, ReportFormat, ReportGenerator};
use crate::scoring::{InsightsResult, MetricCatalog, MetricRating, PerformanceGrade, Priority};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn grade_color(grade: PerformanceGrade) -> &'static str {
    match grade {
        PerformanceGrade::A | PerformanceGrade::B => "green",
        PerformanceGrade::C | PerformanceGrade::D => "yellow",
        PerformanceGrade::F => "red",
    }
}

const fn rating_color(rating: MetricRating) -> &'static str {
    match rating {
        MetricRating::Good => "green",
        MetricRating::NeedsImprovement => "yellow",
        MetricRating::Poor => "red",
    }
}

const fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "red",
        Priority::Medium => "yellow",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn entry_lines(
        &self,
        entry: &ReportEntry,
        catalog: &MetricCatalog,
        show_recommendations: bool,
        lines: &mut Vec<String>,
    ) {
        let analysis = &entry.analysis;
        lines.push(self.color(analysis.display_label(), "bold"));

        if let Some(failure) = &analysis.error {
            lines.push(format!(
                "  {} {}",
                self.color("Error:", "red"),
                failure.message
            ));
            return;
        }

        let Some(score) = &entry.score else {
            return;
        };

        if !score.has_data() {
            lines.push(format!(
                "  {}",
                self.color("No metric data available", "dim")
            ));
            return;
        }

        lines.push(format!(
            "  Score: {} {}",
            self.color(
                &format!("{}/100", score.overall_score),
                grade_color(score.grade)
            ),
            self.color(
                &format!("(Grade {}, {})", score.grade.letter(), score.grade.label()),
                "dim"
            )
        ));

        let observations = analysis.scorable_observations();
        for definition in catalog.iter() {
            let Some(metric_score) = score.breakdown.get(&definition.key) else {
                continue;
            };
            let Some(p75) = observations
                .and_then(|obs| obs.get(&definition.key))
                .and_then(|o| o.p75)
            else {
                continue;
            };
            let rating = definition.rate(p75);
            lines.push(format!(
                "  {:<4} {:>10}  {:>3}/100  {}",
                definition.key.short_name(),
                definition.format_value(p75),
                metric_score,
                self.color(rating.label(), rating_color(rating))
            ));
        }

        if show_recommendations && !score.recommendations.is_empty() {
            lines.push(format!("  {}", self.color("Recommendations:", "cyan")));
            for rec in &score.recommendations {
                lines.push(format!(
                    "    {} {}",
                    self.color(&format!("[{}]", rec.priority), priority_color(rec.priority)),
                    rec.message
                ));
            }
        }
    }

    fn insights_lines(&self, insights: &InsightsResult, lines: &mut Vec<String>) {
        lines.push(self.color("Insights", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}/100",
            self.color("Average score:", "cyan"),
            insights.average_score
        ));
        lines.push(format!(
            "{}  {} ({})",
            self.color("Best:", "cyan"),
            insights.best_performer.url,
            self.color(
                &insights.best_performer.overall_score.to_string(),
                grade_color(insights.best_performer.grade)
            )
        ));
        lines.push(format!(
            "{}  {} ({})",
            self.color("Worst:", "cyan"),
            insights.worst_performer.url,
            self.color(
                &insights.worst_performer.overall_score.to_string(),
                grade_color(insights.worst_performer.grade)
            )
        ));

        if !insights.metric_stats.is_empty() {
            lines.push(String::new());
            for (key, stats) in &insights.metric_stats {
                lines.push(format!(
                    "  {:<4} avg {:.2}  min {}  max {}  ({} URLs)",
                    key.short_name(),
                    stats.average,
                    stats.min,
                    stats.max,
                    stats.count
                ));
            }
        }

        if !insights.rollup_recommendations.is_empty() {
            lines.push(String::new());
            for rollup in &insights.rollup_recommendations {
                lines.push(format!(
                    "  {} {}",
                    self.color(
                        &format!("[{}]", rollup.priority),
                        priority_color(rollup.priority)
                    ),
                    rollup.message
                ));
                lines.push(format!("    {}", self.color(&rollup.suggestion, "dim")));
            }
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        report: &AnalysisReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        let title = config
            .title
            .as_deref()
            .unwrap_or("Core Web Vitals Summary");
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {} URL(s) from {}",
            self.color("Analyzed:", "cyan"),
            report.entries.len(),
            report.metadata.source_name
        ));

        let failed = report.failed_count();
        if failed > 0 {
            lines.push(format!(
                "{}  {}",
                self.color("Failed:", "cyan"),
                self.color(&failed.to_string(), "red")
            ));
        }
        lines.push(String::new());

        for entry in &report.entries {
            self.entry_lines(entry, &config.catalog, config.show_recommendations, &mut lines);
            lines.push(String::new());
        }

        if let Some(insights) = &report.insights {
            self.insights_lines(insights, &mut lines);
            lines.push(String::new());
        }

        if report.has_mock_data() {
            lines.push(self.color(
                "Note: showing sample data. Set CRUX_API_KEY for live field data.",
                "yellow",
            ));
        }

        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
