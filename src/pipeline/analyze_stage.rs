//! Fetch and scoring stages.
//!
//! Turns a list of user-supplied URLs into a fully scored
//! [`AnalysisReport`], with cross-URL insights for batches.

use crate::config::AppConfig;
use crate::crux::{fetch_all, select_source, FetchStats, VitalsSource};
use crate::error::Result;
use crate::model::UrlAnalysis;
use crate::reports::{AnalysisReport, ReportEntry, ReportMetadata};
use crate::scoring::{InsightsAggregator, MetricCatalog, PerformanceScorer};

/// Everything an analysis run produced.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Scored results ready for rendering
    pub report: AnalysisReport,
    /// Fetch counters and timing
    pub stats: FetchStats,
}

/// Fetch and score every URL using the configured source.
///
/// # Errors
///
/// Fails only when the live client cannot be constructed. Per-URL fetch
/// failures and unscorable field data are carried in the report instead.
pub fn analyze_urls(config: &AppConfig, urls: &[String]) -> Result<AnalysisOutcome> {
    let source = select_source(&config.source)?;
    analyze_with_source(source.as_ref(), config.scoring.catalog(), config, urls)
}

/// Like [`analyze_urls`] but with an explicit source and catalog.
pub fn analyze_with_source(
    source: &dyn VitalsSource,
    catalog: MetricCatalog,
    config: &AppConfig,
    urls: &[String],
) -> Result<AnalysisOutcome> {
    let (analyses, mut stats) = fetch_all(source, urls, config.source.max_concurrent);
    let report = build_report(catalog, analyses, source.name())?;
    for entry in report.entries.iter().filter(|e| e.analysis.is_unscorable()) {
        stats.mark_unscorable(entry.analysis.is_mock_data);
    }
    Ok(AnalysisOutcome { report, stats })
}

/// Score fetched results and, for batches of two or more, summarize them.
///
/// Failed fetches get no score. A fetched result whose observations hold
/// an unusable value (NaN, infinite, negative) is demoted to an
/// [`InvalidData`](crate::model::FailureKind::InvalidData) failure so the
/// rest of the batch is still scored.
pub fn build_report(
    catalog: MetricCatalog,
    analyses: Vec<UrlAnalysis>,
    source_name: &str,
) -> Result<AnalysisReport> {
    let scorer = PerformanceScorer::new(catalog);

    let mut entries = Vec::with_capacity(analyses.len());
    for analysis in analyses {
        if !analysis.success {
            entries.push(ReportEntry {
                analysis,
                score: None,
            });
            continue;
        }

        match scorer.score_optional(analysis.scorable_observations()) {
            Ok(result) => entries.push(ReportEntry {
                analysis,
                score: Some(result),
            }),
            Err(err) => {
                tracing::warn!(
                    url = analysis.display_label(),
                    "skipping unscorable result: {err}"
                );
                let analysis = analysis.into_unscorable(err.to_string());
                entries.push(ReportEntry {
                    analysis,
                    score: None,
                });
            }
        }
    }

    let insights = if entries.len() > 1 {
        let analyses: Vec<UrlAnalysis> = entries.iter().map(|e| e.analysis.clone()).collect();
        InsightsAggregator::new(scorer).summarize(&analyses)?
    } else {
        None
    };

    Ok(AnalysisReport {
        metadata: ReportMetadata::new(source_name),
        entries,
        insights,
    })
}
