//! Cross-URL insights.
//!
//! Rolls a batch of [`UrlAnalysis`] results up into per-metric statistics,
//! per-URL scores, best/worst performers and batch-level recommendations.

use crate::error::Result;
use crate::model::{MetricKey, UrlAnalysis};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::catalog::{guidance, MetricCatalog, PerformanceGrade, Priority};
use super::scorer::PerformanceScorer;

/// Summary statistics for one metric across all successful URLs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Overall score for one URL in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlScore {
    pub url: String,
    pub overall_score: u8,
    pub grade: PerformanceGrade,
}

/// Batch-level recommendation based on a metric's mean p75.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupRecommendation {
    pub metric: MetricKey,
    pub priority: Priority,
    pub message: String,
    pub suggestion: String,
}

/// Aggregated view of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsResult {
    pub metric_stats: IndexMap<MetricKey, MetricStats>,
    pub url_scores: Vec<UrlScore>,
    pub best_performer: UrlScore,
    pub worst_performer: UrlScore,
    pub average_score: u8,
    pub rollup_recommendations: Vec<RollupRecommendation>,
}

/// Aggregates batch results using a [`PerformanceScorer`].
#[derive(Debug, Clone, Default)]
pub struct InsightsAggregator {
    scorer: PerformanceScorer,
}

impl InsightsAggregator {
    #[must_use]
    pub const fn new(scorer: PerformanceScorer) -> Self {
        Self { scorer }
    }

    /// Summarize a batch of results.
    ///
    /// Only successful entries whose observations can be scored
    /// participate. Entries holding unusable values are skipped with a
    /// warning. Returns `Ok(None)` when none qualify.
    pub fn summarize(&self, analyses: &[UrlAnalysis]) -> Result<Option<InsightsResult>> {
        let mut scored: Vec<&UrlAnalysis> = Vec::new();
        let mut url_scores = Vec::new();
        let mut skipped = 0usize;

        for analysis in analyses {
            let Some(observations) = analysis.scorable_observations() else {
                continue;
            };
            match self.scorer.score(observations) {
                Ok(result) => {
                    url_scores.push(UrlScore {
                        url: analysis.display_label().to_string(),
                        overall_score: result.overall_score,
                        grade: result.grade,
                    });
                    scored.push(analysis);
                }
                Err(err) => {
                    skipped += 1;
                    tracing::warn!(
                        url = analysis.display_label(),
                        "left out of insights: {err}"
                    );
                }
            }
        }

        if url_scores.is_empty() {
            tracing::debug!(
                total = analyses.len(),
                skipped,
                "no scorable results to summarize"
            );
            return Ok(None);
        }

        let catalog = self.scorer.catalog();
        let metric_stats = collect_metric_stats(catalog, &scored);

        // Strict comparisons keep the first occurrence on ties
        let mut best = &url_scores[0];
        let mut worst = &url_scores[0];
        for candidate in &url_scores[1..] {
            if candidate.overall_score > best.overall_score {
                best = candidate;
            }
            if candidate.overall_score < worst.overall_score {
                worst = candidate;
            }
        }
        let best_performer = best.clone();
        let worst_performer = worst.clone();

        let total: f64 = url_scores.iter().map(|s| f64::from(s.overall_score)).sum();
        let average_score = (total / url_scores.len() as f64).round().clamp(0.0, 100.0) as u8;

        let rollup_recommendations = rollup_recommendations(catalog, &metric_stats);

        tracing::info!(
            urls = url_scores.len(),
            skipped,
            average_score,
            rollups = rollup_recommendations.len(),
            "summarized batch"
        );

        Ok(Some(InsightsResult {
            metric_stats,
            url_scores,
            best_performer,
            worst_performer,
            average_score,
            rollup_recommendations,
        }))
    }
}

fn collect_metric_stats(
    catalog: &MetricCatalog,
    successful: &[&UrlAnalysis],
) -> IndexMap<MetricKey, MetricStats> {
    let mut stats = IndexMap::new();

    for definition in catalog.iter() {
        let values: Vec<f64> = successful
            .iter()
            .filter_map(|a| a.scorable_observations())
            .filter_map(|obs| obs.get(&definition.key).and_then(|o| o.p75))
            .collect();

        if values.is_empty() {
            continue;
        }

        let sum: f64 = values.iter().sum();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        stats.insert(
            definition.key,
            MetricStats {
                average: sum / values.len() as f64,
                min,
                max,
                count: values.len(),
            },
        );
    }

    stats
}

fn rollup_recommendations(
    catalog: &MetricCatalog,
    metric_stats: &IndexMap<MetricKey, MetricStats>,
) -> Vec<RollupRecommendation> {
    let mut high = Vec::new();
    let mut medium = Vec::new();

    for definition in catalog.iter() {
        let Some(stats) = metric_stats.get(&definition.key) else {
            continue;
        };
        let avg = definition.format_value(stats.average.round());

        if stats.average > definition.needs_improvement_threshold {
            high.push(RollupRecommendation {
                metric: definition.key,
                priority: Priority::High,
                message: format!(
                    "{} is poor across all URLs (avg: {avg})",
                    definition.display_name
                ),
                suggestion: guidance(definition.key, Priority::High).to_string(),
            });
        } else if stats.average > definition.good_threshold {
            medium.push(RollupRecommendation {
                metric: definition.key,
                priority: Priority::Medium,
                message: format!("{} needs improvement (avg: {avg})", definition.display_name),
                suggestion: guidance(definition.key, Priority::Medium).to_string(),
            });
        }
    }

    high.extend(medium);
    high
}
