//! Performance scorer.
//!
//! Maps raw p75 values onto a 0-100 scale per metric and combines them into
//! a weighted overall score and letter grade.

use crate::error::{Result, VitalsError};
use crate::model::{MetricKey, Observations};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::catalog::{MetricCatalog, MetricDefinition, PerformanceGrade};
use super::recommendations::{generate_recommendations, Recommendation};

/// Score one metric value against its thresholds.
///
/// `None` means the metric was not measured and scores 0. Scores are
/// 100 at or below the good threshold, fall linearly from 100 to 50 across
/// the needs-improvement band, then from 50 toward 0 (reached at twice the
/// needs-improvement threshold).
///
/// # Errors
///
/// Returns [`ScoringErrorKind::InvalidMetricValue`](crate::error::ScoringErrorKind)
/// for NaN, infinite or negative values.
pub fn score_metric(value: Option<f64>, definition: &MetricDefinition) -> Result<u8> {
    let Some(value) = value else {
        return Ok(0);
    };
    if !value.is_finite() || value < 0.0 {
        return Err(VitalsError::invalid_metric_value(definition.key, value));
    }

    let good = definition.good_threshold;
    let ni = definition.needs_improvement_threshold;

    let raw = if value <= good {
        100.0
    } else if value <= ni {
        50.0 + 50.0 * (ni - value) / (ni - good)
    } else {
        50.0 * ((2.0 * ni - value) / ni).max(0.0)
    };

    Ok(clamp_score(raw))
}

/// Round to the nearest integer and clamp into 0..=100.
fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// Scoring output for one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceScoreResult {
    /// Weighted overall score (0-100)
    pub overall_score: u8,
    /// Grade derived from the overall score
    pub grade: PerformanceGrade,
    /// Per-metric scores, only for metrics that had a p75 value
    pub breakdown: IndexMap<MetricKey, u8>,
    /// Improvement suggestions, worst score first
    pub recommendations: Vec<Recommendation>,
}

impl PerformanceScoreResult {
    /// Result for a URL with no data at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            overall_score: 0,
            grade: PerformanceGrade::F,
            breakdown: IndexMap::new(),
            recommendations: Vec::new(),
        }
    }

    /// Whether any metric contributed to the score.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.breakdown.is_empty()
    }
}

/// Scores observations against an injected metric catalog.
#[derive(Debug, Clone, Default)]
pub struct PerformanceScorer {
    catalog: MetricCatalog,
}

impl PerformanceScorer {
    /// Create a scorer over the given catalog.
    #[must_use]
    pub const fn new(catalog: MetricCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this scorer uses.
    #[must_use]
    pub const fn catalog(&self) -> &MetricCatalog {
        &self.catalog
    }

    /// Score a set of observations.
    ///
    /// Metrics missing from `observations` (or lacking a p75) are excluded
    /// from both the numerator and the denominator, so a URL with only LCP
    /// data is graded on LCP alone.
    pub fn score(&self, observations: &Observations) -> Result<PerformanceScoreResult> {
        let mut breakdown = IndexMap::new();
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        for definition in self.catalog.iter() {
            let Some(p75) = observations.get(&definition.key).and_then(|o| o.p75) else {
                continue;
            };
            let score = score_metric(Some(p75), definition)?;
            weighted_sum += f64::from(score) * definition.weight;
            weight_total += definition.weight;
            breakdown.insert(definition.key, score);
        }

        let overall_score = if weight_total > 0.0 {
            clamp_score(weighted_sum / weight_total)
        } else {
            0
        };

        let recommendations = generate_recommendations(&self.catalog, &breakdown, observations);

        tracing::debug!(
            overall_score,
            scored_metrics = breakdown.len(),
            "scored observations"
        );

        Ok(PerformanceScoreResult {
            overall_score,
            grade: PerformanceGrade::from_score(overall_score),
            breakdown,
            recommendations,
        })
    }

    /// Score observations that may be absent entirely.
    pub fn score_optional(
        &self,
        observations: Option<&Observations>,
    ) -> Result<PerformanceScoreResult> {
        match observations {
            Some(obs) => self.score(obs),
            None => Ok(PerformanceScoreResult::empty()),
        }
    }
}
