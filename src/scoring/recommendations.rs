//! Per-URL improvement recommendations.

use crate::model::{MetricKey, Observations};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::catalog::{guidance, MetricCatalog, Priority};

/// A single improvement suggestion for one metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Metric the suggestion is about
    pub metric: MetricKey,
    /// The metric's score (0-100)
    pub score: u8,
    /// How urgent the fix is
    pub priority: Priority,
    /// Human-readable message
    pub message: String,
}

/// Build recommendations for every scored metric below 70.
///
/// Output is sorted ascending by score. The sort is stable, so metrics with
/// equal scores keep catalog order.
#[must_use]
pub fn generate_recommendations(
    catalog: &MetricCatalog,
    breakdown: &IndexMap<MetricKey, u8>,
    observations: &Observations,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = catalog
        .iter()
        .filter_map(|definition| {
            let score = *breakdown.get(&definition.key)?;
            let priority = Priority::for_score(score)?;
            let p75 = observations.get(&definition.key).and_then(|o| o.p75)?;

            Some(Recommendation {
                metric: definition.key,
                score,
                priority,
                message: format!(
                    "{} of {} is {}. {}",
                    definition.display_name,
                    definition.format_value(p75),
                    priority,
                    guidance(definition.key, priority)
                ),
            })
        })
        .collect();

    recommendations.sort_by_key(|r| r.score);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetricObservation;
    use crate::scoring::PerformanceScorer;

    fn score_recs(values: &[(MetricKey, f64)]) -> Vec<Recommendation> {
        let observations: Observations = values
            .iter()
            .map(|(k, v)| (*k, MetricObservation::from_p75(*v)))
            .collect();
        PerformanceScorer::default()
            .score(&observations)
            .unwrap()
            .recommendations
    }

    #[test]
    fn test_no_recommendations_at_seventy() {
        // LCP 3400 scores exactly 70
        assert!(score_recs(&[(MetricKey::LargestContentfulPaint, 3400.0)]).is_empty());
    }

    #[test]
    fn test_high_priority_message() {
        let recs = score_recs(&[(MetricKey::LargestContentfulPaint, 5000.0)]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].score, 38);
        assert_eq!(
            recs[0].message,
            "Largest Contentful Paint of 5000ms is high. Optimize images, preload critical resources, and improve server response time."
        );
    }

    #[test]
    fn test_unitless_metric_message() {
        let recs = score_recs(&[(MetricKey::CumulativeLayoutShift, 0.2)]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Medium);
        assert_eq!(
            recs[0].message,
            "Cumulative Layout Shift of 0.2 is medium. Review layout shifts and set explicit dimensions for dynamic content."
        );
    }

    #[test]
    fn test_sorted_by_score_with_stable_ties() {
        let recs = score_recs(&[
            (MetricKey::LargestContentfulPaint, 3700.0),
            (MetricKey::CumulativeLayoutShift, 0.5),
            (MetricKey::FirstContentfulPaint, 6000.0),
            (MetricKey::InteractionToNextPaint, 450.0),
        ]);
        let order: Vec<_> = recs.iter().map(|r| (r.metric, r.score)).collect();
        assert_eq!(
            order,
            vec![
                (MetricKey::CumulativeLayoutShift, 0),
                (MetricKey::FirstContentfulPaint, 0),
                (MetricKey::InteractionToNextPaint, 58),
                (MetricKey::LargestContentfulPaint, 60),
            ]
        );
    }
}
