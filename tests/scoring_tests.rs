//! Scoring engine integration tests.
//!
//! End-to-end checks of per-metric scoring, weighted aggregation, grading
//! and recommendations through the public API.

use vitals_tools::model::{MetricKey, MetricObservation, Observations};
use vitals_tools::scoring::{
    score_metric, MetricCatalog, PerformanceGrade, PerformanceScorer, Priority,
};

fn observations(values: &[(MetricKey, f64)]) -> Observations {
    values
        .iter()
        .map(|(key, value)| (*key, MetricObservation::from_p75(*value)))
        .collect()
}

// ============================================================================
// Per-metric scoring
// ============================================================================

mod metric_scores {
    use super::*;

    #[test]
    fn good_values_score_full_marks_for_every_metric() {
        let catalog = MetricCatalog::web_vitals();
        for definition in catalog.iter() {
            for fraction in [0.0, 0.5, 1.0] {
                let value = definition.good_threshold * fraction;
                assert_eq!(
                    score_metric(Some(value), definition).unwrap(),
                    100,
                    "{} at {value}",
                    definition.key
                );
            }
        }
    }

    #[test]
    fn twice_needs_improvement_scores_zero_for_every_metric() {
        let catalog = MetricCatalog::web_vitals();
        for definition in catalog.iter() {
            let floor = 2.0 * definition.needs_improvement_threshold;
            for value in [floor, floor * 1.5, floor * 10.0] {
                assert_eq!(
                    score_metric(Some(value), definition).unwrap(),
                    0,
                    "{} at {value}",
                    definition.key
                );
            }
        }
    }

    #[test]
    fn needs_improvement_threshold_scores_fifty() {
        let catalog = MetricCatalog::web_vitals();
        for definition in catalog.iter() {
            let value = definition.needs_improvement_threshold;
            assert_eq!(score_metric(Some(value), definition).unwrap(), 50);
        }
    }

    #[test]
    fn absent_value_scores_zero() {
        let catalog = MetricCatalog::web_vitals();
        for definition in catalog.iter() {
            assert_eq!(score_metric(None, definition).unwrap(), 0);
        }
    }
}

// ============================================================================
// Aggregation
// ============================================================================

mod aggregation {
    use super::*;

    #[test]
    fn all_good_scores_one_hundred() {
        let result = PerformanceScorer::default()
            .score(&observations(&[
                (MetricKey::LargestContentfulPaint, 2000.0),
                (MetricKey::CumulativeLayoutShift, 0.05),
                (MetricKey::FirstContentfulPaint, 1500.0),
                (MetricKey::InteractionToNextPaint, 150.0),
            ]))
            .unwrap();

        assert_eq!(result.overall_score, 100);
        assert_eq!(result.grade, PerformanceGrade::A);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn all_poor_fails_with_worst_metric_first() {
        let result = PerformanceScorer::default()
            .score(&observations(&[
                (MetricKey::LargestContentfulPaint, 5000.0),
                (MetricKey::CumulativeLayoutShift, 0.3),
                (MetricKey::FirstContentfulPaint, 4000.0),
                (MetricKey::InteractionToNextPaint, 600.0),
            ]))
            .unwrap();

        assert!(result.overall_score < 50);
        assert_eq!(result.overall_score, 38);
        assert_eq!(result.grade, PerformanceGrade::F);
        assert_eq!(result.recommendations.len(), 4);

        let lowest = result
            .breakdown
            .iter()
            .min_by_key(|(_, score)| **score)
            .map(|(key, _)| *key)
            .unwrap();
        assert_eq!(lowest, MetricKey::FirstContentfulPaint);
        assert_eq!(result.recommendations[0].metric, lowest);
        assert!(result
            .recommendations
            .iter()
            .all(|r| r.priority == Priority::High));
    }

    #[test]
    fn single_metric_carries_full_weight() {
        let result = PerformanceScorer::default()
            .score(&observations(&[(MetricKey::LargestContentfulPaint, 2000.0)]))
            .unwrap();

        let keys: Vec<_> = result.breakdown.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["largest_contentful_paint"]);
        assert_eq!(
            result.overall_score,
            result.breakdown[&MetricKey::LargestContentfulPaint]
        );
    }

    #[test]
    fn missing_metric_is_excluded_not_zeroed() {
        let scorer = PerformanceScorer::default();
        let full = scorer
            .score(&observations(&[
                (MetricKey::LargestContentfulPaint, 2000.0),
                (MetricKey::CumulativeLayoutShift, 0.3),
                (MetricKey::FirstContentfulPaint, 1500.0),
                (MetricKey::InteractionToNextPaint, 150.0),
            ]))
            .unwrap();
        let without_cls = scorer
            .score(&observations(&[
                (MetricKey::LargestContentfulPaint, 2000.0),
                (MetricKey::FirstContentfulPaint, 1500.0),
                (MetricKey::InteractionToNextPaint, 150.0),
            ]))
            .unwrap();

        // CLS 0.3 scores 40 with weight 0.3
        assert_eq!(full.overall_score, 82);
        // Zeroing CLS would give 70; excluding it leaves only perfect metrics
        assert_eq!(without_cls.overall_score, 100);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let scorer = PerformanceScorer::default();
        let forward = observations(&[
            (MetricKey::LargestContentfulPaint, 3100.0),
            (MetricKey::CumulativeLayoutShift, 0.12),
            (MetricKey::FirstContentfulPaint, 2500.0),
            (MetricKey::InteractionToNextPaint, 420.0),
        ]);
        let reversed: Observations = forward
            .iter()
            .rev()
            .map(|(k, v)| (*k, v.clone()))
            .collect();

        assert_eq!(
            scorer.score(&forward).unwrap(),
            scorer.score(&reversed).unwrap()
        );
    }
}

// ============================================================================
// Grading
// ============================================================================

mod grading {
    use super::*;

    #[test]
    fn band_minimums_are_inclusive() {
        let cases = [
            (100, PerformanceGrade::A),
            (90, PerformanceGrade::A),
            (89, PerformanceGrade::B),
            (80, PerformanceGrade::B),
            (79, PerformanceGrade::C),
            (70, PerformanceGrade::C),
            (69, PerformanceGrade::D),
            (60, PerformanceGrade::D),
            (59, PerformanceGrade::F),
            (0, PerformanceGrade::F),
        ];
        for (score, grade) in cases {
            assert_eq!(PerformanceGrade::from_score(score), grade, "score {score}");
        }
    }
}

// ============================================================================
// Catalog customization
// ============================================================================

mod catalog {
    use super::*;

    #[test]
    fn custom_thresholds_change_scores() {
        let mut catalog = MetricCatalog::web_vitals();
        catalog.override_metric(
            MetricKey::InteractionToNextPaint,
            Some(100.0),
            Some(200.0),
            None,
        );
        assert!(catalog.validate().is_ok());

        let scorer = PerformanceScorer::new(catalog);
        let result = scorer
            .score(&observations(&[(MetricKey::InteractionToNextPaint, 150.0)]))
            .unwrap();
        assert_eq!(result.overall_score, 75);
    }

    #[test]
    fn weights_must_sum_to_one() {
        let mut catalog = MetricCatalog::web_vitals();
        catalog.override_metric(MetricKey::LargestContentfulPaint, None, None, Some(0.9));
        assert!(catalog.validate().is_err());
    }
}
