//! Performance scoring and insights engine.
//!
//! Converts raw p75 field data into per-metric scores, a weighted overall
//! score with a letter grade, prioritized recommendations, and cross-URL
//! rollups.
//!
//! # Example
//!
//! ```
//! use vitals_tools::model::{MetricKey, MetricObservation, Observations};
//! use vitals_tools::scoring::{PerformanceGrade, PerformanceScorer};
//!
//! let mut observations = Observations::new();
//! observations.insert(
//!     MetricKey::LargestContentfulPaint,
//!     MetricObservation::from_p75(2800.0),
//! );
//!
//! let result = PerformanceScorer::default().score(&observations).unwrap();
//! assert_eq!(result.overall_score, 90);
//! assert_eq!(result.grade, PerformanceGrade::A);
//! ```

mod catalog;
mod insights;
mod recommendations;
mod scorer;

pub use catalog::{
    guidance, GradeBand, MetricCatalog, MetricDefinition, MetricRating, PerformanceGrade,
    Priority, GRADE_BANDS,
};
pub use insights::{InsightsAggregator, InsightsResult, MetricStats, RollupRecommendation, UrlScore};
pub use recommendations::{generate_recommendations, Recommendation};
pub use scorer::{score_metric, PerformanceScoreResult, PerformanceScorer};
