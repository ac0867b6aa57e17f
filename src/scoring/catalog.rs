//! Static metric catalog: thresholds, units, weights, grade bands and
//! the canned guidance table.

use crate::error::{ErrorContext, Result, ScoringErrorKind, VitalsError};
use crate::model::MetricKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance used when checking that weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Definition of one tracked metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub key: MetricKey,
    pub display_name: String,
    pub description: String,
    /// Unit suffix ("ms", or empty for unitless metrics)
    pub unit: String,
    /// Values at or below this are "good"
    pub good_threshold: f64,
    /// Values above this are "poor"
    pub needs_improvement_threshold: f64,
    /// Relative weight in the overall score (0..1)
    pub weight: f64,
}

impl MetricDefinition {
    /// Rate a raw value against this metric's thresholds.
    #[must_use]
    pub fn rate(&self, value: f64) -> MetricRating {
        if value <= self.good_threshold {
            MetricRating::Good
        } else if value <= self.needs_improvement_threshold {
            MetricRating::NeedsImprovement
        } else {
            MetricRating::Poor
        }
    }

    /// Format a raw value with this metric's unit.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        format!("{value}{}", self.unit)
    }
}

/// Threshold band a raw value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricRating {
    Good,
    NeedsImprovement,
    Poor,
}

impl MetricRating {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Poor => "Poor",
        }
    }
}

/// Recommendation priority. Metrics scoring 70 or above are not surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    /// Priority for a per-metric score, or `None` when the score is fine.
    #[must_use]
    pub const fn for_score(score: u8) -> Option<Self> {
        if score < 50 {
            Some(Self::High)
        } else if score < 70 {
            Some(Self::Medium)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canned improvement guidance per metric and priority.
#[must_use]
pub const fn guidance(metric: MetricKey, priority: Priority) -> &'static str {
    match (metric, priority) {
        (MetricKey::LargestContentfulPaint, Priority::High) => {
            "Optimize images, preload critical resources, and improve server response time."
        }
        (MetricKey::LargestContentfulPaint, Priority::Medium) => {
            "Consider optimizing images and reducing server response time."
        }
        (MetricKey::CumulativeLayoutShift, Priority::High) => {
            "Set explicit dimensions for images and avoid inserting content above existing content."
        }
        (MetricKey::CumulativeLayoutShift, Priority::Medium) => {
            "Review layout shifts and set explicit dimensions for dynamic content."
        }
        (MetricKey::FirstContentfulPaint, Priority::High) => {
            "Optimize critical rendering path and minimize render-blocking resources."
        }
        (MetricKey::FirstContentfulPaint, Priority::Medium) => {
            "Consider reducing render-blocking resources and optimizing CSS."
        }
        (MetricKey::InteractionToNextPaint, Priority::High) => {
            "Reduce main thread blocking time and optimize JavaScript execution."
        }
        (MetricKey::InteractionToNextPaint, Priority::Medium) => {
            "Consider code splitting and optimizing JavaScript performance."
        }
    }
}

/// Overall performance grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceGrade {
    /// Excellent: 90-100
    A,
    /// Good: 80-89
    B,
    /// Needs improvement: 70-79
    C,
    /// Poor: 60-69
    D,
    /// Failing: <60
    F,
}

/// A named grade tier with its inclusive minimum score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeBand {
    pub grade: PerformanceGrade,
    pub min_score: u8,
}

/// Grade bands in descending minimum-score order.
pub const GRADE_BANDS: [GradeBand; 5] = [
    GradeBand {
        grade: PerformanceGrade::A,
        min_score: 90,
    },
    GradeBand {
        grade: PerformanceGrade::B,
        min_score: 80,
    },
    GradeBand {
        grade: PerformanceGrade::C,
        min_score: 70,
    },
    GradeBand {
        grade: PerformanceGrade::D,
        min_score: 60,
    },
    GradeBand {
        grade: PerformanceGrade::F,
        min_score: 0,
    },
];

impl PerformanceGrade {
    /// First band whose minimum is at or below `score`.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        GRADE_BANDS
            .iter()
            .find(|band| band.min_score <= score)
            .map_or(Self::F, |band| band.grade)
    }

    /// Get grade letter
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Get grade label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Needs Improvement",
            Self::D => "Poor",
            Self::F => "Failing",
        }
    }
}

impl fmt::Display for PerformanceGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// The set of metric definitions scoring runs against.
///
/// Built once and passed to the scorer; the default is the Core Web Vitals
/// catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCatalog {
    definitions: Vec<MetricDefinition>,
}

impl MetricCatalog {
    /// Build a catalog from definitions, validating it.
    pub fn new(definitions: Vec<MetricDefinition>) -> Result<Self> {
        let catalog = Self { definitions };
        catalog.validate().context("building metric catalog")?;
        Ok(catalog)
    }

    /// The Core Web Vitals catalog.
    #[must_use]
    pub fn web_vitals() -> Self {
        let def = |key, name: &str, description: &str, unit: &str, good, ni, weight| {
            MetricDefinition {
                key,
                display_name: name.to_string(),
                description: description.to_string(),
                unit: unit.to_string(),
                good_threshold: good,
                needs_improvement_threshold: ni,
                weight,
            }
        };

        Self {
            definitions: vec![
                def(
                    MetricKey::LargestContentfulPaint,
                    "Largest Contentful Paint",
                    "Time when the largest content element becomes visible",
                    "ms",
                    2500.0,
                    4000.0,
                    0.4,
                ),
                def(
                    MetricKey::CumulativeLayoutShift,
                    "Cumulative Layout Shift",
                    "Visual stability of the page",
                    "",
                    0.1,
                    0.25,
                    0.3,
                ),
                def(
                    MetricKey::FirstContentfulPaint,
                    "First Contentful Paint",
                    "Time when first content becomes visible",
                    "ms",
                    1800.0,
                    3000.0,
                    0.2,
                ),
                def(
                    MetricKey::InteractionToNextPaint,
                    "Interaction to Next Paint",
                    "Responsiveness to user interactions",
                    "ms",
                    200.0,
                    500.0,
                    0.1,
                ),
            ],
        }
    }

    /// Look up a metric definition.
    #[must_use]
    pub fn get(&self, key: MetricKey) -> Option<&MetricDefinition> {
        self.definitions.iter().find(|d| d.key == key)
    }

    /// Definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &MetricDefinition> {
        self.definitions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Replace thresholds and weights for one metric.
    pub fn override_metric(
        &mut self,
        key: MetricKey,
        good: Option<f64>,
        needs_improvement: Option<f64>,
        weight: Option<f64>,
    ) {
        if let Some(def) = self.definitions.iter_mut().find(|d| d.key == key) {
            if let Some(good) = good {
                def.good_threshold = good;
            }
            if let Some(ni) = needs_improvement {
                def.needs_improvement_threshold = ni;
            }
            if let Some(weight) = weight {
                def.weight = weight;
            }
        }
    }

    /// Check catalog invariants: unique keys, `0 < good < needs_improvement`,
    /// weights in `0..=1` summing to 1.0.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| {
            VitalsError::scoring("validating catalog", ScoringErrorKind::InvalidCatalog(msg))
        };

        if self.definitions.is_empty() {
            return Err(invalid("catalog has no metrics".to_string()));
        }

        for (i, def) in self.definitions.iter().enumerate() {
            if self.definitions[..i].iter().any(|d| d.key == def.key) {
                return Err(invalid(format!("duplicate metric {}", def.key)));
            }
            if !(def.good_threshold > 0.0 && def.good_threshold < def.needs_improvement_threshold)
            {
                return Err(invalid(format!(
                    "{}: thresholds must satisfy 0 < good ({}) < needs_improvement ({})",
                    def.key, def.good_threshold, def.needs_improvement_threshold
                )));
            }
            if !(0.0..=1.0).contains(&def.weight) {
                return Err(invalid(format!(
                    "{}: weight {} outside 0..=1",
                    def.key, def.weight
                )));
            }
        }

        let sum: f64 = self.definitions.iter().map(|d| d.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(invalid(format!("weights sum to {sum}, expected 1.0")));
        }

        Ok(())
    }
}

impl Default for MetricCatalog {
    fn default() -> Self {
        Self::web_vitals()
    }
}
