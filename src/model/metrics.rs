//! Metric keys and per-metric observations.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Observations for one URL, keyed by metric in insertion order.
pub type Observations = IndexMap<MetricKey, MetricObservation>;

/// One of the four tracked Core Web Vitals metrics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    /// Paint timing of the largest content element
    LargestContentfulPaint,
    /// Visual stability
    CumulativeLayoutShift,
    /// Paint timing of the first content
    FirstContentfulPaint,
    /// Interaction responsiveness
    InteractionToNextPaint,
}

impl MetricKey {
    /// All metric keys in catalog order.
    pub const ALL: [Self; 4] = [
        Self::LargestContentfulPaint,
        Self::CumulativeLayoutShift,
        Self::FirstContentfulPaint,
        Self::InteractionToNextPaint,
    ];

    /// Wire name used by the field data API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LargestContentfulPaint => "largest_contentful_paint",
            Self::CumulativeLayoutShift => "cumulative_layout_shift",
            Self::FirstContentfulPaint => "first_contentful_paint",
            Self::InteractionToNextPaint => "interaction_to_next_paint",
        }
    }

    /// Short acronym (LCP, CLS, FCP, INP).
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::LargestContentfulPaint => "LCP",
            Self::CumulativeLayoutShift => "CLS",
            Self::FirstContentfulPaint => "FCP",
            Self::InteractionToNextPaint => "INP",
        }
    }

    /// Parse a wire name. Unknown names yield `None` so that new upstream
    /// metrics can be skipped instead of failing the whole record.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single histogram bucket. The last CrUX bucket has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    pub density: f64,
}

impl HistogramBin {
    #[must_use]
    pub fn new(start: f64, end: Option<f64>, density: f64) -> Self {
        Self {
            start,
            end,
            density,
        }
    }
}

/// Measured distribution of one metric for one URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricObservation {
    /// 75th percentile
    pub p75: Option<f64>,
    /// 95th percentile
    pub p95: Option<f64>,
    /// Histogram buckets in ascending order
    #[serde(default)]
    pub histogram: Vec<HistogramBin>,
}

impl MetricObservation {
    /// Observation with percentiles only.
    #[must_use]
    pub fn from_p75(p75: f64) -> Self {
        Self {
            p75: Some(p75),
            p95: None,
            histogram: Vec::new(),
        }
    }

    /// Share of sessions in the first ("good") bucket, if reported.
    #[must_use]
    pub fn good_density(&self) -> Option<f64> {
        self.histogram
            .first()
            .map(|bin| bin.density)
            .filter(|d| *d > 0.0)
    }
}
