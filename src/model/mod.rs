//! Data model for Core Web Vitals field data.
//!
//! The fetch layer produces [`UrlAnalysis`] values holding per-metric
//! [`MetricObservation`]s; the scoring engine reads them and never mutates
//! them. Metric keys are the four fixed [`MetricKey`] variants; anything
//! else reported upstream is dropped at the mapping boundary.

mod analysis;
mod metrics;

pub use analysis::{FailureKind, FetchFailure, UrlAnalysis};
pub use metrics::{HistogramBin, MetricKey, MetricObservation, Observations};
