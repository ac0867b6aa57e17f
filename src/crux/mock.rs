//! Deterministic synthetic field data.

use super::traits::VitalsSource;
use crate::model::{HistogramBin, MetricKey, MetricObservation, Observations, UrlAnalysis};
use crate::utils::normalize_origin;

/// Source that returns the same fixed record for every URL.
///
/// Used when no API key is configured, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl VitalsSource for MockSource {
    fn fetch(&self, url: &str) -> UrlAnalysis {
        UrlAnalysis::success(normalize_origin(url), url, mock_observations(), true)
    }

    fn name(&self) -> &'static str {
        "Mock"
    }

    fn is_live(&self) -> bool {
        false
    }
}

/// The synthetic observations every mock fetch returns.
#[must_use]
pub fn mock_observations() -> Observations {
    let metric = |p75, p95, bins: [(f64, f64, f64); 3]| MetricObservation {
        p75: Some(p75),
        p95: Some(p95),
        histogram: bins
            .iter()
            .map(|&(start, end, density)| HistogramBin::new(start, Some(end), density))
            .collect(),
    };

    let mut observations = Observations::new();
    observations.insert(
        MetricKey::LargestContentfulPaint,
        metric(
            2800.0,
            4500.0,
            [(0.0, 2500.0, 0.7), (2500.0, 4000.0, 0.2), (4000.0, 8000.0, 0.1)],
        ),
    );
    observations.insert(
        MetricKey::CumulativeLayoutShift,
        metric(
            0.08,
            0.15,
            [(0.0, 0.1, 0.8), (0.1, 0.25, 0.15), (0.25, 1.0, 0.05)],
        ),
    );
    observations.insert(
        MetricKey::FirstContentfulPaint,
        metric(
            2200.0,
            3500.0,
            [(0.0, 1800.0, 0.6), (1800.0, 3000.0, 0.3), (3000.0, 6000.0, 0.1)],
        ),
    );
    observations.insert(
        MetricKey::InteractionToNextPaint,
        metric(
            180.0,
            300.0,
            [(0.0, 200.0, 0.75), (200.0, 500.0, 0.2), (500.0, 1000.0, 0.05)],
        ),
    );
    observations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_is_deterministic() {
        let source = MockSource::new();
        let a = source.fetch("example.com");
        let b = source.fetch("example.com");
        assert_eq!(a, b);
        assert!(a.success);
        assert!(a.is_mock_data);
        assert_eq!(a.url, "https://example.com");
        assert_eq!(a.original_url, "example.com");
    }

    #[test]
    fn test_mock_observations_values() {
        let obs = mock_observations();
        let keys: Vec<_> = obs.keys().copied().collect();
        assert_eq!(keys, MetricKey::ALL.to_vec());
        assert_eq!(obs[&MetricKey::LargestContentfulPaint].p75, Some(2800.0));
        assert_eq!(obs[&MetricKey::CumulativeLayoutShift].p95, Some(0.15));
        assert_eq!(obs[&MetricKey::InteractionToNextPaint].good_density(), Some(0.75));
    }

    #[test]
    fn test_mock_source_identity() {
        assert_eq!(MockSource.name(), "Mock");
        assert!(!MockSource.is_live());
    }
}
