//! Maps field data records onto the domain model.

use super::response::{CruxMetric, CruxRecord, QueryResponse};
use crate::model::{
    FailureKind, FetchFailure, HistogramBin, MetricKey, MetricObservation, Observations,
    UrlAnalysis,
};

/// Extract observations from a record.
///
/// Unknown metric names and metrics without percentiles are skipped. A p75
/// of zero is a valid measurement and is kept.
#[must_use]
pub fn process_record(record: &CruxRecord) -> Observations {
    let mut observations = Observations::new();

    for (name, metric) in &record.metrics {
        let Some(key) = MetricKey::from_key(name) else {
            tracing::debug!(metric = %name, "skipping untracked metric");
            continue;
        };
        if let Some(observation) = map_metric(metric) {
            observations.insert(key, observation);
        }
    }

    observations
}

fn map_metric(metric: &CruxMetric) -> Option<MetricObservation> {
    let percentiles = metric.percentiles.as_ref()?;

    let histogram = metric
        .histogram
        .iter()
        .map(|bin| {
            HistogramBin::new(
                bin.start.as_ref().and_then(|v| v.as_f64()).unwrap_or(0.0),
                bin.end.as_ref().and_then(|v| v.as_f64()),
                bin.density.as_ref().and_then(|v| v.as_f64()).unwrap_or(0.0),
            )
        })
        .collect();

    Some(MetricObservation {
        p75: percentiles.p75.as_ref().and_then(|v| v.as_f64()),
        p95: percentiles.p95.as_ref().and_then(|v| v.as_f64()),
        histogram,
    })
}

/// Turn an API response into a [`UrlAnalysis`]. A response without a record
/// means the origin has no field data.
#[must_use]
pub fn map_response(
    original_url: &str,
    origin: &str,
    response: &QueryResponse,
) -> UrlAnalysis {
    match &response.record {
        Some(record) => UrlAnalysis::success(origin, original_url, process_record(record), false),
        None => UrlAnalysis::failure(original_url, FetchFailure::new(FailureKind::NotFound)),
    }
}
