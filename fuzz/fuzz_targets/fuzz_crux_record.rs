#![no_main]
use libfuzzer_sys::fuzz_target;
use vitals_tools::crux::{map_response, QueryResponse};
use vitals_tools::scoring::PerformanceScorer;

/// Fuzz the CrUX response mapper.
///
/// Decodes arbitrary JSON as a query response, maps it into observations
/// and scores the result. Scoring may reject values, but nothing may panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(response) = serde_json::from_slice::<QueryResponse>(data) {
        let analysis = map_response("fuzz.example", "https://fuzz.example", &response);
        let _ = PerformanceScorer::default().score_optional(analysis.scorable_observations());
    }
});
