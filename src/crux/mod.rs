//! Field data acquisition.
//!
//! Fetches Core Web Vitals field data from the Chrome UX Report API, or
//! from a deterministic mock when no API key is configured, and fans
//! multi-URL batches out over a thread pool.
//!
//! # Example
//!
//! ```
//! use vitals_tools::crux::{fetch_all, MockSource};
//!
//! let urls = vec!["example.com".to_string(), "http://example.org/page".to_string()];
//! let (results, stats) = fetch_all(&MockSource::new(), &urls, 4);
//!
//! assert_eq!(results[1].url, "https://example.org");
//! assert_eq!(stats.successful, 2);
//! ```

#[cfg(feature = "live")]
mod client;
mod mapper;
mod mock;
pub mod response;
mod stats;
mod traits;

#[cfg(feature = "live")]
pub use client::{CruxClient, CruxClientConfig, CruxSource};
pub use mapper::{map_response, process_record};
pub use mock::{mock_observations, MockSource};
pub use response::{CruxRecord, FormFactor, QueryRequest, QueryResponse};
pub use stats::FetchStats;
pub use traits::VitalsSource;

use crate::config::SourceConfig;
use crate::error::Result;
use crate::model::UrlAnalysis;
use rayon::prelude::*;
use std::time::Instant;

/// Placeholder key shipped in sample configuration; treated as no key.
pub const PLACEHOLDER_API_KEY: &str = "your_google_api_key_here";

/// Whether `key` is a usable API key.
#[must_use]
pub fn is_usable_api_key(key: Option<&str>) -> bool {
    key.map(str::trim)
        .is_some_and(|k| !k.is_empty() && k != PLACEHOLDER_API_KEY)
}

/// Pick the field data source for a configuration.
///
/// Falls back to [`MockSource`] when mock data is forced, no usable key is
/// configured, or the binary was built without the `live` feature.
pub fn select_source(config: &SourceConfig) -> Result<Box<dyn VitalsSource>> {
    if config.force_mock {
        tracing::info!("Using mock field data (forced)");
        return Ok(Box::new(MockSource::new()));
    }
    if !is_usable_api_key(config.api_key.as_deref()) {
        tracing::warn!("No CrUX API key configured, using mock field data");
        return Ok(Box::new(MockSource::new()));
    }
    live_source(config)
}

#[cfg(feature = "live")]
fn live_source(config: &SourceConfig) -> Result<Box<dyn VitalsSource>> {
    let client_config = CruxClientConfig {
        api_base: config.api_base.clone(),
        api_key: config.api_key.clone().unwrap_or_default(),
        form_factor: config.form_factor,
        timeout: std::time::Duration::from_secs(config.timeout_secs),
    };
    tracing::info!(form_factor = %config.form_factor, "Using CrUX field data");
    Ok(Box::new(CruxSource::new(client_config)?))
}

#[cfg(not(feature = "live"))]
fn live_source(_config: &SourceConfig) -> Result<Box<dyn VitalsSource>> {
    tracing::warn!("Built without the `live` feature, using mock field data");
    Ok(Box::new(MockSource::new()))
}

/// Fetch every URL, at most `max_concurrent` at a time.
///
/// Results are in input order. Each URL yields its own success or failure;
/// one failure never cancels its siblings.
pub fn fetch_all(
    source: &dyn VitalsSource,
    urls: &[String],
    max_concurrent: usize,
) -> (Vec<UrlAnalysis>, FetchStats) {
    let start = Instant::now();
    let threads = max_concurrent.clamp(1, urls.len().max(1));

    tracing::debug!(
        urls = urls.len(),
        threads,
        source = source.name(),
        "fetching field data"
    );

    let results: Vec<UrlAnalysis> = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(|| urls.par_iter().map(|url| source.fetch(url)).collect()),
        Err(err) => {
            tracing::warn!("Failed to build fetch pool ({err}), fetching sequentially");
            urls.iter().map(|url| source.fetch(url)).collect()
        }
    };

    let stats = FetchStats::from_results(&results, start.elapsed());
    stats.log_summary();
    (results, stats)
}
