//! Field data source abstraction.

use crate::model::UrlAnalysis;

/// A source of per-URL field data.
///
/// Implementations never fail as a whole: transport and upstream errors are
/// reported as an unsuccessful [`UrlAnalysis`] so one bad URL cannot sink a
/// batch.
///
/// # Example
///
/// ```ignore
/// use vitals_tools::crux::{MockSource, VitalsSource};
///
/// let source: Box<dyn VitalsSource> = if config.has_api_key() {
///     Box::new(CruxSource::new(client_config)?)
/// } else {
///     Box::new(MockSource::new())
/// };
///
/// let analysis = source.fetch("example.com");
/// ```
pub trait VitalsSource: Send + Sync {
    /// Fetch field data for one user-supplied URL.
    fn fetch(&self, url: &str) -> UrlAnalysis;

    /// Name of this source (e.g., "CrUX", "Mock").
    fn name(&self) -> &'static str;

    /// Whether this source returns real field data.
    fn is_live(&self) -> bool;
}
