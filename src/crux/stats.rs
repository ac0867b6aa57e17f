//! Fetch statistics.

use crate::model::UrlAnalysis;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Statistics from a batch fetch.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchStats {
    /// Number of URLs requested
    pub total: usize,
    /// Number of URLs with field data
    pub successful: usize,
    /// Number of URLs that failed
    pub failed: usize,
    /// Number of successful results that were synthetic
    pub mock: usize,
    /// Wall-clock duration of the batch
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl FetchStats {
    /// Tally a finished batch.
    #[must_use]
    pub fn from_results(results: &[UrlAnalysis], duration: Duration) -> Self {
        let successful = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            successful,
            failed: results.len() - successful,
            mock: results.iter().filter(|r| r.success && r.is_mock_data).count(),
            duration,
        }
    }

    /// Move one fetched result into the failed column after its data
    /// turned out to be unscorable.
    pub fn mark_unscorable(&mut self, was_mock: bool) {
        self.successful = self.successful.saturating_sub(1);
        self.failed += 1;
        if was_mock {
            self.mock = self.mock.saturating_sub(1);
        }
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Log a summary of the batch
    pub fn log_summary(&self) {
        tracing::info!(
            "Fetch complete: {} URLs, {} successful ({} mock), {} failed in {:?}",
            self.total,
            self.successful,
            self.mock,
            self.failed,
            self.duration
        );
    }
}

/// Serde support for Duration
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        u64::try_from(duration.as_millis())
            .unwrap_or(u64::MAX)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
