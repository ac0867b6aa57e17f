//! Per-URL fetch outcome.

use super::Observations;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The URL was rejected upstream (HTTP 400)
    Validation,
    /// Missing or rejected API key (HTTP 401/403)
    Authentication,
    /// No field data for this origin (HTTP 404 or empty record)
    NotFound,
    /// Upstream quota exhausted (HTTP 429)
    RateLimit,
    /// Any other upstream error status
    Server,
    /// Field data was fetched but holds values that cannot be scored
    InvalidData,
    /// Transport or decoding failure
    Unknown,
}

impl FailureKind {
    /// Canned user-facing message for this failure kind.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Validation => "Invalid URL format. Please provide a valid URL.",
            Self::Authentication => "Invalid API key. Please check your configuration.",
            Self::NotFound => "No performance data available for this URL.",
            Self::RateLimit => "Too many requests. Please try again later.",
            Self::InvalidData => "Field data contained values that cannot be scored.",
            Self::Server | Self::Unknown => "Internal server error. Please try again later.",
        }
    }

    /// Map an HTTP status code to a failure kind.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            401 | 403 => Self::Authentication,
            404 => Self::NotFound,
            429 => Self::RateLimit,
            _ => Self::Server,
        }
    }
}

/// A typed fetch failure carried as data, not as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchFailure {
    /// Failure with the canned message for `kind`.
    #[must_use]
    pub fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }

    /// Failure with a custom message.
    pub fn with_message(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Result of fetching field data for one URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlAnalysis {
    /// Whether observations were retrieved
    pub success: bool,
    /// Normalized origin that was queried
    pub url: String,
    /// URL as entered by the user
    pub original_url: String,
    /// Per-metric observations (present on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<Observations>,
    /// Whether the observations are synthetic
    #[serde(default)]
    pub is_mock_data: bool,
    /// Failure details (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FetchFailure>,
}

impl UrlAnalysis {
    /// Successful fetch.
    pub fn success(
        url: impl Into<String>,
        original_url: impl Into<String>,
        observations: Observations,
        is_mock_data: bool,
    ) -> Self {
        Self {
            success: true,
            url: url.into(),
            original_url: original_url.into(),
            observations: Some(observations),
            is_mock_data,
            error: None,
        }
    }

    /// Failed fetch. Both URL fields carry the user's input.
    pub fn failure(original_url: impl Into<String>, failure: FetchFailure) -> Self {
        let original_url = original_url.into();
        Self {
            success: false,
            url: original_url.clone(),
            original_url,
            observations: None,
            is_mock_data: false,
            error: Some(failure),
        }
    }

    /// Demote a fetched result whose observations cannot be scored.
    ///
    /// The normalized URL is kept; observations are dropped so downstream
    /// stages treat the entry like any other failure.
    #[must_use]
    pub fn into_unscorable(self, message: impl Into<String>) -> Self {
        Self {
            success: false,
            observations: None,
            error: Some(FetchFailure::with_message(FailureKind::InvalidData, message)),
            ..self
        }
    }

    /// Whether this entry was fetched but could not be scored.
    #[must_use]
    pub fn is_unscorable(&self) -> bool {
        matches!(&self.error, Some(failure) if failure.kind == FailureKind::InvalidData)
    }

    /// Label used when presenting this URL: the user's input, or the
    /// normalized origin when the input is empty.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.original_url.is_empty() {
            &self.url
        } else {
            &self.original_url
        }
    }

    /// Observations, only when the fetch succeeded.
    #[must_use]
    pub fn scorable_observations(&self) -> Option<&Observations> {
        if self.success {
            self.observations.as_ref()
        } else {
            None
        }
    }
}
