//! Unified error types for vitals-tools.
//!
//! Missing or partial field data is never an error: absent metrics are
//! excluded from scoring and failed fetches are carried as data on
//! [`UrlAnalysis`](crate::model::UrlAnalysis). The variants below cover
//! malformed values and transport plumbing. Configuration problems are
//! reported through [`ConfigError`](crate::config::ConfigError) and report
//! output through [`ReportError`](crate::reports::ReportError).

use crate::model::MetricKey;
use thiserror::Error;

/// Main error type for vitals-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VitalsError {
    /// Errors while talking to the field data API
    #[error("Fetch failed: {context}: {source}")]
    Fetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// Errors while scoring observations
    #[error("Scoring failed: {context}: {source}")]
    Scoring {
        context: String,
        #[source]
        source: ScoringErrorKind,
    },
}

/// Specific fetch error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("No record in response")]
    MissingRecord,
}

/// Specific scoring error kinds
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScoringErrorKind {
    #[error("Invalid value {value} for {metric} (must be a finite, non-negative number)")]
    InvalidMetricValue { metric: MetricKey, value: f64 },

    #[error("Invalid metric catalog: {0}")]
    InvalidCatalog(String),
}

/// Convenient Result type for vitals-tools operations
pub type Result<T> = std::result::Result<T, VitalsError>;

impl VitalsError {
    /// Create a fetch error with context
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::Fetch {
            context: context.into(),
            source,
        }
    }

    /// Create a scoring error with context
    pub fn scoring(context: impl Into<String>, source: ScoringErrorKind) -> Self {
        Self::Scoring {
            context: context.into(),
            source,
        }
    }

    /// Create a scoring error for an unusable metric value
    pub fn invalid_metric_value(metric: MetricKey, value: f64) -> Self {
        Self::scoring(
            format!("scoring {metric}"),
            ScoringErrorKind::InvalidMetricValue { metric, value },
        )
    }

    /// The scoring error kind, if this is a scoring error.
    #[must_use]
    pub const fn scoring_kind(&self) -> Option<&ScoringErrorKind> {
        match self {
            Self::Scoring { source, .. } => Some(source),
            Self::Fetch { .. } => None,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// producing chains like `"outer: middle: inner"`.
///
/// # Example
///
/// ```ignore
/// use vitals_tools::error::ErrorContext;
///
/// let response = client
///     .query_origin(&origin)
///     .with_context(|| format!("querying {origin}"))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<VitalsError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: VitalsError, new_ctx: &str) -> VitalsError {
    match err {
        VitalsError::Fetch {
            context: existing,
            source,
        } => VitalsError::Fetch {
            context: chain_context(new_ctx, &existing),
            source,
        },
        VitalsError::Scoring {
            context: existing,
            source,
        } => VitalsError::Scoring {
            context: chain_context(new_ctx, &existing),
            source,
        },
    }
}

/// Chain two context strings together.
///
/// Returns "`new_context`: `existing_context`", or just the new context
/// when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
