//! Chrome UX Report API HTTP client.

use super::mapper::map_response;
use super::response::{FormFactor, QueryRequest, QueryResponse};
use super::traits::VitalsSource;
use crate::config::DEFAULT_API_BASE;
use crate::error::{ErrorContext, FetchErrorKind, Result, VitalsError};
use crate::model::{FailureKind, FetchFailure, UrlAnalysis};
use crate::utils::normalize_origin;
use reqwest::blocking::Client;
use std::time::Duration;

/// CrUX client configuration.
#[derive(Debug, Clone)]
pub struct CruxClientConfig {
    /// Query endpoint
    pub api_base: String,
    /// Google API key
    pub api_key: String,
    /// Device class to query
    pub form_factor: FormFactor,
    /// Request timeout
    pub timeout: Duration,
}

impl CruxClientConfig {
    /// Configuration with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: api_key.into(),
            form_factor: FormFactor::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the CrUX API.
pub struct CruxClient {
    client: Client,
    config: CruxClientConfig,
}

/// Helper to convert reqwest errors to fetch errors
fn network_error(msg: &str, err: &reqwest::Error) -> VitalsError {
    VitalsError::fetch(msg, FetchErrorKind::NetworkError(err.to_string()))
}

/// Helper to create API errors
fn api_error(status: u16, message: impl Into<String>) -> VitalsError {
    VitalsError::fetch(
        "API request",
        FetchErrorKind::ApiError {
            status,
            message: message.into(),
        },
    )
}

impl CruxClient {
    /// Create a new CrUX client.
    pub fn new(config: CruxClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", &e))?;

        Ok(Self { client, config })
    }

    /// Query the record for one normalized origin.
    pub fn query_origin(&self, origin: &str) -> Result<QueryResponse> {
        let request = QueryRequest::for_origin(origin, self.config.form_factor);

        tracing::debug!(origin, form_factor = %self.config.form_factor, "querying CrUX");

        let response = self
            .client
            .post(&self.config.api_base)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .map_err(|e| network_error("Failed to send query", &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(api_error(status.as_u16(), body));
        }

        response.json().map_err(|e| {
            VitalsError::fetch(
                "parsing response",
                FetchErrorKind::InvalidResponse(e.to_string()),
            )
        })
    }
}

/// Live source backed by [`CruxClient`].
pub struct CruxSource {
    client: CruxClient,
}

impl CruxSource {
    pub fn new(config: CruxClientConfig) -> Result<Self> {
        Ok(Self {
            client: CruxClient::new(config)?,
        })
    }
}

impl VitalsSource for CruxSource {
    fn fetch(&self, url: &str) -> UrlAnalysis {
        let origin = normalize_origin(url);
        let response = self
            .client
            .query_origin(&origin)
            .with_context(|| format!("querying {origin}"));
        match response {
            Ok(response) => map_response(url, &origin, &response),
            Err(err) => {
                tracing::warn!(url, error = %err, "field data fetch failed");
                UrlAnalysis::failure(url, classify_error(&err))
            }
        }
    }

    fn name(&self) -> &'static str {
        "CrUX"
    }

    fn is_live(&self) -> bool {
        true
    }
}

/// Map a fetch error onto the failure reported for the URL.
fn classify_error(err: &VitalsError) -> FetchFailure {
    match err {
        VitalsError::Fetch {
            source: FetchErrorKind::ApiError { status, .. },
            ..
        } => FetchFailure::new(FailureKind::from_status(*status)),
        VitalsError::Fetch {
            source: FetchErrorKind::MissingRecord,
            ..
        } => FetchFailure::new(FailureKind::NotFound),
        other => FetchFailure::with_message(FailureKind::Unknown, other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = CruxClientConfig::new("k");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.form_factor, FormFactor::Phone);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_classify_status_errors() {
        assert_eq!(
            classify_error(&api_error(403, "denied")).kind,
            FailureKind::Authentication
        );
        assert_eq!(
            classify_error(&api_error(429, "")).kind,
            FailureKind::RateLimit
        );
        let server = classify_error(&api_error(503, ""));
        assert_eq!(server.kind, FailureKind::Server);
        assert_eq!(server.message, "Internal server error. Please try again later.");
    }

    #[test]
    fn test_classify_transport_error() {
        let err = VitalsError::fetch(
            "send",
            FetchErrorKind::NetworkError("connection refused".into()),
        );
        let failure = classify_error(&err);
        assert_eq!(failure.kind, FailureKind::Unknown);
        assert!(failure.message.contains("send"));
        assert!(failure.message.contains("connection refused"));
    }

    #[test]
    fn test_unreachable_endpoint_yields_failure() {
        let config = CruxClientConfig {
            api_base: "http://127.0.0.1:9/v1/records:queryRecord".to_string(),
            timeout: Duration::from_millis(200),
            ..CruxClientConfig::new("k")
        };
        let source = CruxSource::new(config).unwrap();
        let analysis = source.fetch("example.com");
        assert!(!analysis.success);
        assert_eq!(analysis.url, "example.com");
        let failure = analysis.error.unwrap();
        assert_eq!(failure.kind, FailureKind::Unknown);
        assert!(failure.message.contains("querying https://example.com"));
    }
}
