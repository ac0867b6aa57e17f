//! Chrome UX Report API request and response types.
//!
//! These types model the `records:queryRecord` wire format.
//! See: https://developer.chrome.com/docs/crux/api

use crate::model::MetricKey;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Device class to query field data for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    #[default]
    Phone,
    Desktop,
    Tablet,
    /// All devices combined (no form factor filter)
    All,
}

impl FormFactor {
    /// Value sent in the `formFactor` field, `None` for all devices.
    #[must_use]
    pub const fn api_value(&self) -> Option<&'static str> {
        match self {
            Self::Phone => Some("PHONE"),
            Self::Desktop => Some("DESKTOP"),
            Self::Tablet => Some("TABLET"),
            Self::All => None,
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phone => write!(f, "phone"),
            Self::Desktop => write!(f, "desktop"),
            Self::Tablet => write!(f, "tablet"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Body of a `records:queryRecord` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<&'static str>,
    pub metrics: Vec<&'static str>,
}

impl QueryRequest {
    /// Request for every tracked metric of `origin`.
    #[must_use]
    pub fn for_origin(origin: impl Into<String>, form_factor: FormFactor) -> Self {
        Self {
            origin: origin.into(),
            form_factor: form_factor.api_value(),
            metrics: MetricKey::ALL.iter().map(MetricKey::as_str).collect(),
        }
    }
}

/// Top-level response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub record: Option<CruxRecord>,
}

/// One field data record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CruxRecord {
    #[serde(default)]
    pub key: Option<RecordKey>,
    /// Metric payloads keyed by wire name, including metrics we do not track
    #[serde(default)]
    pub metrics: IndexMap<String, CruxMetric>,
}

/// Identifies what the record describes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordKey {
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub form_factor: Option<String>,
}

/// Distribution of one metric.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CruxMetric {
    #[serde(default)]
    pub histogram: Vec<CruxHistogramBin>,
    #[serde(default)]
    pub percentiles: Option<CruxPercentiles>,
}

/// Histogram bucket. CLS bounds arrive as strings ("0.10").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CruxHistogramBin {
    #[serde(default)]
    pub start: Option<NumericValue>,
    #[serde(default)]
    pub end: Option<NumericValue>,
    #[serde(default)]
    pub density: Option<NumericValue>,
}

/// Percentile values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CruxPercentiles {
    #[serde(default)]
    pub p75: Option<NumericValue>,
    #[serde(default)]
    pub p95: Option<NumericValue>,
}

/// A number that may be encoded as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
}

impl NumericValue {
    /// The numeric value, `None` if a string does not parse.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}
