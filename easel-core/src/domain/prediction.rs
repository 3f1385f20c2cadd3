//! Prediction domain model
//!
//! Represents a remote image-generation job and its status payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A remote image-generation job
///
/// This is the status payload the remote API returns for a prediction.
/// The typed fields cover everything the CLI renders; any additional
/// implementation-defined fields are kept in `extra` so the payload
/// survives a round trip unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Opaque identifier assigned by the remote service
    pub id: String,

    /// Model that runs (or ran) this prediction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Current status of the prediction
    pub status: PredictionStatus,

    /// Input the prediction was created with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,

    /// Generation output; a URL string or an array of URL strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,

    /// Error message reported by the remote service, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Model logs accumulated so far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<String>,

    /// Resource URLs for this prediction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<PredictionUrls>,

    /// Runtime metrics reported once the prediction completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Remaining implementation-defined fields, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Prediction {
    /// URL of this prediction's status resource, if the service provided one
    pub fn status_url(&self) -> Option<&str> {
        self.urls.as_ref().and_then(|urls| urls.get.as_deref())
    }

    /// Output URLs, normalized to a list
    ///
    /// The remote returns either a single URL string or an array of URL
    /// strings depending on the model; both shapes collapse to a `Vec` here.
    pub fn output_urls(&self) -> Vec<String> {
        match &self.output {
            Some(serde_json::Value::String(url)) => vec![url.clone()],
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Resource URLs attached to a prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionUrls {
    /// Status endpoint for polling this prediction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<String>,

    /// Cancellation endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel: Option<String>,
}

/// Prediction status, as tagged by the remote service
///
/// `Unknown` absorbs tags this crate does not recognize; the poller
/// treats them as in-flight rather than failing the wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl PredictionStatus {
    /// Whether no further progress will occur from this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Canceled)
    }
}

impl std::fmt::Display for PredictionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            PredictionStatus::Starting => "starting",
            PredictionStatus::Processing => "processing",
            PredictionStatus::Succeeded => "succeeded",
            PredictionStatus::Failed => "failed",
            PredictionStatus::Canceled => "canceled",
            PredictionStatus::Unknown => "unknown",
        };
        write!(f, "{}", tag)
    }
}
