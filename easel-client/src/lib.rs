//! Easel HTTP Client
//!
//! A simple, type-safe HTTP client for a Replicate-style image-generation API.
//!
//! This crate covers the three endpoints the CLI consumes (file upload,
//! prediction creation, status reads) plus the polling routine that waits
//! for a prediction to reach a terminal status.
//!
//! # Example
//!
//! ```no_run
//! use easel_client::{PollOptions, ReplicateClient};
//! use easel_core::dto::prediction::PredictionInput;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReplicateClient::new("https://api.replicate.com/v1", "r8_token");
//!
//!     let prediction = client
//!         .create_prediction("black-forest-labs/flux-kontext-max", PredictionInput {
//!             prompt: "a full-body portrait".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     let finished = client.wait_for(&prediction, PollOptions::default()).await?;
//!     println!("Final status: {}", finished.status);
//!     Ok(())
//! }
//! ```

pub mod error;
mod files;
mod predictions;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use predictions::PollOptions;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the remote image-generation API
///
/// This client provides methods for the consumed endpoints, organized
/// into logical groups:
/// - File upload (multipart)
/// - Prediction lifecycle (create, get, wait)
///
/// The bearer token is an explicit constructor parameter; the client
/// never reads the process environment.
#[derive(Debug, Clone)]
pub struct ReplicateClient {
    /// Base URL of the API (e.g., "https://api.replicate.com/v1")
    base_url: String,
    /// Bearer token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl ReplicateClient {
    /// Create a new API client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "https://api.replicate.com/v1")
    /// * `token` - The bearer token used to authenticate every request
    ///
    /// # Example
    /// ```
    /// use easel_client::ReplicateClient;
    ///
    /// let client = ReplicateClient::new("https://api.replicate.com/v1", "r8_token");
    /// ```
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API
    /// * `token` - The bearer token used to authenticate every request
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use easel_client::ReplicateClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(120))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ReplicateClient::with_client(
    ///     "https://api.replicate.com/v1",
    ///     "r8_token",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value for the Authorization header sent with every request
    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
