//! Prediction-related API endpoints
//!
//! Creation, status reads, and the wait loop that polls a prediction
//! until it reaches a terminal status.

use std::time::{Duration, Instant};

use reqwest::header;
use tracing::debug;

use crate::ReplicateClient;
use crate::error::{ClientError, Result};
use easel_core::domain::prediction::Prediction;
use easel_core::dto::prediction::{CreatePrediction, PredictionInput};

/// Options for [`ReplicateClient::wait_for_prediction`]
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    /// Delay between status reads
    pub interval: Duration,

    /// Maximum time to keep polling before giving up
    pub max_wait: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_wait: Duration::from_secs(600),
        }
    }
}

impl ReplicateClient {
    // =============================================================================
    // Prediction Lifecycle
    // =============================================================================

    /// Create a new prediction
    ///
    /// # Arguments
    /// * `model` - Model identifier in `owner/name` form
    /// * `input` - Model inputs (prompt, reference image URL, aspect ratio)
    ///
    /// # Returns
    /// The created prediction, usually still in a non-terminal status
    ///
    /// # Example
    /// ```no_run
    /// # use easel_client::ReplicateClient;
    /// # use easel_core::dto::prediction::PredictionInput;
    /// # async fn example() -> easel_client::Result<()> {
    /// let client = ReplicateClient::new("https://api.replicate.com/v1", "r8_token");
    /// let prediction = client
    ///     .create_prediction("black-forest-labs/flux-kontext-max", PredictionInput {
    ///         prompt: "a full-body portrait".to_string(),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_prediction(&self, model: &str, input: PredictionInput) -> Result<Prediction> {
        let url = format!("{}/models/{}/predictions", self.base_url, model);
        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, self.bearer())
            .json(&CreatePrediction { input })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a prediction by ID
    ///
    /// # Arguments
    /// * `id` - The prediction identifier
    ///
    /// # Returns
    /// The current status payload
    pub async fn get_prediction(&self, id: &str) -> Result<Prediction> {
        let url = format!("{}/predictions/{}", self.base_url, id);
        self.get_prediction_at(&url).await
    }

    /// Get a prediction from a fully-formed status URL
    ///
    /// The creation response carries the status URL in `urls.get`; this
    /// method reads it directly, one network read per call.
    pub async fn get_prediction_at(&self, url: &str) -> Result<Prediction> {
        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, self.bearer())
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Polling
    // =============================================================================

    /// Poll a prediction's status URL until it reaches a terminal status
    ///
    /// Each iteration issues one status read. A terminal payload
    /// (succeeded, failed, or canceled) is returned immediately; a
    /// `failed` or `canceled` prediction is a normal return, not an
    /// error. Transport and HTTP errors from a read propagate
    /// immediately and are never retried.
    ///
    /// The deadline is checked only between reads, so the actual wait
    /// can overrun `max_wait` by up to one interval plus one request
    /// latency.
    ///
    /// # Arguments
    /// * `status_url` - The prediction's status resource (`urls.get`)
    /// * `options` - Poll interval and maximum wait
    ///
    /// # Returns
    /// The terminal status payload, or [`ClientError::Timeout`] once the
    /// deadline elapses
    pub async fn wait_for_prediction(
        &self,
        status_url: &str,
        options: PollOptions,
    ) -> Result<Prediction> {
        let start = Instant::now();

        loop {
            let prediction = self.get_prediction_at(status_url).await?;

            debug!(
                id = %prediction.id,
                status = %prediction.status,
                elapsed_secs = start.elapsed().as_secs(),
                "polled prediction"
            );

            if prediction.status.is_terminal() {
                return Ok(prediction);
            }

            if start.elapsed() > options.max_wait {
                return Err(ClientError::Timeout {
                    waited: options.max_wait,
                });
            }

            tokio::time::sleep(options.interval).await;
        }
    }

    /// Poll a prediction until it reaches a terminal status
    ///
    /// Resolves the status URL from the prediction's own `urls.get`
    /// reference, falling back to `{base}/predictions/{id}` when the
    /// creation response did not carry one.
    ///
    /// # Arguments
    /// * `prediction` - The prediction to wait on, as returned by
    ///   [`ReplicateClient::create_prediction`]
    /// * `options` - Poll interval and maximum wait
    pub async fn wait_for(&self, prediction: &Prediction, options: PollOptions) -> Result<Prediction> {
        match prediction.status_url() {
            Some(url) => self.wait_for_prediction(url, options).await,
            None => {
                let url = format!("{}/predictions/{}", self.base_url, prediction.id);
                self.wait_for_prediction(&url, options).await
            }
        }
    }
}
