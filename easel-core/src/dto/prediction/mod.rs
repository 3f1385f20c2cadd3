//! Prediction DTOs for the remote API

use serde::{Deserialize, Serialize};

/// Request to create a new prediction
///
/// The remote expects model inputs wrapped in an `input` envelope:
/// `{"input": {"prompt": ..., "input_image": ..., "aspect_ratio": ...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePrediction {
    pub input: PredictionInput,
}

/// Model inputs for an image-generation prediction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Generation prompt
    pub prompt: String,

    /// Retrievable URL of the reference image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_image: Option<String>,

    /// Aspect ratio of the generated image (e.g. "2:3")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}
