//! Uploaded file domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file stored by the remote service
///
/// Returned by the upload endpoint; `urls.get` is the retrievable URL
/// that gets threaded into a prediction's `input_image`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Opaque identifier assigned by the remote service
    pub id: String,

    /// Original filename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// MIME type recorded at upload time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Resource URLs for this file
    pub urls: FileUrls,
}

/// Resource URLs attached to an uploaded file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUrls {
    /// URL from which the file content can be retrieved
    pub get: String,
}
