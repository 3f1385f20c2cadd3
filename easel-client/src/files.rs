//! File upload endpoint

use std::path::Path;

use reqwest::header;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::ReplicateClient;
use crate::error::Result;
use easel_core::domain::file::UploadedFile;

impl ReplicateClient {
    /// Upload a local file and get back its retrievable URL
    ///
    /// Sends a multipart form with a single `content` part carrying the
    /// file bytes, its original filename, and a MIME type guessed from
    /// the extension (falling back to `application/octet-stream`).
    ///
    /// # Arguments
    /// * `path` - Path to the file to upload
    ///
    /// # Returns
    /// The stored file record; `urls.get` is the URL to reference in a
    /// prediction input
    pub async fn upload_file(&self, path: &Path) -> Result<UploadedFile> {
        let bytes = tokio::fs::read(path).await?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();

        debug!(
            file = %file_name,
            mime = %mime,
            size = bytes.len(),
            "uploading file"
        );

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime.essence_str())?;
        let form = Form::new().part("content", part);

        let url = format!("{}/files", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, self.bearer())
            .multipart(form)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
