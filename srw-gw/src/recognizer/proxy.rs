//! Proxied recognition backend (variant B)
//!
//! Re-encodes the upload as a multipart form and forwards it to an
//! external prediction service, relaying the upstream response.

use super::RecognizerError;
use reqwest::multipart;
use srw_common::types::{AudioUpload, ProcessingResult};
use tracing::debug;

/// Prediction endpoint path on the upstream service
const PREDICT_PATH: &str = "/predict-audio";

/// Upstream form field carrying the forwarded file
const UPSTREAM_FIELD: &str = "file";

/// Forwarding client for the upstream prediction service
pub struct ProxyRecognizer {
    client: reqwest::Client,
    base_url: String,
}

impl ProxyRecognizer {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Forward the upload and relay the upstream result.
    ///
    /// Non-success upstream statuses become `UpstreamStatus`; the caller
    /// relays the status code but not the upstream body.
    pub async fn recognize(
        &self,
        upload: &AudioUpload,
    ) -> Result<ProcessingResult, RecognizerError> {
        let part = multipart::Part::bytes(upload.data.clone())
            .file_name(upload.file_name.clone())
            .mime_str(upload.content_type.as_deref().unwrap_or("audio/wav"))?;
        let form = multipart::Form::new().part(UPSTREAM_FIELD, part);

        let url = format!("{}{}", self.base_url, PREDICT_PATH);
        debug!(
            "Forwarding {} ({} bytes) to {}",
            upload.file_name,
            upload.data.len(),
            url
        );

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecognizerError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ProcessingResult>()
            .await
            .map_err(|e| RecognizerError::InvalidResponse(e.to_string()))
    }
}
