//! Speech recognition endpoint
//!
//! Accepts a multipart `.wav` upload, validates it, and returns the
//! transcription result from the deployment's recognizer.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::recognizer::RecognizerError;
use crate::AppState;
use srw_common::types::{AudioUpload, ProcessingResult, UPLOAD_FIELD};

/// POST /api/speech-recognition
///
/// Multipart form data with file field `audio`. Validation failures are
/// 400s with client-facing messages; recognizer failures map to the
/// upstream status (proxied) or a generic 500.
pub async fn recognize_speech(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ProcessingResult>, RecognitionError> {
    let request_id = Uuid::new_v4();

    let upload = read_audio_field(multipart).await?;
    validate_upload(&upload)?;

    info!(
        "[{}] Accepted upload: {} ({} bytes)",
        request_id,
        upload.file_name,
        upload.data.len()
    );

    let result = state
        .recognizer
        .recognize(&upload)
        .await
        .map_err(|e| match e {
            RecognizerError::UpstreamStatus { status, body } => {
                error!(
                    "[{}] Upstream rejected request (HTTP {}): {}",
                    request_id, status, body
                );
                RecognitionError::Upstream { status }
            }
            other => {
                error!("[{}] Recognition failed: {}", request_id, other);
                RecognitionError::Internal
            }
        })?;

    info!(
        "[{}] Recognition complete in {:.2}s (confidence {:.3})",
        request_id, result.processing_time, result.confidence
    );

    Ok(Json(result))
}

/// Pull the `audio` file field out of the multipart body.
///
/// Only the first `audio` field is taken; unrelated fields are ignored.
async fn read_audio_field(mut multipart: Multipart) -> Result<AudioUpload, RecognitionError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| RecognitionError::Malformed(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(|ct| ct.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| RecognitionError::Malformed(e.to_string()))?
            .to_vec();

        return Ok(AudioUpload {
            file_name,
            content_type,
            data,
        });
    }

    Err(RecognitionError::MissingFile)
}

/// Reject uploads that are not plausibly `.wav` or exceed the size cap.
fn validate_upload(upload: &AudioUpload) -> Result<(), RecognitionError> {
    if !upload.is_wav() {
        return Err(RecognitionError::InvalidFileType);
    }
    if !upload.within_size_limit() {
        return Err(RecognitionError::FileTooLarge);
    }
    Ok(())
}

/// Recognition endpoint errors
#[derive(Debug)]
pub enum RecognitionError {
    /// No `audio` file field in the form data
    MissingFile,
    /// Neither MIME type nor filename indicates `.wav`
    InvalidFileType,
    /// File exceeds the 10 MiB cap
    FileTooLarge,
    /// Unreadable multipart body
    Malformed(String),
    /// Upstream service returned a non-success status (proxied mode)
    Upstream { status: u16 },
    /// Unexpected failure; detail stays in the server log
    Internal,
}

impl IntoResponse for RecognitionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RecognitionError::MissingFile => (
                StatusCode::BAD_REQUEST,
                "No audio file provided".to_string(),
            ),
            RecognitionError::InvalidFileType => (
                StatusCode::BAD_REQUEST,
                "Invalid file type. Please upload a .wav file.".to_string(),
            ),
            RecognitionError::FileTooLarge => (
                StatusCode::BAD_REQUEST,
                "File too large. Please upload a file smaller than 10MB.".to_string(),
            ),
            RecognitionError::Malformed(msg) => {
                (StatusCode::BAD_REQUEST, format!("Malformed upload: {}", msg))
            }
            RecognitionError::Upstream { status } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Speech recognition service returned an error".to_string(),
            ),
            RecognitionError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error during speech recognition processing".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srw_common::types::MAX_UPLOAD_BYTES;

    fn upload(file_name: &str, content_type: Option<&str>, len: usize) -> AudioUpload {
        AudioUpload {
            file_name: file_name.to_string(),
            content_type: content_type.map(|ct| ct.to_string()),
            data: vec![0u8; len],
        }
    }

    #[test]
    fn wav_uploads_pass_validation() {
        assert!(validate_upload(&upload("a.wav", Some("audio/wav"), 64)).is_ok());
        assert!(validate_upload(&upload("a.wav", None, 64)).is_ok());
        assert!(validate_upload(&upload("clip", Some("audio/wave"), 64)).is_ok());
    }

    #[test]
    fn wrong_type_fails_before_size() {
        // An oversized non-wav upload reports the type error
        let result = validate_upload(&upload("a.txt", Some("text/plain"), MAX_UPLOAD_BYTES + 1));
        assert!(matches!(result, Err(RecognitionError::InvalidFileType)));
    }

    #[test]
    fn size_cap_is_inclusive() {
        assert!(validate_upload(&upload("a.wav", None, MAX_UPLOAD_BYTES)).is_ok());
        let result = validate_upload(&upload("a.wav", None, MAX_UPLOAD_BYTES + 1));
        assert!(matches!(result, Err(RecognitionError::FileTooLarge)));
    }
}
