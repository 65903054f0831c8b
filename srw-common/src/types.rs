//! Wire-level data model shared by the gateway and its tests

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum accepted upload size: 10 MiB
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Multipart form field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "audio";

/// An uploaded audio file as received by the gateway.
///
/// Transient: lives for a single request/response cycle, never persisted.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    /// Client-declared file name (may be empty)
    pub file_name: String,
    /// Client-declared MIME type, if any
    pub content_type: Option<String>,
    /// Raw file bytes
    pub data: Vec<u8>,
}

impl AudioUpload {
    /// Whether the upload plausibly contains WAV audio.
    ///
    /// Accepts a declared MIME type in the `audio/wav` family (including
    /// `audio/wave`) or a `.wav` filename suffix. Content sniffing is
    /// deliberately not attempted.
    pub fn is_wav(&self) -> bool {
        if let Some(content_type) = &self.content_type {
            if content_type.contains("audio/wav") {
                return true;
            }
        }
        self.file_name.ends_with(".wav")
    }

    /// Whether the upload fits under the size cap.
    pub fn within_size_limit(&self) -> bool {
        self.data.len() <= MAX_UPLOAD_BYTES
    }
}

/// Transcription result returned to the client.
///
/// The proxied deployment relays the upstream body through this type;
/// fields outside the core contract are preserved in `extra` so the
/// relayed response matches the upstream response verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    /// Recognized text
    pub transcription: String,
    /// Recognition confidence in [0, 1]
    pub confidence: f64,
    /// Audio duration in seconds
    pub duration: f64,
    /// Wall-clock processing time in seconds
    pub processing_time: f64,
    /// Original upload name, when the producing variant echoes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Original upload size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Upstream passthrough fields outside the core contract
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// JSON error body for all non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn upload(file_name: &str, content_type: Option<&str>, len: usize) -> AudioUpload {
        AudioUpload {
            file_name: file_name.to_string(),
            content_type: content_type.map(|ct| ct.to_string()),
            data: vec![0u8; len],
        }
    }

    #[test]
    fn wav_accepted_by_mime_type() {
        assert!(upload("clip", Some("audio/wav"), 16).is_wav());
        assert!(upload("clip", Some("audio/wave"), 16).is_wav());
    }

    #[test]
    fn wav_accepted_by_filename_suffix() {
        assert!(upload("clip.wav", None, 16).is_wav());
        assert!(upload("clip.wav", Some("application/octet-stream"), 16).is_wav());
    }

    #[test]
    fn non_wav_rejected() {
        assert!(!upload("notes.txt", Some("text/plain"), 16).is_wav());
        assert!(!upload("clip.mp3", Some("audio/mpeg"), 16).is_wav());
        assert!(!upload("", None, 16).is_wav());
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(upload("clip.wav", None, MAX_UPLOAD_BYTES).within_size_limit());
        assert!(!upload("clip.wav", None, MAX_UPLOAD_BYTES + 1).within_size_limit());
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = ProcessingResult {
            transcription: "hello".to_string(),
            confidence: 0.9,
            duration: 4.2,
            processing_time: 2.5,
            file_name: Some("clip.wav".to_string()),
            file_size: Some(1024),
            extra: serde_json::Map::new(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["transcription"], "hello");
        assert_eq!(value["processingTime"], 2.5);
        assert_eq!(value["fileName"], "clip.wav");
        assert_eq!(value["fileSize"], 1024);
    }

    #[test]
    fn optional_fields_omitted_when_absent() {
        let result = ProcessingResult {
            transcription: "hello".to_string(),
            confidence: 0.9,
            duration: 4.2,
            processing_time: 2.5,
            file_name: None,
            file_size: None,
            extra: serde_json::Map::new(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("fileName").is_none());
        assert!(value.get("fileSize").is_none());
    }

    #[test]
    fn unknown_upstream_fields_survive_round_trip() {
        let upstream = json!({
            "transcription": "relayed",
            "confidence": 0.95,
            "duration": 7.0,
            "processingTime": 1.3,
            "model": "wav2vec2-base",
            "language": "en",
        });

        let result: ProcessingResult = serde_json::from_value(upstream.clone()).unwrap();
        assert_eq!(result.extra["model"], "wav2vec2-base");

        let relayed = serde_json::to_value(&result).unwrap();
        assert_eq!(relayed, upstream);
    }
}
