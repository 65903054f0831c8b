//! Recognition backends
//!
//! A deployment runs exactly one backend, selected by `RecognitionMode`
//! at startup. Both variants accept the same validated upload and produce
//! the same wire-level result type.

pub mod proxy;
pub mod simulated;

pub use proxy::ProxyRecognizer;
pub use simulated::SimulatedRecognizer;

use srw_common::config::{GatewayConfig, RecognitionMode};
use srw_common::types::{AudioUpload, ProcessingResult};
use thiserror::Error;

/// Recognition backend errors
#[derive(Debug, Error)]
pub enum RecognizerError {
    /// Upstream service returned a non-success status.
    ///
    /// The body is kept for server-side logging only and is never relayed
    /// to the client.
    #[error("upstream service returned HTTP {status}")]
    UpstreamStatus { status: u16, body: String },

    /// Failed to reach the upstream service
    #[error("upstream request failed: {0}")]
    UpstreamRequest(#[from] reqwest::Error),

    /// Upstream returned a body that does not match the result contract
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}

/// Active recognition backend for this deployment
pub enum Recognizer {
    Simulated(SimulatedRecognizer),
    Proxy(ProxyRecognizer),
}

impl Recognizer {
    /// Build the backend selected by the gateway configuration.
    pub fn from_config(config: &GatewayConfig) -> srw_common::Result<Self> {
        match config.mode {
            RecognitionMode::Simulated => Ok(Recognizer::Simulated(SimulatedRecognizer::new())),
            RecognitionMode::Proxied => {
                let base_url = config.upstream_base_url.clone().ok_or_else(|| {
                    srw_common::Error::Config(
                        "Proxied mode requires an upstream base URL".to_string(),
                    )
                })?;
                Ok(Recognizer::Proxy(ProxyRecognizer::new(base_url)))
            }
        }
    }

    /// Run a validated upload through the active backend.
    pub async fn recognize(
        &self,
        upload: &AudioUpload,
    ) -> Result<ProcessingResult, RecognizerError> {
        match self {
            Recognizer::Simulated(simulated) => Ok(simulated.recognize(upload).await),
            Recognizer::Proxy(proxy) => proxy.recognize(upload).await,
        }
    }
}
