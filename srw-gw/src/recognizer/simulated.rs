//! Simulated recognition backend (variant A)
//!
//! Fabricates a plausible transcription result after an artificial delay.
//! Lets the platform run end-to-end without a prediction service.

use rand::Rng;
use srw_common::types::{AudioUpload, ProcessingResult};
use std::ops::Range;
use std::time::{Duration, Instant};

/// Canned transcriptions, sampled uniformly per request
pub const SAMPLE_TRANSCRIPTIONS: [&str; 8] = [
    "Hello, this is a test of the speech recognition system. The weather is beautiful today.",
    "Welcome to our AI-powered speech recognition platform. We hope you find it useful.",
    "The quick brown fox jumps over the lazy dog. This is a common phrase used for testing.",
    "Artificial intelligence has revolutionized the way we process and understand human speech.",
    "Thank you for using our speech recognition service. We appreciate your feedback.",
    "Machine learning algorithms can now transcribe speech with remarkable accuracy.",
    "This technology opens up new possibilities for accessibility and automation.",
    "Voice recognition systems are becoming increasingly sophisticated and reliable.",
];

/// Reported confidence interval
const CONFIDENCE_RANGE: Range<f64> = 0.85..0.99;
/// Reported audio duration interval in seconds
const DURATION_RANGE: Range<f64> = 3.0..15.0;
/// Emulated processing latency window in seconds
const DEFAULT_DELAY_RANGE: Range<f64> = 2.0..5.0;

/// Simulated recognizer with a configurable latency window
pub struct SimulatedRecognizer {
    delay_range: Range<f64>,
}

impl SimulatedRecognizer {
    pub fn new() -> Self {
        Self {
            delay_range: DEFAULT_DELAY_RANGE,
        }
    }

    /// Override the latency window. Tests use a near-zero range.
    pub fn with_delay_range(delay_range: Range<f64>) -> Self {
        Self { delay_range }
    }

    /// Fabricate a result for the upload.
    ///
    /// The async sleep emulates processing latency without blocking other
    /// in-flight requests; `processing_time` reports the measured
    /// wall-clock time of this call.
    pub async fn recognize(&self, upload: &AudioUpload) -> ProcessingResult {
        let started = Instant::now();

        tokio::time::sleep(Duration::from_secs_f64(sample_delay(&self.delay_range))).await;

        let mut rng = rand::thread_rng();
        let index = rng.gen_range(0..SAMPLE_TRANSCRIPTIONS.len());
        let confidence = rng.gen_range(CONFIDENCE_RANGE);
        let duration = rng.gen_range(DURATION_RANGE);

        ProcessingResult {
            transcription: SAMPLE_TRANSCRIPTIONS[index].to_string(),
            confidence,
            duration,
            processing_time: started.elapsed().as_secs_f64(),
            file_name: Some(upload.file_name.clone()),
            file_size: Some(upload.data.len() as u64),
            extra: serde_json::Map::new(),
        }
    }
}

impl Default for SimulatedRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform sample from the window; degenerate windows collapse to their start.
fn sample_delay(range: &Range<f64>) -> f64 {
    if range.end <= range.start {
        return range.start;
    }
    rand::thread_rng().gen_range(range.clone())
}
