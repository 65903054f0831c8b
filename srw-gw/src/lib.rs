//! srw-gw library - Recognition Gateway
//!
//! Serves the browser upload client and the speech recognition endpoint.
//! A deployment runs one recognition variant: simulated (fabricated
//! results after an artificial delay) or proxied (uploads forwarded to an
//! external prediction service).

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::recognizer::Recognizer;

pub mod api;
pub mod recognizer;

/// Request body ceiling for the router.
///
/// Slightly above the 10 MiB file cap so oversized files reach the
/// handler's own validation and get the contract's 400 rather than a
/// framework 413. Bodies beyond this still get 413.
const BODY_LIMIT_BYTES: usize = 12 * 1024 * 1024;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Active recognition backend for this deployment
    pub recognizer: Arc<Recognizer>,
}

impl AppState {
    /// Create new application state
    pub fn new(recognizer: Recognizer) -> Self {
        Self {
            recognizer: Arc::new(recognizer),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        // UI routes
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        // API routes
        .route("/api/speech-recognition", post(api::recognize_speech))
        .merge(api::health_routes())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
