//! HTTP API handlers for srw-gw

pub mod health;
pub mod recognition;
pub mod ui;

pub use health::health_routes;
pub use recognition::recognize_speech;
pub use ui::{serve_app_js, serve_index};
