//! UI serving routes
//!
//! Serves the embedded HTML/JS upload client

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const APP_JS: &str = include_str!("../ui/app.js");

/// GET /
///
/// Serves the upload client page with build identification substituted
/// into the header.
pub async fn serve_index() -> Html<String> {
    let html = INDEX_HTML
        .replace("__VERSION__", env!("CARGO_PKG_VERSION"))
        .replace("__GIT_HASH__", env!("GIT_HASH"));
    Html(html)
}

/// GET /static/app.js
///
/// Serves the JavaScript application
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}
