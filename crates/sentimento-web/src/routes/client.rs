//! Web client route handler.
//!
//! Serves the embedded single-page sentiment analysis form.

use axum::response::{Html, IntoResponse};

const CLIENT_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the analysis form.
pub async fn index() -> impl IntoResponse {
    Html(CLIENT_HTML)
}
