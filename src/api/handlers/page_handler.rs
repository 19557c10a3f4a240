use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Chat page served at `/`.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}
