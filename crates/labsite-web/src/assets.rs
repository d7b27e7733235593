//! Stylesheet and filter script, embedded so the binary is self-contained.

use axum::{http::header, response::IntoResponse};

pub const SITE_CSS: &str = include_str!("../static/css/site.css");
pub const FILTER_JS: &str = include_str!("../static/js/filter.js");

/// `(site-relative path, contents)` for every embedded asset.
pub const ASSETS: [(&str, &str); 2] = [
    ("static/css/site.css", SITE_CSS),
    ("static/js/filter.js", FILTER_JS),
];

pub async fn site_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

pub async fn filter_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], FILTER_JS)
}
