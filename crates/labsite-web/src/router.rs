//! Axum router. Maps every URL path to its handler.

use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::assets::{filter_js, site_css};
use crate::handlers::{
    content::{api_courses, api_research},
    home::home_page,
    people::api_people,
    publications::{api_publications, api_year_options},
    system::{healthz, not_found},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    let mut router: Router<SharedState> = Router::new()
        // Page
        .route("/",                        get(home_page))

        // API endpoints
        .route("/api/publications",        get(api_publications))
        .route("/api/publications/years",  get(api_year_options))
        .route("/api/people",              get(api_people))
        .route("/api/courses",             get(api_courses))
        .route("/api/research",            get(api_research))
        .route("/healthz",                 get(healthz))

        // Embedded assets
        .route("/static/css/site.css",     get(site_css))
        .route("/static/js/filter.js",     get(filter_js));

    // Images and other files referenced by the catalog
    router = match &shared.public_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir).not_found_service(not_found.into_service())),
        None => router.fallback(not_found),
    };

    router
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
