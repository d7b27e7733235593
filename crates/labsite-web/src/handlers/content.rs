//! Unfiltered collections: courses and research areas, in catalog order.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::SharedState;

/// GET /api/courses
pub async fn api_courses(State(state): State<SharedState>) -> Response {
    Json(&state.catalog.courses).into_response()
}

/// GET /api/research
pub async fn api_research(State(state): State<SharedState>) -> Response {
    Json(&state.catalog.research_areas).into_response()
}
