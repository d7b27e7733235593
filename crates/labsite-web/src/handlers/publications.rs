//! Publication search endpoints.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use labsite_common::error::ApiError;
use labsite_common::{Publication, PublicationQuery, YearFilter};

use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct PublicationParams {
    pub q: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PublicationList<'a> {
    pub query: &'a str,
    pub year: YearFilter,
    pub total: usize,
    pub items: Vec<&'a Publication>,
}

/// GET /api/publications - Substring search over title, authors and venue
pub async fn api_publications(
    State(state): State<SharedState>,
    Query(params): Query<PublicationParams>,
) -> Result<Response, ApiError> {
    let year: YearFilter = params.year.as_deref().unwrap_or_default().parse()?;
    let query = PublicationQuery::new(params.q.unwrap_or_default(), year);
    let items = query.apply(&state.catalog.publications);

    Ok(Json(PublicationList {
        query: &query.text,
        year,
        total: items.len(),
        items,
    })
    .into_response())
}

/// GET /api/publications/years - Year filter options, newest first
pub async fn api_year_options(State(state): State<SharedState>) -> Json<Vec<YearFilter>> {
    Json(state.year_options.clone())
}
