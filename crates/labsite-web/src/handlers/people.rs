//! Group member endpoints.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use labsite_common::error::ApiError;
use labsite_common::filter::filter_people;
use labsite_common::{Person, RoleFilter};

use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct PeopleParams {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PeopleList<'a> {
    pub role: RoleFilter,
    pub total: usize,
    pub items: Vec<&'a Person>,
}

/// GET /api/people - Members filtered by role
pub async fn api_people(
    State(state): State<SharedState>,
    Query(params): Query<PeopleParams>,
) -> Result<Response, ApiError> {
    let role: RoleFilter = params.role.as_deref().unwrap_or_default().parse()?;
    let items = filter_people(&state.catalog.people, role);

    Ok(Json(PeopleList { role, total: items.len(), items }).into_response())
}
