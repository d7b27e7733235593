//! Homepage handler. Renders every section with the requested filters applied.

use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Datelike;
use serde::Deserialize;

use labsite_common::error::{ApiError, LabsiteError};
use labsite_common::PublicationQuery;

use crate::state::SharedState;
use crate::view::{Links, PageFilters, PageView};

/// Filter state carried in the query string; absent means "All" / empty.
#[derive(Debug, Deserialize, Default)]
pub struct PageParams {
    pub q: Option<String>,
    pub year: Option<String>,
    pub role: Option<String>,
}

impl PageParams {
    pub fn filters(&self) -> Result<PageFilters, LabsiteError> {
        Ok(PageFilters {
            publications: PublicationQuery::new(
                self.q.clone().unwrap_or_default(),
                self.year.as_deref().unwrap_or_default().parse()?,
            ),
            role: self.role.as_deref().unwrap_or_default().parse()?,
        })
    }
}

/// GET / - The full homepage
pub async fn home_page(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, ApiError> {
    let filters = params.filters()?;
    let view = PageView::build(
        &state.catalog,
        &state.year_options,
        &state.profile,
        &filters,
        &Links::server(),
        chrono::Local::now().year(),
    );
    tracing::debug!(
        "Rendering homepage: q={:?} year={} role={} -> {} publications, {} people",
        filters.publications.text,
        filters.publications.year,
        filters.role,
        view.publications.total,
        view.group.people.len(),
    );
    let html = state.renderer.render_page(&view)?;
    Ok(Html(html))
}
