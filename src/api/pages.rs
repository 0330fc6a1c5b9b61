//! HTML endpoints

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
};

use super::error::ApiError;
use super::html;
use super::state::AppState;
use crate::config::INDEX_PAGE_PARAM;
use crate::pagination::paginate;
use crate::store::lookup_event;
use crate::types::DateOrder;

/// GET / - Events newest first, `index_page_size` to a page
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    let events = state.repo.list_events(DateOrder::Descending)?;
    let requested = params.get(INDEX_PAGE_PARAM).map(String::as_str);

    let page = paginate(&events, state.config.index_page_size, requested)?;

    Ok(Html(html::index_page(&page)))
}

/// GET /event/:id/ - One event in full
pub async fn event_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let event = lookup_event(state.repo.as_ref(), &id)?;
    Ok(Html(html::event_details_page(&event)))
}

/// GET /about/
pub async fn about() -> Html<String> {
    Html(html::about_page())
}
