//! XML endpoints: the paginated feed and the per-event exports

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
};

use super::error::ApiError;
use super::state::AppState;
use crate::export::{render_atom_item, render_premis_item, EXPORT_CONTENT_TYPE};
use crate::feed::{build_feed, FEED_CONTENT_TYPE};
use crate::store::lookup_event;
use crate::types::DateOrder;
use crate::validation::is_canonical_uuid;

const PREMIS_SUFFIX: &str = ".premis.xml";
const ATOM_SUFFIX: &str = ".xml";

/// Which representation of an event a path segment asks for
#[derive(Debug, PartialEq, Eq)]
enum EventResource<'a> {
    Premis(&'a str),
    Atom(&'a str),
    /// Bare id without the trailing slash
    Details(&'a str),
}

impl<'a> EventResource<'a> {
    fn parse(segment: &'a str) -> Self {
        if let Some(id) = segment.strip_suffix(PREMIS_SUFFIX) {
            EventResource::Premis(id)
        } else if let Some(id) = segment.strip_suffix(ATOM_SUFFIX) {
            EventResource::Atom(id)
        } else {
            EventResource::Details(segment)
        }
    }
}

/// GET /event/:id - `{id}.xml`, `{id}.premis.xml` or a bare `{id}`
pub async fn event_resource(
    State(state): State<Arc<AppState>>,
    Path(resource): Path<String>,
) -> Result<Response, ApiError> {
    match EventResource::parse(&resource) {
        EventResource::Premis(id) => {
            let event = lookup_event(state.repo.as_ref(), id)?;
            Ok(xml_response(EXPORT_CONTENT_TYPE, render_premis_item(&event)))
        }
        EventResource::Atom(id) => {
            let event = lookup_event(state.repo.as_ref(), id)?;
            let self_url = state.absolute_url(&event.absolute_path());
            Ok(xml_response(
                EXPORT_CONTENT_TYPE,
                render_atom_item(&event, &self_url),
            ))
        }
        EventResource::Details(id) if is_canonical_uuid(id) => {
            Ok(Redirect::permanent(&format!("/event/{id}/")).into_response())
        }
        EventResource::Details(_) => Err(ApiError::NotFound),
    }
}

/// GET /feed/ - One page of the Atom feed
pub async fn feed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let feed_config = &state.config.feed;
    let events = state.repo.list_events(DateOrder::Descending)?;
    let requested = params.get(&feed_config.page_param).map(String::as_str);

    let document = build_feed(&events, requested, feed_config)?;
    Ok(xml_response(FEED_CONTENT_TYPE, document.to_xml()))
}

fn xml_response(content_type: &'static str, body: String) -> Response {
    ([(header::CONTENT_TYPE, content_type)], body).into_response()
}
