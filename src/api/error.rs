//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, error};

use super::html;
use crate::error::EventLogError;
use crate::pagination::InvalidPage;
use crate::store::StoreError;

/// Error returned by request handlers.
///
/// Malformed identifiers, unknown identifiers and invalid pages all collapse
/// into the same `NotFound` response.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Internal,
}

impl From<EventLogError> for ApiError {
    fn from(err: EventLogError) -> Self {
        if err.is_not_found() {
            debug!(error = %err, "request resolved to not found");
            ApiError::NotFound
        } else {
            error!(error = %err, "request failed");
            ApiError::Internal
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        EventLogError::from(err).into()
    }
}

impl From<InvalidPage> for ApiError {
    fn from(err: InvalidPage) -> Self {
        EventLogError::from(err).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, Html(html::not_found_page())).into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(html::server_error_page()),
            )
                .into_response(),
        }
    }
}
