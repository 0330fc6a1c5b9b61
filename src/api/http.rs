//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{http::StatusCode, response::Html, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::html;
use super::pages;
use super::state::AppState;
use super::xml;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // Feeds and exports are public documents
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // HTML
        .route("/", get(pages::index))
        .route("/about/", get(pages::about))
        .route("/event/:id/", get(pages::event_details))
        // XML
        .route("/event/:id", get(xml::event_resource))
        .route("/feed/", get(xml::feed))
        // Health check
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(html::not_found_page()))
}
