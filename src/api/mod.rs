//! HTTP surface: HTML pages, the Atom feed and per-event XML exports

mod error;
mod html;
mod http;
mod pages;
mod state;
mod xml;

pub use error::ApiError;
pub use http::create_router;
pub use state::AppState;
