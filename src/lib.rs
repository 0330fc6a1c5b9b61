//! Major Event Log
//!
//! A record of significant preservation events for a digital archive,
//! published as HTML pages, a paginated Atom feed, and per-event Atom and
//! PREMIS XML documents.
//!
//! # Modules
//!
//! - `types`: Core data structures (Event, NewEvent, Outcome)
//! - `validation`: Identifier syntax and submitted field rules
//! - `store`: SQLite-backed event repository and schema migrations
//! - `pagination`: Page arithmetic shared by the feed and the index
//! - `feed`: Paginated Atom feed
//! - `export`: Single-event Atom and PREMIS documents
//! - `api`: Axum router and request handlers
//! - `config`: Server and feed configuration
//! - `utils`: Timestamp formatting and markup escaping
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use major_event_log::{create_router, AppConfig, AppState, SqliteEventRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::default();
//!     let repo = SqliteEventRepository::open(&config.database)?;
//!     let listener = tokio::net::TcpListener::bind(config.bind).await?;
//!     let app = create_router(Arc::new(AppState::new(Arc::new(repo), config)));
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod feed;
pub mod pagination;
pub mod store;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use config::{AppConfig, FeedConfig};
pub use error::{EventLogError, EventLogResult};
pub use store::{lookup_event, EventRepository, SqliteEventRepository, StoreError};
pub use types::{DateOrder, Event, EventId, NewEvent, Outcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
