//! Event storage
//!
//! The storage boundary is the [`EventRepository`] trait; the shipped
//! implementation is [`SqliteEventRepository`]. Read paths never write.
//! Write paths validate the submission and own the identifier and entry
//! timestamps, so callers cannot break the record invariants:
//!
//! - `id` is assigned once and never changes
//! - `entry_created` is set once, at creation
//! - `entry_modified` moves forward only when a field actually changes

pub mod migrations;
mod sqlite;

pub use sqlite::SqliteEventRepository;

use crate::error::{EventLogError, EventLogResult};
use crate::types::{DateOrder, Event, EventId, NewEvent};
use crate::validation::parse_event_id;

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion { db_version: u32, latest_supported: u32 },

    #[error("invalid stored event data: {0}")]
    InvalidData(String),
}

/// Persistent collection of events
pub trait EventRepository: Send + Sync {
    /// All events, ordered by date
    fn list_events(&self, order: DateOrder) -> StoreResult<Vec<Event>>;

    /// One event by id, or `None`
    fn get_event(&self, id: EventId) -> StoreResult<Option<Event>>;

    fn count_events(&self) -> StoreResult<usize>;

    /// Validate and insert a new event with a fresh id
    fn create_event(&self, fields: NewEvent) -> EventLogResult<Event>;

    /// Validate and replace the submitted fields of an existing event
    fn update_event(&self, id: EventId, fields: NewEvent) -> EventLogResult<Event>;
}

/// Resolve an externally supplied identifier to a stored event.
///
/// The syntax check runs first, so a malformed id never costs a query.
pub fn lookup_event(repo: &dyn EventRepository, raw_id: &str) -> EventLogResult<Event> {
    let id = parse_event_id(raw_id)?;
    repo.get_event(id)?.ok_or(EventLogError::NotFound(id))
}
