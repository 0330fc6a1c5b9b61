//! Error taxonomy for the major event log

use crate::pagination::InvalidPage;
use crate::store::StoreError;
use crate::types::EventId;
use crate::validation::ValidationError;

/// Result type for event log operations
pub type EventLogResult<T> = Result<T, EventLogError>;

/// Errors surfaced by event log operations.
///
/// `InvalidIdentifier`, `NotFound` and `InvalidPage` are terminal, user-facing
/// conditions that all look like "not found" from outside.
#[derive(Debug, thiserror::Error)]
pub enum EventLogError {
    #[error("invalid event identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("event not found: {0}")]
    NotFound(EventId),

    #[error(transparent)]
    InvalidPage(#[from] InvalidPage),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl EventLogError {
    /// Whether the caller should see a not-found response
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EventLogError::InvalidIdentifier(_)
                | EventLogError::NotFound(_)
                | EventLogError::InvalidPage(_)
        )
    }
}
