//! Data types for the major event log
//!
//! The log has a single persistent record, [`Event`], plus the outcome
//! vocabulary it refers to.

mod event;
mod outcome;

pub use event::{Event, EventId, NewEvent};
pub use outcome::{Outcome, UnknownOutcome, FAILURE_URI, SUCCESS_URI};

/// Collection ordering by event date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    /// Oldest first (the default collection ordering)
    #[default]
    Ascending,
    /// Newest first, as shown by the index and the feed
    Descending,
}

