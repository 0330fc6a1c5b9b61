//! Major event record
//!
//! An `Event` is a single row of the log. `NewEvent` is the submitted field
//! set used to create or replace one; the identifier and both entry
//! timestamps are owned by the store and never supplied by callers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::Outcome;

/// Public identifier of an event (random 128-bit UUID)
pub type EventId = Uuid;

/// A recorded major PREMIS event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub detail: String,
    pub outcome: Outcome,
    pub outcome_detail: String,
    /// When the event happened, not when it was entered
    pub date: DateTime<Utc>,
    pub entry_created: DateTime<Utc>,
    pub entry_modified: DateTime<Utc>,
    /// Reported as the PREMIS reporting agent
    pub contact_name: String,
    pub contact_email: String,
}

impl Event {
    /// Path of the HTML detail page for this event
    pub fn absolute_path(&self) -> String {
        format!("/event/{}/", self.id)
    }

    /// Path of the Atom item export
    pub fn atom_path(&self) -> String {
        format!("/event/{}.xml", self.id)
    }

    /// Path of the PREMIS export
    pub fn premis_path(&self) -> String {
        format!("/event/{}.premis.xml", self.id)
    }

    /// Stable item identifier for syndication documents
    pub fn urn(&self) -> String {
        format!("urn:uuid:{}", self.id)
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Whether applying `fields` would change anything stored
    pub fn differs_from(&self, fields: &NewEvent) -> bool {
        self.title != fields.title
            || self.detail != fields.detail
            || self.outcome != fields.outcome
            || self.outcome_detail != fields.outcome_detail
            || self.date != fields.date
            || self.contact_name != fields.contact_name
            || self.contact_email != fields.contact_email
    }
}

/// Submitted fields for creating or replacing an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub detail: String,
    pub outcome: Outcome,
    pub outcome_detail: String,
    pub date: DateTime<Utc>,
    pub contact_name: String,
    pub contact_email: String,
}

impl NewEvent {
    /// Materialize a stored event from these fields
    pub(crate) fn into_event(self, id: EventId, created: DateTime<Utc>, modified: DateTime<Utc>) -> Event {
        Event {
            id,
            title: self.title,
            detail: self.detail,
            outcome: self.outcome,
            outcome_detail: self.outcome_detail,
            date: self.date,
            entry_created: created,
            entry_modified: modified,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
        }
    }
}

impl From<&Event> for NewEvent {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            detail: event.detail.clone(),
            outcome: event.outcome,
            outcome_detail: event.outcome_detail.clone(),
            date: event.date,
            contact_name: event.contact_name.clone(),
            contact_email: event.contact_email.clone(),
        }
    }
}
