//! SQLite-backed event repository

use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{DateTime, SubsecRound, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, Row};
use tracing::{debug, error, info};
use uuid::Uuid;

use super::migrations::apply_migrations;
use super::{EventRepository, StoreError, StoreResult};
use crate::error::{EventLogError, EventLogResult};
use crate::types::{DateOrder, Event, EventId, NewEvent, Outcome};
use crate::utils::{format_storage_timestamp, parse_storage_timestamp};
use crate::validation::validate_new_event;

const EVENT_SELECT_SQL: &str = "SELECT
    id,
    title,
    detail,
    outcome,
    outcome_detail,
    date,
    entry_created,
    entry_modified,
    contact_name,
    contact_email
FROM events";

/// Event repository over a single SQLite connection.
///
/// The connection is locked for one statement (or one short transaction) at
/// a time and never across an `.await`.
pub struct SqliteEventRepository {
    conn: Mutex<Connection>,
}

impl SqliteEventRepository {
    /// Open (or create) a database file and apply pending migrations
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!(path = %path.display(), "opening event database");

        let conn = Connection::open(path).map_err(|err| {
            error!(path = %path.display(), error = %err, "failed to open event database");
            StoreError::from(err)
        })?;
        let repo = Self::bootstrap(conn)?;

        info!(
            path = %path.display(),
            duration_ms = started_at.elapsed().as_millis() as u64,
            "event database ready"
        );
        Ok(repo)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self::bootstrap(conn)?;
        debug!("in-memory event database ready");
        Ok(repo)
    }

    fn bootstrap(mut conn: Connection) -> StoreResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_migrations(&mut conn).inspect_err(|err| {
            error!(error = %err, "schema migration failed");
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl EventRepository for SqliteEventRepository {
    fn list_events(&self, order: DateOrder) -> StoreResult<Vec<Event>> {
        let direction = match order {
            DateOrder::Ascending => "ASC",
            DateOrder::Descending => "DESC",
        };
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!(
            "{EVENT_SELECT_SQL} ORDER BY date {direction}, rowid {direction};"
        ))?;

        let mut rows = stmt.query([])?;
        let mut events = Vec::new();
        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }
        Ok(events)
    }

    fn get_event(&self, id: EventId) -> StoreResult<Option<Event>> {
        let conn = self.conn.lock();
        select_event(&conn, id)
    }

    fn count_events(&self) -> StoreResult<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM events;", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|_| StoreError::InvalidData(format!("row count {count}")))
    }

    fn create_event(&self, fields: NewEvent) -> EventLogResult<Event> {
        validate_new_event(&fields)?;
        let fields = normalize(fields);
        let now = storage_now();
        let event = fields.into_event(Uuid::new_v4(), now, now);

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO events (
                id,
                title,
                detail,
                outcome,
                outcome_detail,
                date,
                entry_created,
                entry_modified,
                contact_name,
                contact_email
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                event.id.to_string(),
                event.title,
                event.detail,
                event.outcome.uri(),
                event.outcome_detail,
                format_storage_timestamp(&event.date),
                format_storage_timestamp(&event.entry_created),
                format_storage_timestamp(&event.entry_modified),
                event.contact_name,
                event.contact_email,
            ],
        )
        .map_err(StoreError::from)?;

        info!(event_id = %event.id, title = %event.title, outcome = %event.outcome, "event recorded");
        Ok(event)
    }

    fn update_event(&self, id: EventId, fields: NewEvent) -> EventLogResult<Event> {
        validate_new_event(&fields)?;
        let fields = normalize(fields);

        let conn = self.conn.lock();
        let tx = conn.unchecked_transaction().map_err(StoreError::from)?;

        let existing = select_event(&tx, id)?.ok_or(EventLogError::NotFound(id))?;
        if !existing.differs_from(&fields) {
            debug!(event_id = %id, "update carries no changes");
            return Ok(existing);
        }

        // Strictly later than the previous modification, even on a coarse clock
        let modified = storage_now().max(existing.entry_modified + chrono::Duration::microseconds(1));
        let event = fields.into_event(id, existing.entry_created, modified);

        tx.execute(
            "UPDATE events
             SET
                title = ?1,
                detail = ?2,
                outcome = ?3,
                outcome_detail = ?4,
                date = ?5,
                entry_modified = ?6,
                contact_name = ?7,
                contact_email = ?8
             WHERE id = ?9;",
            params![
                event.title,
                event.detail,
                event.outcome.uri(),
                event.outcome_detail,
                format_storage_timestamp(&event.date),
                format_storage_timestamp(&event.entry_modified),
                event.contact_name,
                event.contact_email,
                id.to_string(),
            ],
        )
        .map_err(StoreError::from)?;
        tx.commit().map_err(StoreError::from)?;

        info!(event_id = %id, "event updated");
        Ok(event)
    }
}

fn select_event(conn: &Connection, id: EventId) -> StoreResult<Option<Event>> {
    let mut stmt = conn.prepare(&format!("{EVENT_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query(params![id.to_string()])?;
    match rows.next()? {
        Some(row) => parse_event_row(row).map(Some),
        None => Ok(None),
    }
}

/// Stored timestamps carry microseconds; drop anything finer up front so the
/// returned record equals what a later read yields.
fn normalize(mut fields: NewEvent) -> NewEvent {
    fields.date = fields.date.trunc_subsecs(6);
    fields
}

fn storage_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn parse_event_row(row: &Row<'_>) -> StoreResult<Event> {
    let id: String = row.get(0)?;
    let outcome: String = row.get(3)?;

    Ok(Event {
        id: Uuid::parse_str(&id).map_err(|err| StoreError::InvalidData(format!("id {id:?}: {err}")))?,
        title: row.get(1)?,
        detail: row.get(2)?,
        outcome: Outcome::from_uri(&outcome).map_err(|err| StoreError::InvalidData(err.to_string()))?,
        outcome_detail: row.get(4)?,
        date: parse_timestamp_column(row, 5, "date")?,
        entry_created: parse_timestamp_column(row, 6, "entry_created")?,
        entry_modified: parse_timestamp_column(row, 7, "entry_modified")?,
        contact_name: row.get(8)?,
        contact_email: row.get(9)?,
    })
}

fn parse_timestamp_column(row: &Row<'_>, idx: usize, column: &str) -> StoreResult<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    parse_storage_timestamp(&raw)
        .map_err(|err| StoreError::InvalidData(format!("{column} {raw:?}: {err}")))
}
