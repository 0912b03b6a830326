//! Event search and registration.

use chrono::Utc;
use rusqlite::OptionalExtension;

use crate::error::{Error, Result};
use crate::model::{BorrowerId, Event, EventId, RegistrationId};
use crate::schema::db::date_from_column;
use crate::schema::Database;

impl Database {
    /// Insert an event and return its id.
    pub fn insert_event(
        &self,
        name: &str,
        event_type: Option<&str>,
        event_date: Option<chrono::NaiveDate>,
        location: Option<&str>,
        description: Option<&str>,
    ) -> Result<EventId> {
        if name.trim().is_empty() {
            return Err(Error::InvalidData("event name must not be empty".into()));
        }
        self.conn().execute(
            "INSERT INTO events (name, event_type, event_date, location, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                name,
                event_type,
                event_date.map(|d| d.to_string()),
                location,
                description,
            ],
        )?;
        Ok(EventId::from_raw(self.conn().last_insert_rowid()))
    }

    /// Search events by partial name match.
    pub fn search_events(&self, name: &str) -> Result<Vec<Event>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, name, event_type, event_date, location, description
             FROM events
             WHERE name LIKE ?1
             ORDER BY event_date, name",
        )?;
        let events = stmt
            .query_map([format!("%{name}%")], row_to_event)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(events)
    }

    /// Look up a single event.
    pub fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, name, event_type, event_date, location, description
             FROM events
             WHERE id = ?1",
        )?;
        let event = stmt.query_row([id], row_to_event).optional()?;
        Ok(event)
    }

    /// Sign a borrower up for an event.
    ///
    /// The borrower and event must exist, and a borrower can register
    /// for a given event only once.
    pub fn register_for_event(
        &self,
        event_id: EventId,
        borrower_id: BorrowerId,
    ) -> Result<RegistrationId> {
        if self.get_borrower(borrower_id)?.is_none() {
            return Err(Error::NotFound {
                entity: "borrower",
                id: borrower_id.to_string(),
            });
        }
        if self.get_event(event_id)?.is_none() {
            return Err(Error::NotFound {
                entity: "event",
                id: event_id.to_string(),
            });
        }

        let already: Option<i64> = self
            .conn()
            .query_row(
                "SELECT id FROM event_registrations WHERE event_id = ?1 AND borrower_id = ?2",
                rusqlite::params![event_id, borrower_id],
                |row| row.get(0),
            )
            .optional()?;
        if already.is_some() {
            return Err(Error::Duplicate {
                entity: "event registration",
            });
        }

        // The UNIQUE(event_id, borrower_id) constraint backstops the
        // check above; a violation maps to Error::Constraint.
        self.conn().execute(
            "INSERT INTO event_registrations (event_id, borrower_id, registration_date)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![event_id, borrower_id, Utc::now().date_naive().to_string()],
        )?;
        let id = RegistrationId::from_raw(self.conn().last_insert_rowid());
        log::info!("Borrower {borrower_id} registered for event {event_id} (registration {id})");
        Ok(id)
    }
}

fn row_to_event(row: &rusqlite::Row) -> rusqlite::Result<Event> {
    let event_date: Option<String> = row.get(3)?;
    Ok(Event {
        id: row.get(0)?,
        name: row.get(1)?,
        event_type: row.get(2)?,
        event_date: event_date
            .map(|d| date_from_column(3, &d))
            .transpose()?,
        location: row.get(4)?,
        description: row.get(5)?,
    })
}
