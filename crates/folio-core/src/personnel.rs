//! Personnel: librarian lookup and volunteer sign-up.

use rusqlite::OptionalExtension;

use crate::error::{Error, Result};
use crate::model::personnel::VOLUNTEER_ROLE;
use crate::model::{Personnel, PersonnelId};
use crate::schema::Database;

impl Database {
    /// Insert a staff member with an arbitrary role.
    pub fn insert_personnel(
        &self,
        name: &str,
        role: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<PersonnelId> {
        if name.trim().is_empty() {
            return Err(Error::InvalidData("name must not be empty".into()));
        }
        self.conn().execute(
            "INSERT INTO personnel (name, role, email, phone) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![name, role, email, phone],
        )?;
        Ok(PersonnelId::from_raw(self.conn().last_insert_rowid()))
    }

    /// Sign up a volunteer. The same name and email can volunteer only
    /// once.
    pub fn add_volunteer(&self, name: &str, email: &str, phone: &str) -> Result<PersonnelId> {
        let existing: Option<i64> = self
            .conn()
            .query_row(
                "SELECT id FROM personnel WHERE name = ?1 AND email = ?2 AND role = ?3",
                rusqlite::params![name, email, VOLUNTEER_ROLE],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            return Err(Error::Duplicate { entity: "volunteer" });
        }

        let phone = if phone.trim().is_empty() {
            None
        } else {
            Some(phone)
        };
        let id = self.insert_personnel(name, VOLUNTEER_ROLE, Some(email), phone)?;
        log::info!("Volunteer {id} signed up");
        Ok(id)
    }

    /// Every staff member whose role mentions "Librarian".
    pub fn list_librarians(&self) -> Result<Vec<Personnel>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, name, role, email, phone
             FROM personnel
             WHERE role LIKE '%Librarian%'
             ORDER BY name",
        )?;
        let librarians = stmt
            .query_map([], row_to_personnel)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(librarians)
    }
}

fn row_to_personnel(row: &rusqlite::Row) -> rusqlite::Result<Personnel> {
    Ok(Personnel {
        id: row.get(0)?,
        name: row.get(1)?,
        role: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
    })
}
