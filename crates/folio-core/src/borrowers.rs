//! Borrower account operations.

use chrono::Utc;
use rusqlite::OptionalExtension;

use crate::error::{Error, Result};
use crate::model::{Borrower, BorrowerId};
use crate::schema::db::datetime_from_column;
use crate::schema::Database;

impl Database {
    /// Create a borrower account and return the new Borrower ID.
    ///
    /// Name and email must be non-empty; phone and address are free
    /// text and may be blank.
    pub fn register_borrower(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> Result<BorrowerId> {
        if name.trim().is_empty() {
            return Err(Error::InvalidData("name must not be empty".into()));
        }
        if email.trim().is_empty() {
            return Err(Error::InvalidData("email must not be empty".into()));
        }

        self.conn().execute(
            "INSERT INTO borrowers (name, email, phone, address, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                name,
                email,
                blank_to_null(phone),
                blank_to_null(address),
                Utc::now().to_rfc3339(),
            ],
        )?;
        let id = BorrowerId::from_raw(self.conn().last_insert_rowid());
        log::info!("Registered borrower {id}");
        Ok(id)
    }

    /// Look up a borrower account.
    pub fn get_borrower(&self, id: BorrowerId) -> Result<Option<Borrower>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, name, email, phone, address, created_at
             FROM borrowers
             WHERE id = ?1",
        )?;
        let borrower = stmt
            .query_row([id], |row| {
                let created_at: String = row.get(5)?;
                Ok(Borrower {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    phone: row.get(3)?,
                    address: row.get(4)?,
                    created_at: datetime_from_column(5, &created_at)?,
                })
            })
            .optional()?;
        Ok(borrower)
    }
}

fn blank_to_null(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_fetch_borrower() {
        let db = Database::open_in_memory().unwrap();
        let id = db
            .register_borrower("Ada Lovelace", "ada@example.org", "555-0100", "12 Analytical Way")
            .unwrap();

        let borrower = db.get_borrower(id).unwrap().unwrap();
        assert_eq!(borrower.name, "Ada Lovelace");
        assert_eq!(borrower.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_blank_optional_fields_become_null() {
        let db = Database::open_in_memory().unwrap();
        let id = db
            .register_borrower("Ada Lovelace", "ada@example.org", "  ", "")
            .unwrap();

        let borrower = db.get_borrower(id).unwrap().unwrap();
        assert!(borrower.phone.is_none());
        assert!(borrower.address.is_none());
    }

    #[test]
    fn test_empty_name_or_email_rejected() {
        let db = Database::open_in_memory().unwrap();
        assert!(matches!(
            db.register_borrower("", "ada@example.org", "", ""),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            db.register_borrower("Ada", "   ", "", ""),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_unknown_borrower_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_borrower(BorrowerId::from_raw(99)).unwrap().is_none());
    }
}
