//! Circulation: borrowing, returning, and overdue fine assessment.

use chrono::{Days, Utc};
use rusqlite::OptionalExtension;

use crate::error::{Error, Result};
use crate::model::{BorrowerId, CopyId, CopyStatus, ItemId, LoanId, OpenLoan, PaidStatus};
use crate::schema::db::date_from_column;
use crate::schema::Database;

impl Database {
    /// Borrow the first on-shelf copy of an item.
    pub fn borrow_first_available(
        &self,
        borrower_id: BorrowerId,
        item_id: ItemId,
        loan_period_days: u64,
    ) -> Result<LoanId> {
        let copy_id = self
            .first_available_copy(item_id)?
            .ok_or(Error::NotFound {
                entity: "available copy",
                id: item_id.to_string(),
            })?;
        self.borrow_copy(borrower_id, copy_id, loan_period_days)
    }

    /// Borrow a specific copy: record the loan and take the copy off
    /// the shelf. The due date is `loan_period_days` from today.
    pub fn borrow_copy(
        &self,
        borrower_id: BorrowerId,
        copy_id: CopyId,
        loan_period_days: u64,
    ) -> Result<LoanId> {
        if self.get_borrower(borrower_id)?.is_none() {
            return Err(Error::NotFound {
                entity: "borrower",
                id: borrower_id.to_string(),
            });
        }

        let borrow_date = Utc::now().date_naive();
        let due_date = borrow_date
            .checked_add_days(Days::new(loan_period_days))
            .ok_or_else(|| Error::InvalidData("loan period overflows the calendar".into()))?;

        self.conn().execute(
            "INSERT INTO loans
                 (borrower_id, copy_id, borrow_date, due_date, return_date, fine_amount, paid_status)
             VALUES (?1, ?2, ?3, ?4, NULL, 0, ?5)",
            rusqlite::params![
                borrower_id,
                copy_id,
                borrow_date.to_string(),
                due_date.to_string(),
                PaidStatus::Unpaid.as_str(),
            ],
        )?;
        let loan_id = LoanId::from_raw(self.conn().last_insert_rowid());

        self.conn().execute(
            "UPDATE copies SET status = ?1 WHERE id = ?2",
            rusqlite::params![CopyStatus::Borrowed.as_str(), copy_id],
        )?;

        log::info!("Copy {copy_id} lent to borrower {borrower_id} as loan {loan_id}, due {due_date}");
        Ok(loan_id)
    }

    /// All of a borrower's unreturned loans, joined with the catalog
    /// items behind them, oldest first.
    pub fn open_loans(&self, borrower_id: BorrowerId) -> Result<Vec<OpenLoan>> {
        let mut stmt = self.conn().prepare(
            "SELECT l.id, i.id, i.title, i.author_creator, l.borrow_date, l.due_date
             FROM loans l
             JOIN copies c ON l.copy_id = c.id
             JOIN items i ON c.item_id = i.id
             WHERE l.borrower_id = ?1 AND l.return_date IS NULL
             ORDER BY l.borrow_date, l.id",
        )?;
        let loans = stmt
            .query_map([borrower_id], |row| {
                let borrow_date: String = row.get(4)?;
                let due_date: String = row.get(5)?;
                Ok(OpenLoan {
                    loan_id: row.get(0)?,
                    item_id: row.get(1)?,
                    title: row.get(2)?,
                    author_creator: row.get(3)?,
                    borrow_date: date_from_column(4, &borrow_date)?,
                    due_date: date_from_column(5, &due_date)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(loans)
    }

    /// Return a borrowed copy: settle the fine at today's value, stamp
    /// the return date, and put the copy back on the shelf.
    pub fn return_loan(&self, loan_id: LoanId, daily_fine_rate: f64) -> Result<()> {
        let copy_id: CopyId = self
            .conn()
            .query_row(
                "SELECT copy_id FROM loans WHERE id = ?1 AND return_date IS NULL",
                [loan_id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or(Error::NotFound {
                entity: "open loan",
                id: loan_id.to_string(),
            })?;

        // Freeze the fine while the loan is still open; the assessment
        // query only touches unreturned loans.
        self.assess_fines(daily_fine_rate)?;

        self.conn().execute(
            "UPDATE loans SET return_date = ?1 WHERE id = ?2",
            rusqlite::params![Utc::now().date_naive().to_string(), loan_id],
        )?;
        self.conn().execute(
            "UPDATE copies SET status = ?1 WHERE id = ?2",
            rusqlite::params![CopyStatus::OnShelf.as_str(), copy_id],
        )?;

        log::info!("Loan {loan_id} returned, copy {copy_id} reshelved");
        Ok(())
    }

    /// Recompute overdue fines for every unreturned, unpaid loan:
    /// days past the due date times the daily rate.
    ///
    /// Returns the number of loans updated.
    pub fn assess_fines(&self, daily_fine_rate: f64) -> Result<usize> {
        let updated = self.conn().execute(
            "UPDATE loans
             SET fine_amount = ROUND((julianday('now') - julianday(due_date)) * ?1, 2)
             WHERE return_date IS NULL
               AND due_date < date('now')
               AND paid_status = ?2",
            rusqlite::params![daily_fine_rate, PaidStatus::Unpaid.as_str()],
        )?;
        if updated > 0 {
            log::info!("Assessed overdue fines on {updated} loan(s)");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Database, BorrowerId, ItemId) {
        let db = Database::open_in_memory().unwrap();
        let borrower = db
            .register_borrower("Ada Lovelace", "ada@example.org", "", "")
            .unwrap();
        let item = db
            .insert_item("Dune", Some("Book"), Some("Frank Herbert"), Some(1965))
            .unwrap();
        (db, borrower, item)
    }

    #[test]
    fn test_borrow_marks_copy_and_sets_due_date() {
        let (db, borrower, item) = setup();
        let copy = db.add_copy(item).unwrap();

        let loan = db.borrow_first_available(borrower, item, 14).unwrap();

        assert_eq!(
            db.get_copy(copy).unwrap().unwrap().status,
            CopyStatus::Borrowed
        );
        assert_eq!(db.available_copy_count(item).unwrap(), 0);

        let open = db.open_loans(borrower).unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].loan_id, loan);
        assert_eq!(open[0].title, "Dune");
        assert_eq!((open[0].due_date - open[0].borrow_date).num_days(), 14);
    }

    #[test]
    fn test_borrow_without_copies_fails() {
        let (db, borrower, item) = setup();
        let err = db.borrow_first_available(borrower, item, 14).unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                entity: "available copy",
                ..
            }
        ));
    }

    #[test]
    fn test_borrow_requires_known_borrower() {
        let (db, _, item) = setup();
        let copy = db.add_copy(item).unwrap();
        let err = db
            .borrow_copy(BorrowerId::from_raw(999), copy, 14)
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { entity: "borrower", .. }));
        // The copy stays on the shelf
        assert_eq!(db.available_copy_count(item).unwrap(), 1);
    }

    #[test]
    fn test_return_reshelves_copy() {
        let (db, borrower, item) = setup();
        let copy = db.add_copy(item).unwrap();
        let loan = db.borrow_first_available(borrower, item, 14).unwrap();

        db.return_loan(loan, 0.50).unwrap();

        assert_eq!(
            db.get_copy(copy).unwrap().unwrap().status,
            CopyStatus::OnShelf
        );
        assert!(db.open_loans(borrower).unwrap().is_empty());

        let return_date: Option<String> = db
            .conn()
            .query_row("SELECT return_date FROM loans WHERE id = ?1", [loan], |row| {
                row.get(0)
            })
            .unwrap();
        assert!(return_date.is_some());
    }

    #[test]
    fn test_returning_twice_fails() {
        let (db, borrower, item) = setup();
        db.add_copy(item).unwrap();
        let loan = db.borrow_first_available(borrower, item, 14).unwrap();

        db.return_loan(loan, 0.50).unwrap();
        assert!(matches!(
            db.return_loan(loan, 0.50),
            Err(Error::NotFound { entity: "open loan", .. })
        ));
    }

    #[test]
    fn test_fines_accrue_per_day_overdue() {
        let (db, borrower, item) = setup();
        db.add_copy(item).unwrap();
        let loan = db.borrow_first_available(borrower, item, 14).unwrap();

        // Backdate the due date ten days
        db.conn()
            .execute(
                "UPDATE loans SET due_date = date('now', '-10 days') WHERE id = ?1",
                [loan],
            )
            .unwrap();

        assert_eq!(db.assess_fines(0.50).unwrap(), 1);

        let fine: f64 = db
            .conn()
            .query_row("SELECT fine_amount FROM loans WHERE id = ?1", [loan], |row| {
                row.get(0)
            })
            .unwrap();
        // Ten full days overdue plus the fraction of today
        assert!(fine >= 5.0 && fine < 5.6, "fine was {fine}");
    }

    #[test]
    fn test_fines_skip_current_and_paid_loans() {
        let (db, borrower, item) = setup();
        db.add_copy(item).unwrap();
        db.add_copy(item).unwrap();

        // One loan still current, one overdue but already settled
        db.borrow_first_available(borrower, item, 14).unwrap();
        let paid = db.borrow_first_available(borrower, item, 14).unwrap();
        db.conn()
            .execute(
                "UPDATE loans SET due_date = date('now', '-5 days'), paid_status = 'Paid'
                 WHERE id = ?1",
                [paid],
            )
            .unwrap();

        assert_eq!(db.assess_fines(0.50).unwrap(), 0);
    }
}
