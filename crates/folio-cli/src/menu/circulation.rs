//! Borrow and return screens.

use std::io::{BufRead, Write};

use anyhow::Result;
use folio_core::model::{BorrowerId, ItemId, OpenLoan};
use folio_core::Error;

use crate::menu::Menu;
use crate::pager::{PageAction, Pager};
use crate::table::Column;

const LOAN_COLUMNS: &[Column] = &[
    Column::new("Transaction ID"),
    Column::new("Item ID"),
    Column::new("Title"),
    Column::new("Author"),
    Column::new("Borrow Date"),
    Column::new("Due Date"),
];

fn loan_rows(loans: &[OpenLoan]) -> Vec<Vec<String>> {
    loans
        .iter()
        .map(|loan| {
            vec![
                loan.loan_id.to_string(),
                loan.item_id.to_string(),
                loan.title.clone(),
                loan.author_creator.clone().unwrap_or_default(),
                loan.borrow_date.to_string(),
                loan.due_date.to_string(),
            ]
        })
        .collect()
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    /// The main-menu borrow option: ask for everything.
    pub fn borrow_item(&mut self) -> Result<()> {
        self.borrow_flow(None)
    }

    /// Borrow flow, optionally with the item already chosen (from the
    /// item detail view).
    pub(crate) fn borrow_flow(&mut self, preselected: Option<ItemId>) -> Result<()> {
        let Some(borrower_id) = self.read_borrower("\nEnter your Borrower ID: ")? else {
            return Ok(());
        };

        let item_id = match preselected {
            Some(id) => id,
            None => match self.read_id("Enter the Item ID you want to borrow: ")? {
                Some(raw) => ItemId::from_raw(raw),
                None => {
                    writeln!(self.ui.out(), "No available copies.")?;
                    return Ok(());
                }
            },
        };

        match self
            .db
            .borrow_first_available(borrower_id, item_id, self.opts.loan_period_days)
        {
            Ok(loan_id) => {
                writeln!(
                    self.ui.out(),
                    "\nItem borrowed successfully! Due in {} days.",
                    self.opts.loan_period_days
                )?;
                writeln!(self.ui.out(), "Your Transaction ID is: {loan_id}")?;
            }
            Err(Error::NotFound {
                entity: "available copy",
                ..
            }) => writeln!(self.ui.out(), "No available copies.")?,
            Err(Error::Constraint(_)) => {
                writeln!(self.ui.out(), "Could not record the loan (constraint issue).")?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// The return flow: page through open loans, return the selected
    /// one.
    pub fn return_item(&mut self) -> Result<()> {
        let Some(borrower_id) = self.read_borrower("Enter your Borrower ID: ")? else {
            return Ok(());
        };

        let loans = self.db.open_loans(borrower_id)?;
        if loans.is_empty() {
            writeln!(self.ui.out(), "You have no books currently borrowed.")?;
            return Ok(());
        }

        let mut pager = Pager::new(
            "Your Borrowed Items",
            LOAN_COLUMNS,
            loan_rows(&loans),
            self.opts.items_per_page,
        );
        match pager.run(self.ui)? {
            PageAction::MainMenu => Ok(()),
            PageAction::Selected(index) => {
                self.db
                    .return_loan(loans[index].loan_id, self.opts.daily_fine_rate)?;
                writeln!(self.ui.out(), "\nItem returned successfully!")?;
                Ok(())
            }
        }
    }

    /// Prompt for a Borrower ID and look up the account; `None` (with
    /// a message) when it matches nothing.
    pub(crate) fn read_borrower(&mut self, message: &str) -> Result<Option<BorrowerId>> {
        let found = match self.read_id(message)? {
            Some(raw) => self.db.get_borrower(BorrowerId::from_raw(raw))?,
            None => None,
        };
        match found {
            Some(borrower) => Ok(Some(borrower.id)),
            None => {
                writeln!(self.ui.out(), "Invalid Borrower ID.")?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_core::model::CopyStatus;
    use folio_core::schema::Database;

    use crate::config::Config;
    use crate::console::Console;
    use crate::menu::{Menu, MenuOptions};

    fn run_session(script: &str, db: &Database) -> String {
        let mut out = Vec::new();
        {
            let mut ui = Console::new(script.as_bytes(), &mut out);
            let opts = MenuOptions::from(&Config::default());
            Menu::new(db, &mut ui, opts).run().unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    fn setup() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.register_borrower("Ada Lovelace", "ada@example.org", "", "")
            .unwrap();
        db.donate("Dune", Some("Book"), Some("Frank Herbert"), Some(1965))
            .unwrap();
        db
    }

    #[test]
    fn test_borrow_happy_path() {
        let db = setup();
        let shown = run_session("2\n1\n1\n10\n", &db);
        assert!(shown.contains("Item borrowed successfully! Due in 14 days."));
        assert!(shown.contains("Your Transaction ID is: 1"));
    }

    #[test]
    fn test_borrow_with_unknown_borrower() {
        let db = setup();
        let shown = run_session("2\n999\n10\n", &db);
        assert!(shown.contains("Invalid Borrower ID."));
    }

    #[test]
    fn test_borrow_with_no_copies() {
        let db = setup();
        // The only copy goes out first
        run_session("2\n1\n1\n10\n", &db);
        let shown = run_session("2\n1\n1\n10\n", &db);
        assert!(shown.contains("No available copies."));
    }

    #[test]
    fn test_return_happy_path() {
        let db = setup();
        run_session("2\n1\n1\n10\n", &db);

        let shown = run_session("3\n1\n1\n10\n", &db);
        assert!(shown.contains("Your Borrowed Items"));
        assert!(shown.contains("Item returned successfully!"));

        let copy = db
            .get_copy(folio_core::model::CopyId::from_raw(1))
            .unwrap()
            .unwrap();
        assert_eq!(copy.status, CopyStatus::OnShelf);
    }

    #[test]
    fn test_return_with_nothing_borrowed() {
        let db = setup();
        let shown = run_session("3\n1\n10\n", &db);
        assert!(shown.contains("You have no books currently borrowed."));
    }
}
