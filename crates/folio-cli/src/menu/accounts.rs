//! Borrower account registration.

use std::io::{BufRead, Write};

use anyhow::Result;
use folio_core::Error;

use crate::menu::Menu;

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    /// Create a borrower account. Name and email are re-prompted until
    /// non-empty; phone and address may be blank.
    pub fn register_account(&mut self) -> Result<()> {
        writeln!(self.ui.out(), "\n--- Register a New Library Account ---")?;

        let name = self
            .ui
            .prompt_nonempty("Enter your Name: ", "Name cannot be empty. Please try again.")?;
        let email = self.ui.prompt_nonempty(
            "Enter your Email: ",
            "Email cannot be empty. Please try again.",
        )?;
        let phone = self.ui.prompt("Enter your Phone Number: ")?;
        let address = self.ui.prompt("Enter your Address: ")?;

        match self.db.register_borrower(&name, &email, &phone, &address) {
            Ok(id) => {
                writeln!(
                    self.ui.out(),
                    "\nAccount created successfully! Your Borrower ID is: {id}"
                )?;
            }
            Err(Error::Constraint(e)) => {
                writeln!(self.ui.out(), "Error registering account: {e}")?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}
