//! Volunteer sign-up and the librarian directory.

use std::io::{BufRead, Write};

use anyhow::Result;
use folio_core::model::Personnel;
use folio_core::Error;

use crate::menu::{Flow, Menu};
use crate::pager::{PageAction, Pager};
use crate::table::Column;

const PERSONNEL_COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::new("Name"),
    Column::new("Role"),
    Column::new("Email"),
    Column::new("Phone"),
];

fn personnel_rows(people: &[Personnel]) -> Vec<Vec<String>> {
    people
        .iter()
        .map(|person| {
            vec![
                person.id.to_string(),
                person.name.clone(),
                person.role.clone(),
                person.email.clone().unwrap_or_default(),
                person.phone.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    /// Volunteer sign-up flow.
    pub fn volunteer(&mut self) -> Result<()> {
        writeln!(self.ui.out(), "\n--- Volunteer for the Library ---")?;
        let name = self.ui.prompt("Enter your Name: ")?;
        let email = self.ui.prompt("Enter your Email: ")?;
        let phone = self.ui.prompt("Enter your Phone Number: ")?;

        match self.db.add_volunteer(&name, &email, &phone) {
            Ok(id) => {
                writeln!(self.ui.out(), "Successfully registered as a volunteer!")?;
                writeln!(self.ui.out(), "Your Volunteer ID is: {id}")?;
            }
            Err(Error::Duplicate { .. }) => {
                writeln!(self.ui.out(), "You are already a registered volunteer.")?;
            }
            Err(Error::Constraint(_) | Error::InvalidData(_)) => {
                writeln!(
                    self.ui.out(),
                    "Error registering as a volunteer (duplicate or constraint issue)."
                )?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// The librarian directory, with per-librarian contact cards.
    pub fn ask_help(&mut self) -> Result<Flow> {
        writeln!(self.ui.out(), "\n--- Ask a Librarian for Help ---")?;

        let librarians = self.db.list_librarians()?;
        if librarians.is_empty() {
            writeln!(self.ui.out(), "No librarians found.")?;
            return Ok(Flow::Stay);
        }

        let mut pager = Pager::new(
            "Available Librarians",
            PERSONNEL_COLUMNS,
            personnel_rows(&librarians),
            self.opts.items_per_page,
        );
        loop {
            match pager.run(self.ui)? {
                PageAction::MainMenu => return Ok(Flow::MainMenu),
                PageAction::Selected(index) => {
                    let librarian = &librarians[index];
                    writeln!(self.ui.out(), "\n--- Librarian Contact Info ---")?;
                    writeln!(self.ui.out(), "Name:         {}", librarian.name)?;
                    writeln!(
                        self.ui.out(),
                        "Email:        {}",
                        librarian.email.as_deref().unwrap_or("-")
                    )?;
                    writeln!(
                        self.ui.out(),
                        "Phone Number: {}\n",
                        librarian.phone.as_deref().unwrap_or("-")
                    )?;
                    self.ui
                        .pause("Press Enter to return to the librarian list...")?;
                }
            }
        }
    }
}
