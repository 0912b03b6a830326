//! Event screens: search, details, registration.

use std::io::{BufRead, Write};

use anyhow::Result;
use folio_core::model::{BorrowerId, Event, EventId};
use folio_core::Error;

use crate::menu::{Flow, Menu};
use crate::pager::{PageAction, Pager};
use crate::table::Column;

const EVENT_COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::new("Name"),
    Column::new("Type"),
    Column::new("Date"),
    Column::new("Location"),
];

fn event_rows(events: &[Event]) -> Vec<Vec<String>> {
    events
        .iter()
        .map(|event| {
            vec![
                event.id.to_string(),
                event.name.clone(),
                event.event_type.clone().unwrap_or_default(),
                event.event_date.map(|d| d.to_string()).unwrap_or_default(),
                event.location.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    /// Search events by name and page through the results.
    pub fn find_event(&mut self) -> Result<Flow> {
        let name = self
            .ui
            .prompt("Enter the name of the event you're looking for: ")?;

        let events = self.db.search_events(&name)?;
        if events.is_empty() {
            writeln!(self.ui.out(), "\nNo events found with that name.")?;
            return Ok(Flow::Stay);
        }

        let mut pager = Pager::new(
            "Search Results",
            EVENT_COLUMNS,
            event_rows(&events),
            self.opts.items_per_page,
        );
        loop {
            match pager.run(self.ui)? {
                PageAction::MainMenu => return Ok(Flow::MainMenu),
                PageAction::Selected(index) => {
                    if self.event_details(&events[index])? == Flow::MainMenu {
                        return Ok(Flow::MainMenu);
                    }
                }
            }
        }
    }

    /// Detailed view of one event, with register-from-here.
    fn event_details(&mut self, event: &Event) -> Result<Flow> {
        writeln!(self.ui.out(), "\n{}", "=".repeat(50))?;
        writeln!(self.ui.out(), "{:^50}", "EVENT DETAILS")?;
        writeln!(self.ui.out(), "{}", "=".repeat(50))?;
        writeln!(self.ui.out(), "{:<20}: {}", "ID", event.id)?;
        writeln!(self.ui.out(), "{:<20}: {}", "Name", event.name)?;
        writeln!(
            self.ui.out(),
            "{:<20}: {}",
            "Type",
            event.event_type.as_deref().unwrap_or("-")
        )?;
        match event.event_date {
            Some(date) => writeln!(self.ui.out(), "{:<20}: {date}", "Date")?,
            None => writeln!(self.ui.out(), "{:<20}: -", "Date")?,
        }
        writeln!(
            self.ui.out(),
            "{:<20}: {}",
            "Location",
            event.location.as_deref().unwrap_or("-")
        )?;
        writeln!(
            self.ui.out(),
            "{:<20}: {}",
            "Description",
            event.description.as_deref().unwrap_or("-")
        )?;

        writeln!(self.ui.out(), "\nOptions:")?;
        writeln!(self.ui.out(), "[R]egister for this event")?;
        writeln!(self.ui.out(), "[B]ack to list")?;
        writeln!(self.ui.out(), "[M]ain menu")?;

        loop {
            match self.ui.prompt("Choose an option: ")?.to_lowercase().as_str() {
                "r" => {
                    self.register_event(Some(event.id))?;
                    return Ok(Flow::Stay);
                }
                "b" => return Ok(Flow::Stay),
                "m" => return Ok(Flow::MainMenu),
                _ => writeln!(self.ui.out(), "Invalid choice. Try again.")?,
            }
        }
    }

    /// Registration flow, optionally with the event already chosen
    /// (from the event detail view).
    pub fn register_event(&mut self, preselected: Option<EventId>) -> Result<()> {
        writeln!(self.ui.out(), "\n--- Register for an Event ---")?;

        let found = match self.read_id("Enter your Borrower ID: ")? {
            Some(raw) => self.db.get_borrower(BorrowerId::from_raw(raw))?,
            None => None,
        };
        let Some(borrower) = found else {
            writeln!(
                self.ui.out(),
                "Invalid Borrower ID. Please create an account first or recheck your ID."
            )?;
            return Ok(());
        };

        let event_id = match preselected {
            Some(id) => id,
            None => match self.read_id("Enter the Event ID you want to register for: ")? {
                Some(raw) => EventId::from_raw(raw),
                None => {
                    writeln!(self.ui.out(), "No event found with that ID.")?;
                    return Ok(());
                }
            },
        };

        if self.db.get_event(event_id)?.is_none() {
            writeln!(self.ui.out(), "No event found with that ID.")?;
            return Ok(());
        }

        match self.db.register_for_event(event_id, borrower.id) {
            Ok(registration_id) => {
                writeln!(self.ui.out(), "Successfully registered for the event!")?;
                writeln!(
                    self.ui.out(),
                    "Your Event Registration ID is: {registration_id}"
                )?;
            }
            Err(Error::Duplicate { .. }) => {
                writeln!(self.ui.out(), "You are already registered for this event.")?;
            }
            Err(Error::Constraint(_)) => {
                writeln!(
                    self.ui.out(),
                    "Error registering for the event (duplicate or constraint issue)."
                )?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
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
        db.insert_event(
            "Poetry Night",
            Some("Open Mic"),
            NaiveDate::from_ymd_opt(2026, 9, 20),
            Some("Community Room"),
            None,
        )
        .unwrap();
        db
    }

    #[test]
    fn test_find_event_and_register_from_details() {
        let db = setup();
        let shown = run_session("5\npoetry\n1\nr\n1\nm\n10\n", &db);
        assert!(shown.contains("EVENT DETAILS"));
        assert!(shown.contains("Successfully registered for the event!"));
        assert!(shown.contains("Your Event Registration ID is: 1"));
    }

    #[test]
    fn test_register_directly_by_event_id() {
        let db = setup();
        let shown = run_session("6\n1\n1\n10\n", &db);
        assert!(shown.contains("Successfully registered for the event!"));
    }

    #[test]
    fn test_duplicate_registration_message() {
        let db = setup();
        run_session("6\n1\n1\n10\n", &db);
        let shown = run_session("6\n1\n1\n10\n", &db);
        assert!(shown.contains("You are already registered for this event."));
    }

    #[test]
    fn test_unknown_event_id() {
        let db = setup();
        let shown = run_session("6\n1\n42\n10\n", &db);
        assert!(shown.contains("No event found with that ID."));
    }

    #[test]
    fn test_no_events_found() {
        let db = setup();
        let shown = run_session("5\nknitting\n10\n", &db);
        assert!(shown.contains("No events found with that name."));
    }
}
