//! The interactive menu system.
//!
//! One `Menu` drives the whole session: the main menu plus every
//! screen under it. Screens that page through results report whether
//! the user asked to unwind to the main menu via [`Flow`], instead of
//! re-entering the main loop recursively.

pub mod accounts;
pub mod catalog;
pub mod circulation;
pub mod events;
pub mod personnel;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use folio_core::schema::Database;

use crate::config::Config;
use crate::console::Console;

/// How a screen finished: stay where the caller is, or unwind all the
/// way to the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Stay,
    MainMenu,
}

/// Circulation knobs the menus need from the configuration.
#[derive(Debug, Clone, Copy)]
pub struct MenuOptions {
    pub items_per_page: usize,
    pub loan_period_days: u64,
    pub daily_fine_rate: f64,
}

impl From<&Config> for MenuOptions {
    fn from(config: &Config) -> Self {
        Self {
            items_per_page: config.items_per_page,
            loan_period_days: config.loan_period_days,
            daily_fine_rate: config.daily_fine_rate,
        }
    }
}

/// The interactive session: a database, a console, and the options.
#[derive(Debug)]
pub struct Menu<'a, R, W> {
    pub(crate) db: &'a Database,
    pub(crate) ui: &'a mut Console<R, W>,
    pub(crate) opts: MenuOptions,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(db: &'a Database, ui: &'a mut Console<R, W>, opts: MenuOptions) -> Self {
        Self { db, ui, opts }
    }

    /// Run the main menu until the user exits (or input ends).
    pub fn run(&mut self) -> Result<()> {
        // Overdue fines are brought up to date once per session start;
        // returns reassess as they happen.
        self.db.assess_fines(self.opts.daily_fine_rate)?;

        loop {
            writeln!(self.ui.out(), "\nLibrary System")?;
            writeln!(self.ui.out(), "1. Find an item in the library")?;
            writeln!(self.ui.out(), "2. Borrow an item from the library")?;
            writeln!(self.ui.out(), "3. Return a borrowed item")?;
            writeln!(self.ui.out(), "4. Donate an item to the library")?;
            writeln!(self.ui.out(), "5. Find an event in the library")?;
            writeln!(self.ui.out(), "6. Register for an event")?;
            writeln!(self.ui.out(), "7. Volunteer for the library")?;
            writeln!(self.ui.out(), "8. Ask for help from a librarian")?;
            writeln!(self.ui.out(), "9. Register for an account")?;
            writeln!(self.ui.out(), "10. Exit")?;

            let choice = match self.ui.prompt("\nSelect an option: ") {
                Ok(choice) => choice,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e.into()),
            };

            let outcome: Result<()> = match choice.as_str() {
                "10" => {
                    writeln!(self.ui.out(), "Exiting system. Goodbye!")?;
                    break;
                }
                "1" => self.find_item().map(|_| ()),
                "2" => self.borrow_item(),
                "3" => self.return_item(),
                "4" => self.donate_item(),
                "5" => self.find_event().map(|_| ()),
                "6" => self.register_event(None),
                "7" => self.volunteer(),
                "8" => self.ask_help().map(|_| ()),
                "9" => self.register_account(),
                _ => {
                    writeln!(self.ui.out(), "Invalid choice. Try again.")?;
                    Ok(())
                }
            };

            match outcome {
                Ok(()) => {}
                Err(e) if is_eof(&e) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Prompt for a numeric id. A non-numeric reply is `None`, the
    /// same as an id that matches nothing.
    pub(crate) fn read_id(&mut self, message: &str) -> io::Result<Option<i64>> {
        Ok(self.ui.prompt(message)?.parse().ok())
    }
}

fn is_eof(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(script: &str, db: &Database) -> String {
        let mut out = Vec::new();
        {
            let mut ui = Console::new(script.as_bytes(), &mut out);
            let opts = MenuOptions::from(&Config::default());
            Menu::new(db, &mut ui, opts).run().unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_option() {
        let db = Database::open_in_memory().unwrap();
        let shown = run_session("10\n", &db);
        assert!(shown.contains("Library System"));
        assert!(shown.contains("Exiting system. Goodbye!"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let db = Database::open_in_memory().unwrap();
        let shown = run_session("banana\n10\n", &db);
        assert!(shown.contains("Invalid choice. Try again."));
        assert!(shown.contains("Goodbye"));
    }

    #[test]
    fn test_end_of_input_winds_down() {
        let db = Database::open_in_memory().unwrap();
        // No exit option; the script just ends
        let shown = run_session("", &db);
        assert!(shown.contains("Library System"));
    }
}
