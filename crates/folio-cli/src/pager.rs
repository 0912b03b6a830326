//! A generic pager for tabular result sets.
//!
//! Every listing screen (catalog, search results, open loans, events,
//! librarians) pages through its rows with the same controls:
//! `[N]ext Page | [P]revious Page | [M]ain Menu | [Select Number]`.
//! Row numbers are 1-based across the whole result set, and a number
//! may be selected even when its row is on another page.

use std::io::{self, BufRead, Write};

use crate::console::Console;
use crate::table::{self, Column};

/// How a paging session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// The user picked the row at this 0-based index.
    Selected(usize),
    /// The user asked for the main menu.
    MainMenu,
}

/// A paging session over pre-rendered rows.
///
/// The pager keeps its current page between `run` calls, so a caller
/// can show a detail view for a selected row and come back to the same
/// page.
#[derive(Debug)]
pub struct Pager {
    title: String,
    columns: &'static [Column],
    rows: Vec<Vec<String>>,
    page: usize,
    page_size: usize,
}

impl Pager {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        columns: &'static [Column],
        rows: Vec<Vec<String>>,
        page_size: usize,
    ) -> Self {
        Self {
            title: title.into(),
            columns,
            rows,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Display pages and handle controls until the user selects a row
    /// or asks for the main menu.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        ui: &mut Console<R, W>,
    ) -> io::Result<PageAction> {
        loop {
            let start = self.page * self.page_size;
            let end = (start + self.page_size).min(self.rows.len());

            writeln!(ui.out(), "\n---------    {}    ---------------", self.title)?;
            writeln!(ui.out(), "{}", table::header_line(self.columns))?;
            writeln!(ui.out(), "{}", table::rule(self.columns))?;
            for (offset, row) in self.rows[start..end].iter().enumerate() {
                writeln!(ui.out(), "{}", table::row_line(start + offset + 1, row))?;
            }

            writeln!(
                ui.out(),
                "\nOptions: [N]ext Page | [P]revious Page | [M]ain Menu | [Select Number]"
            )?;
            let choice = ui.prompt("\nChoose an option: ")?.to_lowercase();

            match choice.as_str() {
                "n" => {
                    if end < self.rows.len() {
                        self.page += 1;
                    } else {
                        writeln!(ui.out(), "Already on the last page.")?;
                    }
                }
                "p" => {
                    if self.page > 0 {
                        self.page -= 1;
                    } else {
                        writeln!(ui.out(), "Already on the first page.")?;
                    }
                }
                "m" => return Ok(PageAction::MainMenu),
                other => match other.parse::<usize>() {
                    Ok(no) if no >= 1 && no <= self.rows.len() => {
                        return Ok(PageAction::Selected(no - 1));
                    }
                    Ok(_) => writeln!(ui.out(), "Invalid selection.")?,
                    Err(_) => writeln!(ui.out(), "Invalid choice. Try again.")?,
                },
            }
        }
    }
}
