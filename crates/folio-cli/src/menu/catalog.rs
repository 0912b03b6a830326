//! Catalog screens: find (list/search), item details, donations.

use std::io::{BufRead, Write};

use anyhow::Result;
use folio_core::model::CatalogItem;

use crate::menu::{Flow, Menu};
use crate::pager::{PageAction, Pager};
use crate::table::Column;

const ITEM_COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::new("Title"),
    Column::new("Type"),
    Column::new("Author"),
    Column::new("Year"),
];

fn item_rows(items: &[CatalogItem]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|item| {
            vec![
                item.id.to_string(),
                item.title.clone(),
                item.item_type.clone().unwrap_or_default(),
                item.author_creator.clone().unwrap_or_default(),
                item.year_published.map(|y| y.to_string()).unwrap_or_default(),
            ]
        })
        .collect()
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    /// The "Find Library Items" submenu.
    pub fn find_item(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.ui.out(), "\n--- Find Library Items ---")?;
            writeln!(self.ui.out(), "1. List all items")?;
            writeln!(self.ui.out(), "2. Search by title")?;
            writeln!(self.ui.out(), "3. Return to main menu")?;

            match self.ui.prompt("\nSelect an option: ")?.as_str() {
                "1" => {
                    if self.list_all_items()? == Flow::MainMenu {
                        return Ok(Flow::MainMenu);
                    }
                }
                "2" => {
                    if self.search_by_title()? == Flow::MainMenu {
                        return Ok(Flow::MainMenu);
                    }
                }
                "3" => return Ok(Flow::Stay),
                _ => writeln!(self.ui.out(), "Invalid choice. Please try again.")?,
            }
        }
    }

    fn list_all_items(&mut self) -> Result<Flow> {
        let items = self.db.list_items()?;
        if items.is_empty() {
            writeln!(self.ui.out(), "\nNo items found in the library.")?;
            return Ok(Flow::Stay);
        }
        self.page_items(&items, "All Library Items")
    }

    fn search_by_title(&mut self) -> Result<Flow> {
        let title = self
            .ui
            .prompt("\nEnter title of the item (leave blank to return): ")?;
        if title.is_empty() {
            return Ok(Flow::Stay);
        }

        let items = self.db.search_items(&title)?;
        if items.is_empty() {
            writeln!(self.ui.out(), "\nNo items found matching that title.")?;
            return Ok(Flow::Stay);
        }
        self.page_items(&items, &format!("Search Results for '{title}'"))
    }

    /// Page through items; a selection opens the detail view, then
    /// returns to the same page.
    fn page_items(&mut self, items: &[CatalogItem], title: &str) -> Result<Flow> {
        let mut pager = Pager::new(title, ITEM_COLUMNS, item_rows(items), self.opts.items_per_page);
        loop {
            match pager.run(self.ui)? {
                PageAction::MainMenu => return Ok(Flow::MainMenu),
                PageAction::Selected(index) => {
                    if self.item_details(&items[index])? == Flow::MainMenu {
                        return Ok(Flow::MainMenu);
                    }
                }
            }
        }
    }

    /// Detailed view of one catalog item, with borrow-from-here.
    fn item_details(&mut self, item: &CatalogItem) -> Result<Flow> {
        writeln!(self.ui.out(), "\n{}", "=".repeat(50))?;
        writeln!(self.ui.out(), "{:^50}", "ITEM DETAILS")?;
        writeln!(self.ui.out(), "{}", "=".repeat(50))?;
        writeln!(self.ui.out(), "{:<20}: {}", "ID", item.id)?;
        writeln!(self.ui.out(), "{:<20}: {}", "Title", item.title)?;
        writeln!(
            self.ui.out(),
            "{:<20}: {}",
            "Type",
            item.item_type.as_deref().unwrap_or("-")
        )?;
        writeln!(
            self.ui.out(),
            "{:<20}: {}",
            "Author/Creator",
            item.author_creator.as_deref().unwrap_or("-")
        )?;
        match item.year_published {
            Some(year) => writeln!(self.ui.out(), "{:<20}: {year}", "Year Published")?,
            None => writeln!(self.ui.out(), "{:<20}: -", "Year Published")?,
        }

        let available = self.db.available_copy_count(item.id)?;
        writeln!(self.ui.out(), "\n{}", "-".repeat(50))?;
        writeln!(self.ui.out(), "Available copies: {available}")?;
        writeln!(self.ui.out(), "{}", "-".repeat(50))?;

        writeln!(self.ui.out(), "\nOptions:")?;
        writeln!(self.ui.out(), "[B]orrow this item")?;
        writeln!(self.ui.out(), "[R]eturn to list")?;
        writeln!(self.ui.out(), "[M]ain menu")?;

        loop {
            match self.ui.prompt("Choose an option: ")?.to_lowercase().as_str() {
                "b" => {
                    if self.db.first_available_copy(item.id)?.is_none() {
                        writeln!(self.ui.out(), "\nNo available copies to borrow.\n")?;
                    } else {
                        self.borrow_flow(Some(item.id))?;
                    }
                    return Ok(Flow::Stay);
                }
                "r" => return Ok(Flow::Stay),
                "m" => return Ok(Flow::MainMenu),
                _ => writeln!(self.ui.out(), "Invalid choice. Try again.")?,
            }
        }
    }

    /// The donation flow: file a new copy, cataloging the item first
    /// when it is unknown.
    pub fn donate_item(&mut self) -> Result<()> {
        let title = self.ui.prompt("\nEnter title of the item: ")?;
        let item_type = self.ui.prompt("Enter item type: ")?;
        let author = self.ui.prompt("Enter author/creator: ")?;
        let year = self.ui.prompt("Enter year published: ")?;

        if title.trim().is_empty() {
            writeln!(self.ui.out(), "A donation needs at least a title.")?;
            return Ok(());
        }

        let donation = self.db.donate(
            &title,
            blank_to_none(&item_type),
            blank_to_none(&author),
            year.parse().ok(),
        )?;

        if donation.newly_cataloged {
            writeln!(self.ui.out(), "\nNew item added to the library catalog!")?;
        } else {
            writeln!(
                self.ui.out(),
                "\nThis item already exists in the library catalog. Adding a new copy..."
            )?;
        }
        writeln!(
            self.ui.out(),
            "A new copy has been added and is now available in the library!"
        )?;
        Ok(())
    }
}

fn blank_to_none(text: &str) -> Option<&str> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
