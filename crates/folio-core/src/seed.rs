//! Demo dataset for a fresh database.
//!
//! The interactive menus have no screens for creating events or hiring
//! librarians; `folio seed` fills those tables (plus a starter catalog)
//! so every menu has something to show.

use chrono::{Days, Utc};

use crate::error::Result;
use crate::schema::Database;

/// What `seed_demo` inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub items: usize,
    pub copies: usize,
    pub events: usize,
    pub personnel: usize,
}

const DEMO_ITEMS: &[(&str, &str, &str, i32, usize)] = &[
    ("A Wizard of Earthsea", "Book", "Ursula K. Le Guin", 1968, 2),
    ("The Left Hand of Darkness", "Book", "Ursula K. Le Guin", 1969, 1),
    ("Dune", "Book", "Frank Herbert", 1965, 3),
    ("Arrival", "DVD", "Denis Villeneuve", 2016, 1),
    ("National Geographic", "Magazine", "NatGeo Society", 2025, 4),
    ("The Name of the Rose", "Book", "Umberto Eco", 1980, 1),
];

const DEMO_EVENTS: &[(&str, &str, u64, &str, &str)] = &[
    (
        "Summer Reading Kickoff",
        "Reading",
        14,
        "Main Hall",
        "Launch of the summer reading challenge, all ages.",
    ),
    (
        "Poetry Night",
        "Open Mic",
        21,
        "Community Room",
        "Bring a poem, yours or a favourite.",
    ),
    (
        "Intro to Genealogy",
        "Workshop",
        30,
        "Research Desk",
        "Tracing family history with library databases.",
    ),
];

const DEMO_PERSONNEL: &[(&str, &str, &str, &str)] = &[
    ("Marta Quill", "Head Librarian", "marta@folio.example", "555-0101"),
    ("Jo Stacks", "Children's Librarian", "jo@folio.example", "555-0102"),
    ("Ren Folger", "Reference Librarian", "ren@folio.example", "555-0103"),
];

impl Database {
    /// Insert the demo catalog, events, and staff. Safe to run more
    /// than once in the sense that it simply inserts another batch;
    /// callers should check `is_empty` first.
    pub fn seed_demo(&self) -> Result<SeedSummary> {
        let mut summary = SeedSummary::default();
        let today = Utc::now().date_naive();

        for &(title, item_type, author, year, copies) in DEMO_ITEMS {
            let item_id = self.insert_item(title, Some(item_type), Some(author), Some(year))?;
            summary.items += 1;
            for _ in 0..copies {
                self.add_copy(item_id)?;
                summary.copies += 1;
            }
        }

        for &(name, event_type, days_ahead, location, description) in DEMO_EVENTS {
            let date = today.checked_add_days(Days::new(days_ahead));
            self.insert_event(name, Some(event_type), date, Some(location), Some(description))?;
            summary.events += 1;
        }

        for &(name, role, email, phone) in DEMO_PERSONNEL {
            self.insert_personnel(name, role, Some(email), Some(phone))?;
            summary.personnel += 1;
        }

        log::info!(
            "Seeded {} items, {} copies, {} events, {} personnel",
            summary.items,
            summary.copies,
            summary.events,
            summary.personnel
        );
        Ok(summary)
    }

    /// True when the catalog, events, and personnel tables are all
    /// empty (a fresh database).
    pub fn is_empty(&self) -> Result<bool> {
        let count: i64 = self.conn().query_row(
            "SELECT (SELECT COUNT(*) FROM items)
                  + (SELECT COUNT(*) FROM events)
                  + (SELECT COUNT(*) FROM personnel)",
            [],
            |row| row.get(0),
        )?;
        Ok(count == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_fills_every_menu_backing_table() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.is_empty().unwrap());

        let summary = db.seed_demo().unwrap();
        assert_eq!(summary.items, DEMO_ITEMS.len());
        assert!(summary.copies > summary.items);
        assert_eq!(summary.events, DEMO_EVENTS.len());
        assert_eq!(summary.personnel, DEMO_PERSONNEL.len());

        assert!(!db.is_empty().unwrap());
        assert!(!db.list_librarians().unwrap().is_empty());
        assert!(!db.search_events("").unwrap().is_empty());
    }

    #[test]
    fn test_seeded_copies_are_borrowable() {
        let db = Database::open_in_memory().unwrap();
        db.seed_demo().unwrap();

        let dune = &db.search_items("Dune").unwrap()[0];
        assert_eq!(db.available_copy_count(dune.id).unwrap(), 3);
    }
}
