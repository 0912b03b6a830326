//! Scripted end-to-end menu sessions against an on-disk database.
//!
//! Each test feeds a whole visit through `Menu::run` as console input,
//! then checks both the transcript and the database afterwards.
//! Focused scripted tests for individual screens live beside the menu
//! modules.

use folio::config::Config;
use folio::console::Console;
use folio::menu::{Menu, MenuOptions};
use folio_core::model::{BorrowerId, CopyId, CopyStatus};
use folio_core::schema::Database;
use tempfile::TempDir;

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
fn test_scripted_visit_register_donate_borrow_return() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("folio.db");

    // One visit: register an account (9), donate an item (4), borrow
    // it (2), return it (3), exit (10).
    let script = "9\nAda Lovelace\nada@example.org\n555-0100\n12 Analytical Way\n\
                  4\nDune\nBook\nFrank Herbert\n1965\n\
                  2\n1\n1\n\
                  3\n1\n1\n\
                  10\n";
    {
        let db = Database::open(&db_path).unwrap();
        let shown = run_session(script, &db);

        assert!(shown.contains("Account created successfully! Your Borrower ID is: 1"));
        assert!(shown.contains("New item added to the library catalog!"));
        assert!(shown.contains("Item borrowed successfully! Due in 14 days."));
        assert!(shown.contains("Your Transaction ID is: 1"));
        assert!(shown.contains("Your Borrowed Items"));
        assert!(shown.contains("Item returned successfully!"));
        assert!(shown.contains("Exiting system. Goodbye!"));
    }

    // Everything the session did survives reopening the database file.
    let db = Database::open(&db_path).unwrap();
    let items = db.search_items("Dune").unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(db.available_copy_count(items[0].id).unwrap(), 1);

    let copy = db.get_copy(CopyId::from_raw(1)).unwrap().unwrap();
    assert_eq!(copy.status, CopyStatus::OnShelf);

    assert!(db.open_loans(BorrowerId::from_raw(1)).unwrap().is_empty());
    let returned: bool = db
        .conn()
        .query_row(
            "SELECT return_date IS NOT NULL FROM loans WHERE id = 1",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(returned);
}

#[test]
fn test_scripted_seeded_session_events_volunteers_librarians() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("folio.db");

    let db = Database::open(&db_path).unwrap();
    db.seed_demo().unwrap();

    // Register an account (9), find an event and register from its
    // details (5), volunteer (7), look up a librarian (8), exit (10).
    let script = "9\nSam Reader\nsam@example.org\n\n\n\
                  5\nPoetry\n1\nr\n1\nm\n\
                  7\nSam Reader\nsam@example.org\n555-0199\n\
                  8\n1\n\nm\n\
                  10\n";
    let shown = run_session(script, &db);

    assert!(shown.contains("Your Borrower ID is: 1"));
    assert!(shown.contains("EVENT DETAILS"));
    assert!(shown.contains("Successfully registered for the event!"));
    assert!(shown.contains("Successfully registered as a volunteer!"));
    assert!(shown.contains("--- Librarian Contact Info ---"));
    assert!(shown.contains("Exiting system. Goodbye!"));

    let event = &db.search_events("Poetry").unwrap()[0];
    let registrations: i64 = db
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM event_registrations WHERE event_id = ?1",
            [event.id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(registrations, 1);
}

#[test]
fn test_fines_assessed_when_a_session_starts() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("folio.db");

    let db = Database::open(&db_path).unwrap();
    let borrower = db
        .register_borrower("Ada Lovelace", "ada@example.org", "", "")
        .unwrap();
    let donation = db
        .donate("Dune", Some("Book"), Some("Frank Herbert"), Some(1965))
        .unwrap();
    let loan = db
        .borrow_first_available(borrower, donation.item_id, 14)
        .unwrap();

    // Make the loan overdue, the way time would
    db.conn()
        .execute(
            "UPDATE loans SET due_date = date('now', '-4 days') WHERE id = ?1",
            [loan],
        )
        .unwrap();

    // Opening the menu is enough; fines are brought up to date before
    // the first screen.
    run_session("10\n", &db);

    let fine: f64 = db
        .conn()
        .query_row("SELECT fine_amount FROM loans WHERE id = ?1", [loan], |row| {
            row.get(0)
        })
        .unwrap();
    assert!(fine >= 2.0, "4 days at 0.50/day should be at least 2.00");
}
