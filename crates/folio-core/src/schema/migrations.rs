/// A schema migration.
#[derive(Debug)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

const MIGRATION_001: &str = r"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Catalog items (one row per title, not per physical copy)
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    item_type TEXT,
    author_creator TEXT,
    year_published INTEGER,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_items_title ON items(title);
CREATE INDEX IF NOT EXISTS idx_items_author ON items(author_creator);

-- Physical copies of catalog items
CREATE TABLE IF NOT EXISTS copies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    item_id INTEGER NOT NULL REFERENCES items(id),
    status TEXT NOT NULL DEFAULT 'onShelf'
);

CREATE INDEX IF NOT EXISTS idx_copies_item_id ON copies(item_id);
CREATE INDEX IF NOT EXISTS idx_copies_status ON copies(item_id, status);

-- Borrower accounts
CREATE TABLE IF NOT EXISTS borrowers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    address TEXT,
    created_at TEXT NOT NULL
);

-- Borrowing transactions
CREATE TABLE IF NOT EXISTS loans (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    borrower_id INTEGER NOT NULL REFERENCES borrowers(id),
    copy_id INTEGER NOT NULL REFERENCES copies(id),
    borrow_date TEXT NOT NULL,
    due_date TEXT NOT NULL,
    return_date TEXT,
    fine_amount REAL NOT NULL DEFAULT 0,
    paid_status TEXT NOT NULL DEFAULT 'Unpaid'
);

CREATE INDEX IF NOT EXISTS idx_loans_borrower_id ON loans(borrower_id);
CREATE INDEX IF NOT EXISTS idx_loans_open ON loans(borrower_id, return_date);

-- Library events
CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    event_type TEXT,
    event_date TEXT,
    location TEXT,
    description TEXT
);

CREATE INDEX IF NOT EXISTS idx_events_name ON events(name);

-- Event sign-ups (one per event/borrower pair)
CREATE TABLE IF NOT EXISTS event_registrations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    event_id INTEGER NOT NULL REFERENCES events(id),
    borrower_id INTEGER NOT NULL REFERENCES borrowers(id),
    registration_date TEXT NOT NULL,
    UNIQUE (event_id, borrower_id)
);

CREATE INDEX IF NOT EXISTS idx_registrations_event ON event_registrations(event_id);

-- Staff and volunteers
CREATE TABLE IF NOT EXISTS personnel (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    role TEXT NOT NULL,
    email TEXT,
    phone TEXT
);

CREATE INDEX IF NOT EXISTS idx_personnel_role ON personnel(role);
";

pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: MIGRATION_001,
}];
