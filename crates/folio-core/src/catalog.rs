//! Catalog operations: listing, title search, copy availability, and
//! donations.

use chrono::Utc;
use rusqlite::OptionalExtension;

use crate::error::{Error, Result};
use crate::model::{CatalogItem, Copy, CopyId, CopyStatus, ItemId};
use crate::schema::db::datetime_from_column;
use crate::schema::Database;

/// Outcome of a donation: which item the new copy was filed under, and
/// whether that item had to be cataloged first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Donation {
    pub item_id: ItemId,
    pub copy_id: CopyId,
    pub newly_cataloged: bool,
}

impl Database {
    /// Insert a new catalog item (no copies yet).
    pub fn insert_item(
        &self,
        title: &str,
        item_type: Option<&str>,
        author_creator: Option<&str>,
        year_published: Option<i32>,
    ) -> Result<ItemId> {
        if title.trim().is_empty() {
            return Err(Error::InvalidData("item title must not be empty".into()));
        }
        self.conn().execute(
            "INSERT INTO items (title, item_type, author_creator, year_published, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                title,
                item_type,
                author_creator,
                year_published,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(ItemId::from_raw(self.conn().last_insert_rowid()))
    }

    /// List the whole catalog, ordered by title.
    pub fn list_items(&self) -> Result<Vec<CatalogItem>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, title, item_type, author_creator, year_published, created_at
             FROM items
             ORDER BY title",
        )?;
        let items = stmt
            .query_map([], row_to_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// Search the catalog by partial title match.
    pub fn search_items(&self, title: &str) -> Result<Vec<CatalogItem>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, title, item_type, author_creator, year_published, created_at
             FROM items
             WHERE title LIKE ?1
             ORDER BY title",
        )?;
        let items = stmt
            .query_map([format!("%{title}%")], row_to_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// Look up a single catalog item.
    pub fn get_item(&self, id: ItemId) -> Result<Option<CatalogItem>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, title, item_type, author_creator, year_published, created_at
             FROM items
             WHERE id = ?1",
        )?;
        let item = stmt.query_row([id], row_to_item).optional()?;
        Ok(item)
    }

    /// Add a physical copy of an item, shelved and available.
    pub fn add_copy(&self, item_id: ItemId) -> Result<CopyId> {
        self.conn().execute(
            "INSERT INTO copies (item_id, status) VALUES (?1, ?2)",
            rusqlite::params![item_id, CopyStatus::OnShelf.as_str()],
        )?;
        Ok(CopyId::from_raw(self.conn().last_insert_rowid()))
    }

    /// Look up a single copy.
    pub fn get_copy(&self, id: CopyId) -> Result<Option<Copy>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT id, item_id, status FROM copies WHERE id = ?1")?;
        let copy = stmt.query_row([id], row_to_copy).optional()?;
        Ok(copy)
    }

    /// How many copies of an item are currently on the shelf.
    pub fn available_copy_count(&self, item_id: ItemId) -> Result<i64> {
        let count = self.conn().query_row(
            "SELECT COUNT(*) FROM copies WHERE item_id = ?1 AND status = ?2",
            rusqlite::params![item_id, CopyStatus::OnShelf.as_str()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// The first on-shelf copy of an item, if any.
    pub fn first_available_copy(&self, item_id: ItemId) -> Result<Option<CopyId>> {
        let mut stmt = self.conn().prepare(
            "SELECT id FROM copies WHERE item_id = ?1 AND status = ?2 ORDER BY id LIMIT 1",
        )?;
        let copy = stmt
            .query_row(
                rusqlite::params![item_id, CopyStatus::OnShelf.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(copy)
    }

    /// Accept a donated item.
    ///
    /// If a catalog item with the same title and author already exists,
    /// only a new copy is added; otherwise the item is cataloged first.
    pub fn donate(
        &self,
        title: &str,
        item_type: Option<&str>,
        author_creator: Option<&str>,
        year_published: Option<i32>,
    ) -> Result<Donation> {
        let existing: Option<ItemId> = self
            .conn()
            .query_row(
                "SELECT id FROM items WHERE title = ?1 AND author_creator IS ?2",
                rusqlite::params![title, author_creator],
                |row| row.get(0),
            )
            .optional()?;

        let (item_id, newly_cataloged) = match existing {
            Some(id) => (id, false),
            None => (
                self.insert_item(title, item_type, author_creator, year_published)?,
                true,
            ),
        };
        let copy_id = self.add_copy(item_id)?;

        log::info!(
            "Donation filed under item {item_id} (copy {copy_id}, new item: {newly_cataloged})"
        );
        Ok(Donation {
            item_id,
            copy_id,
            newly_cataloged,
        })
    }
}

fn row_to_item(row: &rusqlite::Row) -> rusqlite::Result<CatalogItem> {
    let created_at: String = row.get(5)?;
    Ok(CatalogItem {
        id: row.get(0)?,
        title: row.get(1)?,
        item_type: row.get(2)?,
        author_creator: row.get(3)?,
        year_published: row.get(4)?,
        created_at: datetime_from_column(5, &created_at)?,
    })
}

fn row_to_copy(row: &rusqlite::Row) -> rusqlite::Result<Copy> {
    let status: String = row.get(2)?;
    Ok(Copy {
        id: row.get(0)?,
        item_id: row.get(1)?,
        status: CopyStatus::from_column(&status),
    })
}
