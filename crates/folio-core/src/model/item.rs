use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{CopyId, ItemId};

/// Shelf status of a physical copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopyStatus {
    /// Available for borrowing.
    OnShelf,
    /// Out on loan.
    Borrowed,
}

impl CopyStatus {
    /// The text stored in the `copies.status` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnShelf => "onShelf",
            Self::Borrowed => "Borrowed",
        }
    }

    /// Parse a status column value. Unknown text is treated as borrowed
    /// so a damaged row can never be lent out.
    #[must_use]
    pub fn from_column(text: &str) -> Self {
        match text {
            "onShelf" => Self::OnShelf,
            _ => Self::Borrowed,
        }
    }
}

/// A cataloged title (book, DVD, periodical, ...), independent of how
/// many physical copies the library holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,

    /// Free-text kind: "Book", "DVD", "Magazine", ...
    pub item_type: Option<String>,

    /// Author, director, editor, or other creator.
    pub author_creator: Option<String>,

    pub year_published: Option<i32>,

    pub created_at: DateTime<Utc>,
}

/// A physical copy of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copy {
    pub id: CopyId,
    pub item_id: ItemId,
    pub status: CopyStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_column_round_trip() {
        assert_eq!(CopyStatus::from_column("onShelf"), CopyStatus::OnShelf);
        assert_eq!(CopyStatus::from_column("Borrowed"), CopyStatus::Borrowed);
        assert_eq!(
            CopyStatus::from_column(CopyStatus::OnShelf.as_str()),
            CopyStatus::OnShelf
        );
    }

    #[test]
    fn test_unknown_status_is_not_lendable() {
        assert_eq!(CopyStatus::from_column("water damage"), CopyStatus::Borrowed);
    }
}
