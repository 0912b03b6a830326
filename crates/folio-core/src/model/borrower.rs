use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::BorrowerId;

/// A registered borrower account.
///
/// The numeric id doubles as the "Borrower ID" patrons type at the
/// prompts, so it is surfaced everywhere the way the desk staff would
/// read it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borrower {
    pub id: BorrowerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}
