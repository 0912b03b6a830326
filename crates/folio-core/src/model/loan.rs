use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ids::{BorrowerId, CopyId, ItemId, LoanId};

/// Whether an accrued fine has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaidStatus {
    Paid,
    Unpaid,
}

impl PaidStatus {
    /// The text stored in the `loans.paid_status` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Unpaid => "Unpaid",
        }
    }

    #[must_use]
    pub fn from_column(text: &str) -> Self {
        match text {
            "Paid" => Self::Paid,
            _ => Self::Unpaid,
        }
    }
}

/// A borrowing transaction: one copy lent to one borrower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub borrower_id: BorrowerId,
    pub copy_id: CopyId,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,

    /// Stamped when the copy comes back; `None` while out.
    pub return_date: Option<NaiveDate>,

    /// Accrued overdue fine, recomputed by fine assessment.
    pub fine_amount: f64,

    pub paid_status: PaidStatus,
}

/// A row of the "your borrowed items" listing: an open loan joined with
/// the catalog item behind its copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenLoan {
    pub loan_id: LoanId,
    pub item_id: ItemId,
    pub title: String,
    pub author_creator: Option<String>,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_status_column_round_trip() {
        assert_eq!(PaidStatus::from_column("Paid"), PaidStatus::Paid);
        assert_eq!(PaidStatus::from_column("Unpaid"), PaidStatus::Unpaid);
        assert_eq!(PaidStatus::from_column("???"), PaidStatus::Unpaid);
    }
}
