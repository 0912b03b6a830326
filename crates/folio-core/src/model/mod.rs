pub mod borrower;
pub mod event;
pub mod ids;
pub mod item;
pub mod loan;
pub mod personnel;

pub use borrower::Borrower;
pub use event::{Event, EventRegistration};
pub use ids::{BorrowerId, CopyId, EventId, ItemId, LoanId, PersonnelId, RegistrationId};
pub use item::{CatalogItem, Copy, CopyStatus};
pub use loan::{Loan, OpenLoan, PaidStatus};
pub use personnel::Personnel;
