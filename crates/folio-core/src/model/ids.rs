use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw SQLite rowid.
            #[must_use]
            pub const fn from_raw(id: i64) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                self.0.to_sql()
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

define_id!(ItemId, "Identifier for a catalog item (a title, not a copy).");
define_id!(CopyId, "Identifier for a physical copy of a catalog item.");
define_id!(BorrowerId, "Identifier for a registered borrower account.");
define_id!(LoanId, "Identifier for a borrowing transaction.");
define_id!(EventId, "Identifier for a library event.");
define_id!(RegistrationId, "Identifier for an event registration.");
define_id!(PersonnelId, "Identifier for a staff member or volunteer.");
