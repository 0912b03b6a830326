use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ids::{BorrowerId, EventId, RegistrationId};

/// A library event: reading group, author talk, children's hour, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub event_type: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// A borrower's sign-up for an event. At most one per
/// (event, borrower) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRegistration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub borrower_id: BorrowerId,
    pub registration_date: NaiveDate,
}
