use serde::{Deserialize, Serialize};

use crate::model::ids::PersonnelId;

/// Role text recorded for self-registered volunteers.
pub const VOLUNTEER_ROLE: &str = "Volunteer";

/// A staff member or volunteer.
///
/// `role` is free text ("Head Librarian", "Children's Librarian",
/// "Volunteer"); librarian lookups match any role containing
/// "Librarian".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personnel {
    pub id: PersonnelId,
    pub name: String,
    pub role: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}
