use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain model representing a registered user.
/// Never mutated by this subsystem once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the repository; always positive.
    pub id: i64,
    pub name: String,
    pub birthday: NaiveDate,
}

/// Validated candidate for user creation. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub birthday: NaiveDate,
}
