use serde::{Deserialize, Serialize};

/// Domain model representing a bank account owned by a user.
///
/// The gate never mutates `balance`; transfers and transactions are not part
/// of this subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Assigned by the repository.
    pub id: i64,
    /// Owning user; foreign key, positive.
    pub user_id: i64,
    /// Non-negative at creation.
    pub balance: f64,
    /// Three-character code, conventionally ISO 4217.
    pub currency: String,
}

/// Validated candidate for account creation. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub user_id: i64,
    pub balance: f64,
    pub currency: String,
}
