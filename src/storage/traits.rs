//! # Storage Traits
//!
//! Interfaces of the persistence collaborator the gate delegates to after
//! validation. The gate assumes implementations are correct: it never
//! retries, batches, or reorders repository calls, and repository failures
//! pass through to the caller unmodified.

use anyhow::Result;

use crate::domain::models::account::{Account, NewAccount};
use crate::domain::models::user::{NewUser, User};

/// Interface for user persistence.
pub trait UserStorage: Send + Sync {
    /// Persist a validated candidate and return the created user with its
    /// assigned identifier.
    fn create_user(&self, new_user: &NewUser) -> Result<User>;
}

/// Interface for account persistence.
pub trait AccountStorage: Send + Sync {
    /// Persist a validated candidate and return the created account with its
    /// assigned identifier.
    fn create_account(&self, new_account: &NewAccount) -> Result<Account>;

    /// All accounts owned by `user_id`, in backend order. Empty when the
    /// user owns none.
    fn accounts_by_user(&self, user_id: i64) -> Result<Vec<Account>>;

    /// Delete `account_id` if it exists and is owned by `user_id`.
    /// Returns `Ok(false)` when it is absent or owned by someone else;
    /// `Err` is reserved for backend failures.
    fn delete_account(&self, user_id: i64, account_id: i64) -> Result<bool>;
}
