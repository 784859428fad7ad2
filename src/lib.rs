//! # minibank
//!
//! Validation and authorization gate for a small banking service.
//!
//! The crate sits between a transport layer (HTTP, RPC, whatever the caller
//! supplies) and a persistence layer, and decides whether a request may touch
//! data at all. Every operation is a single validate-then-delegate step:
//!
//! 1. **Schema validation** ([`validation::schema`]) checks the raw payload
//!    against a declarative field shape and rejects malformed input.
//! 2. **Policy rules** ([`validation::policy`]) check semantic rules on the
//!    validated values (e.g. the minimum-age rule for user creation) and
//!    reject well-formed but not permitted requests.
//! 3. **Delegation**: only when both pass does the service call the
//!    [`storage::traits`] repository and return its result unchanged.
//!
//! The two rejection classes stay distinguishable all the way out through
//! [`ServiceError`], so an outer layer can map them to bad-request versus
//! forbidden/not-found without inspecting message strings.

pub mod domain;
pub mod storage;
pub mod validation;

pub use domain::errors::{ServiceError, Violations};
pub use domain::{AccountService, UserService};

use std::sync::Arc;

use storage::memory::{AccountRepository, MemoryStore, UserRepository};
use storage::traits::{AccountStorage, UserStorage};

/// Facade bundling the user and account services over a caller-supplied
/// storage backend.
pub struct Gate {
    pub user_service: UserService,
    pub account_service: AccountService,
}

impl Gate {
    /// Wire the services to the given repositories.
    pub fn new(users: Arc<dyn UserStorage>, accounts: Arc<dyn AccountStorage>) -> Self {
        Gate {
            user_service: UserService::new(users),
            account_service: AccountService::new(accounts),
        }
    }

    /// Wire the services to a fresh in-memory backend. Convenient for tests
    /// and for embedding the gate without external storage.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(
            Arc::new(UserRepository::new(store.clone())),
            Arc::new(AccountRepository::new(store)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gate_end_to_end() {
        let gate = Gate::in_memory();

        let user = gate
            .user_service
            .create_user(&json!({ "name": "Valentin R", "birthday": "1997-09-13" }))
            .unwrap();

        let account = gate
            .account_service
            .create_account(&json!({ "userId": user.id, "balance": 100, "currency": "EUR" }))
            .unwrap();
        assert_eq!(account.user_id, user.id);

        let listed = gate.account_service.list_accounts(&json!(user.id)).unwrap();
        assert_eq!(listed, vec![account.clone()]);

        let deleted = gate
            .account_service
            .delete_account(&json!(user.id), &json!(account.id))
            .unwrap();
        assert!(deleted);
        assert!(gate
            .account_service
            .list_accounts(&json!(user.id))
            .unwrap()
            .is_empty());
    }
}
